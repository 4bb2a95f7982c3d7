use naptr_lb_application::ports::EntropySource;
use std::sync::Mutex;

/// Draws from the thread-local `fastrand` generator, the same one used for
/// DNS message IDs.
///
/// Every thread owns its own generator state, so concurrent queries never
/// contend on a lock.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastrandEntropy;

impl EntropySource for FastrandEntropy {
    fn next_u16(&self) -> u16 {
        fastrand::u16(..)
    }

    fn below(&self, bound: usize) -> usize {
        fastrand::usize(..bound)
    }
}

/// Reproducible generator started from a fixed seed.
///
/// Draws are serialized through a mutex, so the sequence is shared by all
/// queries in arrival order.
pub struct SeededEntropy {
    rng: Mutex<fastrand::Rng>,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut fastrand::Rng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut rng)
    }
}

impl EntropySource for SeededEntropy {
    fn next_u16(&self) -> u16 {
        self.with_rng(|rng| rng.u16(..))
    }

    fn below(&self, bound: usize) -> usize {
        self.with_rng(|rng| rng.usize(..bound))
    }
}
