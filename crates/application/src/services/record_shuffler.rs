use naptr_lb_domain::BalanceMode;
use std::sync::Arc;
use tracing::trace;

use crate::ports::EntropySource;

/// Reorders (or reduces) the records of one type inside a record section.
///
/// The shuffler never looks inside a record: callers supply a predicate
/// that tells whether a record belongs to the balanced set.
pub struct RecordShuffler {
    mode: BalanceMode,
    entropy: Arc<dyn EntropySource>,
}

impl RecordShuffler {
    pub fn new(mode: BalanceMode, entropy: Arc<dyn EntropySource>) -> Self {
        Self { mode, entropy }
    }

    pub fn mode(&self) -> BalanceMode {
        self.mode
    }

    /// Split `records` into matching and non-matching records, rewrite the
    /// matching block and append it after the non-matching ones.
    ///
    /// With fewer than two matching records the input is returned as is,
    /// whatever the mode. Otherwise both groups keep their own relative
    /// order, and the matching group is shuffled ([`BalanceMode::Shuffle`])
    /// or reduced to one random member ([`BalanceMode::Single`]).
    pub fn select<R, F>(&self, records: Vec<R>, is_target: F) -> Vec<R>
    where
        F: Fn(&R) -> bool,
    {
        let target_count = records.iter().filter(|r| is_target(*r)).count();
        if target_count < 2 {
            return records;
        }

        let (mut targets, mut rest): (Vec<R>, Vec<R>) =
            records.into_iter().partition(|r| is_target(r));

        trace!(
            mode = %self.mode,
            targets = targets.len(),
            rest = rest.len(),
            "Rewriting record block"
        );

        match self.mode {
            BalanceMode::Shuffle => {
                self.shuffle(&mut targets);
                rest.append(&mut targets);
            }
            BalanceMode::Single => {
                let index = self.entropy.below(targets.len());
                rest.push(targets.swap_remove(index));
            }
        }

        rest
    }

    /// Randomize `records` in place.
    ///
    /// Two records take a single parity draw. Longer slices get a
    /// Fisher-Yates pass with one fresh draw per position.
    pub fn shuffle<R>(&self, records: &mut [R]) {
        match records.len() {
            0 | 1 => {}
            2 => {
                if self.entropy.next_u16() % 2 == 0 {
                    records.swap(0, 1);
                }
            }
            len => {
                for j in 0..len {
                    let p = j + self.entropy.below(len - j);
                    if p != j {
                        records.swap(j, p);
                    }
                }
            }
        }
    }
}
