#![allow(dead_code)]
use naptr_lb_application::ports::EntropySource;
use naptr_lb_domain::RecordType;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Replays a fixed list of draws, cycling when exhausted.
pub struct ScriptedEntropy {
    values: Vec<u16>,
    position: AtomicUsize,
}

impl ScriptedEntropy {
    pub fn new(values: &[u16]) -> Self {
        assert!(!values.is_empty(), "script needs at least one value");
        Self {
            values: values.to_vec(),
            position: AtomicUsize::new(0),
        }
    }

    pub fn draws(&self) -> usize {
        self.position.load(Ordering::SeqCst)
    }
}

impl EntropySource for ScriptedEntropy {
    fn next_u16(&self) -> u16 {
        let n = self.position.fetch_add(1, Ordering::SeqCst);
        self.values[n % self.values.len()]
    }
}

/// Deterministic pseudo-random draws for distribution checks.
pub struct SeededEntropy {
    rng: Mutex<fastrand::Rng>,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn next_u16(&self) -> u16 {
        self.rng.lock().unwrap().u16(..)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub record_type: RecordType,
    pub target: &'static str,
}

pub fn naptr(target: &'static str) -> TestRecord {
    TestRecord {
        record_type: RecordType::NAPTR,
        target,
    }
}

pub fn a(target: &'static str) -> TestRecord {
    TestRecord {
        record_type: RecordType::A,
        target,
    }
}

pub fn is_naptr(record: &TestRecord) -> bool {
    record.record_type == RecordType::NAPTR
}

pub fn targets(records: &[TestRecord]) -> Vec<&'static str> {
    records.iter().map(|r| r.target).collect()
}
