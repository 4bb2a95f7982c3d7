mod record_shuffler;

pub use record_shuffler::RecordShuffler;
