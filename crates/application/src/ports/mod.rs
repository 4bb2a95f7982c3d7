mod entropy_source;

pub use entropy_source::EntropySource;
