//! NAPTR load balancer domain layer
pub mod balance_mode;
pub mod config;
pub mod dns_record;
pub mod errors;

pub use balance_mode::BalanceMode;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::RecordType;
pub use errors::DomainError;
