pub mod balance;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use balance::NaptrBalanceConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
