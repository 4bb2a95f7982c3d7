mod chain;
mod config;
mod logging;

pub use chain::build_chain;
pub use config::load_config;
pub use logging::init_logging;
