use serde::{Deserialize, Serialize};

use super::balance::NaptrBalanceConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use crate::BalanceMode;

const LOCAL_CONFIG_PATH: &str = "naptr-lb.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/naptr-lb/config.toml";

/// Main configuration structure for the NAPTR load balancer
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream resolvers the forwarding handler talks to
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// NAPTR rewriting configuration
    #[serde(default)]
    pub naptr_balance: NaptrBalanceConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. naptr-lb.toml in current directory
    /// 3. /etc/naptr-lb/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if !overrides.upstream_servers.is_empty() {
            self.upstream.servers = overrides.upstream_servers;
        }
        if overrides.single {
            self.naptr_balance.directive = vec![BalanceMode::Single.as_str().to_string()];
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Rewriting mode selected by the `naptr_balance` directive
    pub fn balance_mode(&self) -> Result<BalanceMode, ConfigError> {
        self.naptr_balance.mode()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.upstream.servers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream servers configured".to_string(),
            ));
        }

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        self.upstream.socket_addrs()?;
        self.balance_mode()?;

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream_servers: Vec<String>,
    pub single: bool,
    pub log_level: Option<String>,
}
