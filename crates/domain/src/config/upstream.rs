use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;

/// Servers the terminal forwarding handler sends queries to, tried in order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl UpstreamConfig {
    /// Parse every configured server, appending port 53 when none is given.
    pub fn socket_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.servers
            .iter()
            .map(|server| parse_server(server))
            .collect()
    }
}

fn parse_server(server: &str) -> Result<SocketAddr, ConfigError> {
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    server
        .parse::<std::net::IpAddr>()
        .map(|ip| SocketAddr::new(ip, 53))
        .map_err(|_| ConfigError::Validation(format!("Invalid upstream server '{}'", server)))
}

fn default_servers() -> Vec<String> {
    vec!["1.1.1.1:53".to_string(), "8.8.8.8:53".to_string()]
}

fn default_timeout_ms() -> u64 {
    2000
}
