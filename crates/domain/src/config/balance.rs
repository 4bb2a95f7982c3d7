use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::BalanceMode;

/// Arguments given to the `naptr_balance` directive.
///
/// ```toml
/// [naptr_balance]
/// directive = ["single"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NaptrBalanceConfig {
    #[serde(default)]
    pub directive: Vec<String>,

    /// Fixed seed for the shuffle generator. Unset in production; a fixed
    /// seed makes the sequence of permutations reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NaptrBalanceConfig {
    pub fn mode(&self) -> Result<BalanceMode, ConfigError> {
        BalanceMode::from_directive_args(&self.directive)
    }
}
