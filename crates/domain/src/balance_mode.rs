use crate::config::ConfigError;
use std::fmt;

/// How NAPTR records are rewritten in a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BalanceMode {
    /// Keep every NAPTR record, randomize their order.
    #[default]
    Shuffle,

    /// Keep exactly one NAPTR record, chosen at random.
    Single,
}

impl BalanceMode {
    pub const DIRECTIVE: &'static str = "naptr_balance";

    /// Parse the arguments that follow the `naptr_balance` directive.
    ///
    /// No argument selects [`BalanceMode::Shuffle`], the single token
    /// `single` selects [`BalanceMode::Single`]. Anything else is rejected.
    pub fn from_directive_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        match args {
            [] => Ok(BalanceMode::Shuffle),
            [arg] if arg.as_ref() == "single" => Ok(BalanceMode::Single),
            [arg] => Err(ConfigError::InvalidDirective(format!(
                "{}: unknown argument '{}'",
                Self::DIRECTIVE,
                arg.as_ref()
            ))),
            _ => Err(ConfigError::InvalidDirective(format!(
                "{}: expected at most one argument, got {}",
                Self::DIRECTIVE,
                args.len()
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceMode::Shuffle => "shuffle",
            BalanceMode::Single => "single",
        }
    }
}

impl fmt::Display for BalanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
