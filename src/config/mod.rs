#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;

use crate::utils::error::{FreteError, Result};

pub const DEFAULT_CORREIOS_ENDPOINT: &str =
    "http://ws.correios.com.br/calculador/CalcPrecoPrazo.aspx";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which pricing path the process serves. Picked once at startup, never
/// per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ProviderMode {
    /// Local pricing model from CEP region distance.
    #[default]
    Heuristic,
    /// Delegate each tier to the Correios price API.
    Correios,
}

impl std::str::FromStr for ProviderMode {
    type Err = FreteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(ProviderMode::Heuristic),
            "correios" => Ok(ProviderMode::Correios),
            other => Err(FreteError::InvalidConfigValueError {
                field: "provider_mode".to_string(),
                value: other.to_string(),
                reason: "expected \"heuristic\" or \"correios\"".to_string(),
            }),
        }
    }
}
