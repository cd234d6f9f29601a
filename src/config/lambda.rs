use crate::config::{ProviderMode, DEFAULT_CORREIOS_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::env;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub provider_mode: ProviderMode,
    pub correios_endpoint: String,
    pub request_timeout_secs: u64,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let provider_mode = match env::var("PROVIDER_MODE") {
            Ok(raw) => raw.parse()?,
            Err(_) => ProviderMode::Heuristic,
        };

        Ok(Self {
            provider_mode,
            correios_endpoint: env::var("CORREIOS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_CORREIOS_ENDPOINT.to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn correios_endpoint(&self) -> &str {
        &self.correios_endpoint
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;

        if self.provider_mode == ProviderMode::Correios {
            validate_url("correios_endpoint", &self.correios_endpoint)?;
        }

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
