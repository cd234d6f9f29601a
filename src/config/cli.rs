use crate::config::{ProviderMode, DEFAULT_CORREIOS_ENDPOINT};
use crate::core::ConfigProvider;
use crate::domain::model::{
    DEFAULT_ALTURA_CM, DEFAULT_COMPRIMENTO_CM, DEFAULT_LARGURA_CM, DEFAULT_PESO_KG,
};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "frete-service")]
#[command(about = "Cotação de frete PAC/SEDEX entre dois CEPs")]
pub struct CliConfig {
    #[arg(long, help = "CEP de origem (ex: 01310-100)")]
    pub cep_origem: String,

    #[arg(long, help = "CEP de destino (ex: 20040-020)")]
    pub cep_destino: String,

    #[arg(long, default_value_t = DEFAULT_PESO_KG, help = "Peso do pacote em kg")]
    pub peso: f64,

    #[arg(long, default_value_t = DEFAULT_COMPRIMENTO_CM)]
    pub comprimento: f64,

    #[arg(long, default_value_t = DEFAULT_ALTURA_CM)]
    pub altura: f64,

    #[arg(long, default_value_t = DEFAULT_LARGURA_CM)]
    pub largura: f64,

    #[arg(long, value_enum, default_value = "heuristic")]
    pub mode: ProviderMode,

    #[arg(long, default_value = DEFAULT_CORREIOS_ENDPOINT)]
    pub correios_endpoint: String,

    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn correios_endpoint(&self) -> &str {
        &self.correios_endpoint
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("cep_origem", &self.cep_origem)?;
        validate_non_empty_string("cep_destino", &self.cep_destino)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 300)?;

        if self.mode == ProviderMode::Correios {
            validate_url("correios_endpoint", &self.correios_endpoint)?;
        }

        Ok(())
    }
}
