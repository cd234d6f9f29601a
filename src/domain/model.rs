use crate::utils::error::{FreteError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PESO_KG: f64 = 0.3;
pub const DEFAULT_COMPRIMENTO_CM: f64 = 16.0;
pub const DEFAULT_ALTURA_CM: f64 = 2.0;
pub const DEFAULT_LARGURA_CM: f64 = 11.0;

/// Inbound quote request. Field names follow the wire contract used by the
/// storefront (`cepOrigem`, `cepDestino`, `peso`, dimensions in cm). The
/// dimensions are only consulted by the Correios provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(rename = "cepOrigem", default)]
    pub cep_origem: String,

    #[serde(rename = "cepDestino", default)]
    pub cep_destino: String,

    #[serde(default = "default_peso")]
    pub peso: f64,

    #[serde(default = "default_comprimento")]
    pub comprimento: f64,

    #[serde(default = "default_altura")]
    pub altura: f64,

    #[serde(default = "default_largura")]
    pub largura: f64,
}

fn default_peso() -> f64 {
    DEFAULT_PESO_KG
}

fn default_comprimento() -> f64 {
    DEFAULT_COMPRIMENTO_CM
}

fn default_altura() -> f64 {
    DEFAULT_ALTURA_CM
}

fn default_largura() -> f64 {
    DEFAULT_LARGURA_CM
}

impl QuoteRequest {
    pub fn new(cep_origem: impl Into<String>, cep_destino: impl Into<String>, peso: f64) -> Self {
        Self {
            cep_origem: cep_origem.into(),
            cep_destino: cep_destino.into(),
            peso,
            comprimento: DEFAULT_COMPRIMENTO_CM,
            altura: DEFAULT_ALTURA_CM,
            largura: DEFAULT_LARGURA_CM,
        }
    }

    /// Strips CEP separators, falls back to the default weight when `peso`
    /// is missing or non-positive, and rejects the request when either CEP
    /// is empty after normalization. Must run before any pricing.
    pub fn normalized(mut self) -> Result<Self> {
        self.cep_origem = normalize_cep(&self.cep_origem);
        self.cep_destino = normalize_cep(&self.cep_destino);

        if self.cep_origem.is_empty() || self.cep_destino.is_empty() {
            return Err(FreteError::InvalidRequestError {
                message: "cepOrigem e cepDestino são obrigatórios".to_string(),
            });
        }

        // 非正數或NaN的重量回退到預設值
        if !(self.peso > 0.0) {
            self.peso = DEFAULT_PESO_KG;
        }

        Ok(self)
    }
}

/// Removes separators ("01310-100" -> "01310100"), keeping alphanumerics.
pub fn normalize_cep(cep: &str) -> String {
    cep.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// The two Correios service tiers quoted by this service: PAC is the
/// economy tier, SEDEX the express one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceTier {
    #[serde(rename = "PAC")]
    Pac,
    #[serde(rename = "SEDEX")]
    Sedex,
}

impl ServiceTier {
    /// Quote order is fixed: PAC before SEDEX.
    pub const ALL: [ServiceTier; 2] = [ServiceTier::Pac, ServiceTier::Sedex];

    /// Correios service code sent to the external price API.
    pub fn codigo_servico(self) -> &'static str {
        match self {
            ServiceTier::Pac => "04510",
            ServiceTier::Sedex => "04014",
        }
    }

    pub fn nome(self) -> &'static str {
        match self {
            ServiceTier::Pac => "PAC",
            ServiceTier::Sedex => "SEDEX",
        }
    }
}

impl std::fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.nome())
    }
}

/// One priced service: cost in BRL (2 decimal places) and lead time in
/// whole days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub servico: ServiceTier,
    pub valor: f64,
    pub prazo: u32,
}
