use crate::core::{distance, pricing, Quote, QuoteProvider, QuoteRequest};
use crate::utils::error::Result;

/// Self-contained pricing path: no network, both tiers always present.
/// Used when the Correios lookup is unavailable or not wanted.
#[derive(Debug, Clone, Default)]
pub struct HeuristicProvider;

impl HeuristicProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl QuoteProvider for HeuristicProvider {
    async fn quote(&self, request: &QuoteRequest) -> Result<Vec<Quote>> {
        let distancia = distance::estimate_distance(&request.cep_origem, &request.cep_destino)?;
        tracing::debug!("Distância estimada (zonas CEP): {}", distancia);
        Ok(pricing::price(distancia, request.peso))
    }
}
