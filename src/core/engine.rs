use crate::core::QuoteProvider;
use crate::domain::model::{Quote, QuoteRequest};
use crate::utils::error::Result;

/// Front door of the pricing core: normalizes and validates the request,
/// then delegates to whichever provider the transport layer configured.
pub struct QuoteEngine<P: QuoteProvider> {
    provider: P,
}

impl<P: QuoteProvider> QuoteEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn run(&self, request: QuoteRequest) -> Result<Vec<Quote>> {
        let request = request.normalized()?;

        tracing::debug!(
            "Cotando frete {} -> {} ({} kg)",
            request.cep_origem,
            request.cep_destino,
            request.peso
        );

        let quotes = self.provider.quote(&request).await?;

        tracing::info!("{} serviço(s) cotado(s)", quotes.len());
        Ok(quotes)
    }
}
