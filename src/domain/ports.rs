use crate::domain::model::{Quote, QuoteRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Capability behind both pricing paths. Implementations return the quotes
/// they could produce (PAC before SEDEX when both are present) or fail as a
/// whole; the transport layer picks one implementation at startup.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn quote(&self, request: &QuoteRequest) -> Result<Vec<Quote>>;
}

#[async_trait]
impl QuoteProvider for Box<dyn QuoteProvider> {
    async fn quote(&self, request: &QuoteRequest) -> Result<Vec<Quote>> {
        (**self).quote(request).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn correios_endpoint(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
}
