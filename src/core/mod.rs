pub mod distance;
pub mod engine;
pub mod pricing;

pub use crate::domain::model::{Quote, QuoteRequest, ServiceTier};
pub use crate::domain::ports::{ConfigProvider, QuoteProvider};
pub use crate::utils::error::Result;
