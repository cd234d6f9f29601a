pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use app::providers::{CorreiosProvider, HeuristicProvider};
pub use config::ProviderMode;
pub use core::engine::QuoteEngine;
pub use domain::model::{Quote, QuoteRequest, ServiceTier};
pub use domain::ports::{ConfigProvider, QuoteProvider};
pub use utils::error::{FreteError, Result};
