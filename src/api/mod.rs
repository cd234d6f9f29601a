//! Transport-agnostic HTTP contract: route handlers that produce an API
//! Gateway shaped response (status, headers, body). The Lambda binary maps
//! events onto these; any other transport can do the same.

use crate::core::engine::QuoteEngine;
use crate::core::QuoteProvider;
use crate::domain::model::QuoteRequest;
use crate::utils::error::{FreteError, Result};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

fn base_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
    ])
}

fn cors_headers() -> HashMap<String, String> {
    let mut headers = base_headers();
    headers.insert(
        "Access-Control-Allow-Methods".to_string(),
        "POST, OPTIONS".to_string(),
    );
    headers.insert(
        "Access-Control-Allow-Headers".to_string(),
        "Content-Type".to_string(),
    );
    headers
}

fn error_response(status_code: u16, message: &str) -> ApiResponse {
    ApiResponse {
        status_code,
        headers: base_headers(),
        body: serde_json::json!({ "error": message }).to_string(),
    }
}

/// POST /calcular — quote both tiers for the request body.
pub async fn calcular<P: QuoteProvider>(
    engine: &QuoteEngine<P>,
    body: &serde_json::Value,
) -> ApiResponse {
    match run_calcular(engine, body).await {
        Ok(body) => ApiResponse {
            status_code: 200,
            headers: cors_headers(),
            body,
        },
        Err(e) => {
            tracing::warn!("Cotação falhou: {}", e);
            error_response(e.status_code(), &e.to_string())
        }
    }
}

async fn run_calcular<P: QuoteProvider>(
    engine: &QuoteEngine<P>,
    body: &serde_json::Value,
) -> Result<String> {
    let request: QuoteRequest =
        serde_json::from_value(body.clone()).map_err(|e| FreteError::InvalidRequestError {
            message: format!("corpo da requisição inválido: {}", e),
        })?;

    let quotes = engine.run(request).await?;
    Ok(serde_json::to_string(&quotes)?)
}

/// GET /health — fixed liveness payload.
pub fn health() -> ApiResponse {
    ApiResponse {
        status_code: 200,
        headers: base_headers(),
        body: serde_json::json!({ "status": "ok" }).to_string(),
    }
}

/// OPTIONS — CORS preflight, any origin.
pub fn preflight() -> ApiResponse {
    ApiResponse {
        status_code: 200,
        headers: cors_headers(),
        body: String::new(),
    }
}
