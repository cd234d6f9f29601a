use crate::core::{ConfigProvider, Quote, QuoteProvider, QuoteRequest, ServiceTier};
use crate::utils::error::{FreteError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Price/lead-time reply from the Correios price API. `Valor` uses the
/// Brazilian decimal-comma convention ("27,50"); `PrazoEntrega` shows up
/// as either a number or a numeric string depending on the gateway.
#[derive(Debug, Deserialize)]
struct CorreiosReply {
    #[serde(rename = "Valor")]
    valor: Option<String>,

    #[serde(rename = "PrazoEntrega", default)]
    prazo_entrega: Option<serde_json::Value>,

    #[serde(rename = "MsgErro", default)]
    msg_erro: Option<String>,
}

/// Pricing path that asks the Correios API once per tier. A single
/// long-lived client is reused across requests; each tier call is one
/// attempt, no retries.
pub struct CorreiosProvider<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> CorreiosProvider<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()
            .map_err(FreteError::ApiError)?;

        Ok(Self { config, client })
    }

    async fn quote_tier(&self, request: &QuoteRequest, tier: ServiceTier) -> Result<Quote> {
        let params = [
            ("nCdServico", tier.codigo_servico().to_string()),
            ("sCepOrigem", request.cep_origem.clone()),
            ("sCepDestino", request.cep_destino.clone()),
            ("nVlPeso", request.peso.to_string()),
            ("nVlComprimento", request.comprimento.to_string()),
            ("nVlAltura", request.altura.to_string()),
            ("nVlLargura", request.largura.to_string()),
            ("nCdFormato", "1".to_string()),
            ("nVlDiametro", "0".to_string()),
        ];

        tracing::debug!(
            "Consultando {} em {}",
            tier,
            self.config.correios_endpoint()
        );

        let reply: CorreiosReply = self
            .client
            .get(self.config.correios_endpoint())
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(msg) = reply.msg_erro.as_deref().filter(|m| !m.is_empty()) {
            return Err(FreteError::InternalError {
                message: format!("Correios recusou {}: {}", tier, msg),
            });
        }

        let raw_valor = reply
            .valor
            .filter(|v| !v.is_empty())
            .ok_or_else(|| FreteError::InternalError {
                message: format!("resposta Correios sem Valor para {}", tier),
            })?;

        let valor = parse_valor(&raw_valor)?;
        let prazo = parse_prazo(reply.prazo_entrega.as_ref());

        Ok(Quote {
            servico: tier,
            valor,
            prazo,
        })
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> QuoteProvider for CorreiosProvider<C> {
    async fn quote(&self, request: &QuoteRequest) -> Result<Vec<Quote>> {
        // 兩個tier互相獨立，並行查詢
        let (pac, sedex) = tokio::join!(
            self.quote_tier(request, ServiceTier::Pac),
            self.quote_tier(request, ServiceTier::Sedex),
        );

        let mut quotes = Vec::with_capacity(2);
        for result in [pac, sedex] {
            match result {
                Ok(quote) => quotes.push(quote),
                Err(e) => tracing::warn!("Serviço indisponível: {}", e),
            }
        }

        if quotes.is_empty() {
            return Err(FreteError::NoServiceAvailableError);
        }

        Ok(quotes)
    }
}

/// "27,50" -> 27.5
fn parse_valor(raw: &str) -> Result<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| FreteError::InternalError {
            message: format!("Valor Correios inválido: {:?}", raw),
        })
}

/// Lead time in days; absent or unparseable values fall back to 0.
fn parse_prazo(value: Option<&serde_json::Value>) -> u32 {
    match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().unwrap_or(0) as u32,
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
