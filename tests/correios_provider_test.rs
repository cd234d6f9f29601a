use frete_service::{
    ConfigProvider, CorreiosProvider, FreteError, QuoteEngine, QuoteProvider, QuoteRequest,
    ServiceTier,
};
use httpmock::prelude::*;

struct TestConfig {
    endpoint: String,
}

impl ConfigProvider for TestConfig {
    fn correios_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_timeout_secs(&self) -> u64 {
        5
    }
}

fn provider_for(server: &MockServer) -> CorreiosProvider<TestConfig> {
    CorreiosProvider::new(TestConfig {
        endpoint: server.url("/calculador"),
    })
    .unwrap()
}

fn request() -> QuoteRequest {
    QuoteRequest::new("01310-100", "20040-020", 0.5)
}

#[tokio::test]
async fn test_both_tiers_succeed_pac_first() {
    let server = MockServer::start();

    let pac_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/calculador")
            .query_param("nCdServico", "04510")
            .query_param("sCepOrigem", "01310100")
            .query_param("sCepDestino", "20040020")
            .query_param("nCdFormato", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"Valor": "27,50", "PrazoEntrega": "9"}));
    });
    let sedex_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/calculador")
            .query_param("nCdServico", "04014");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"Valor": "41,90", "PrazoEntrega": 3}));
    });

    let engine = QuoteEngine::new(provider_for(&server));
    let quotes = engine.run(request()).await.unwrap();

    pac_mock.assert();
    sedex_mock.assert();

    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].servico, ServiceTier::Pac);
    assert_eq!(quotes[0].valor, 27.5);
    assert_eq!(quotes[0].prazo, 9);
    assert_eq!(quotes[1].servico, ServiceTier::Sedex);
    assert_eq!(quotes[1].valor, 41.9);
    assert_eq!(quotes[1].prazo, 3);
}

#[tokio::test]
async fn test_sedex_failure_yields_pac_only() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/calculador")
            .query_param("nCdServico", "04510");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"Valor": "18,20", "PrazoEntrega": "12"}));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/calculador")
            .query_param("nCdServico", "04014");
        then.status(500);
    });

    let engine = QuoteEngine::new(provider_for(&server));
    let quotes = engine.run(request()).await.unwrap();

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].servico, ServiceTier::Pac);
    assert_eq!(quotes[0].valor, 18.2);
}

#[tokio::test]
async fn test_missing_valor_counts_as_tier_failure() {
    let server = MockServer::start();

    // PAC reply has no Valor field, SEDEX is fine
    server.mock(|when, then| {
        when.method(GET)
            .path("/calculador")
            .query_param("nCdServico", "04510");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"PrazoEntrega": "4"}));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/calculador")
            .query_param("nCdServico", "04014");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"Valor": "55,00"}));
    });

    let engine = QuoteEngine::new(provider_for(&server));
    let quotes = engine.run(request()).await.unwrap();

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].servico, ServiceTier::Sedex);
    assert_eq!(quotes[0].valor, 55.0);
    // absent PrazoEntrega defaults to 0
    assert_eq!(quotes[0].prazo, 0);
}

#[tokio::test]
async fn test_both_tiers_down_reports_no_service_available() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/calculador");
        then.status(503);
    });

    let engine = QuoteEngine::new(provider_for(&server));
    let err = engine.run(request()).await.unwrap_err();

    assert!(matches!(err, FreteError::NoServiceAvailableError));
}

#[tokio::test]
async fn test_correios_error_message_fails_the_tier() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/calculador")
            .query_param("nCdServico", "04510");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(
                serde_json::json!({"Valor": "0,00", "MsgErro": "CEP de origem invalido"}),
            );
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/calculador")
            .query_param("nCdServico", "04014");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"Valor": "33,10", "PrazoEntrega": 2}));
    });

    let engine = QuoteEngine::new(provider_for(&server));
    let quotes = engine.run(request()).await.unwrap();

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].servico, ServiceTier::Sedex);
}

#[tokio::test]
async fn test_provider_called_directly_sees_normalized_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/calculador")
            .query_param("sCepOrigem", "01310100")
            .query_param("nVlPeso", "0.5");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"Valor": "20,00", "PrazoEntrega": 1}));
    });

    let provider = provider_for(&server);
    let normalized = request().normalized().unwrap();
    let quotes = provider.quote(&normalized).await.unwrap();

    // both tier calls match the same mock
    mock.assert_hits(2);
    assert_eq!(quotes.len(), 2);
}
