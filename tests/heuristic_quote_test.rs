use frete_service::{
    FreteError, HeuristicProvider, Quote, QuoteEngine, QuoteRequest, ServiceTier,
};

fn engine() -> QuoteEngine<HeuristicProvider> {
    QuoteEngine::new(HeuristicProvider::new())
}

#[tokio::test]
async fn test_same_region_default_weight_boundary() {
    // São Paulo -> São Paulo, zone distance 0
    let quotes = engine()
        .run(QuoteRequest::new("01310-100", "01499-000", 0.3))
        .await
        .unwrap();

    assert_eq!(
        quotes,
        vec![
            Quote {
                servico: ServiceTier::Pac,
                valor: 21.0,
                prazo: 7
            },
            Quote {
                servico: ServiceTier::Sedex,
                valor: 29.5,
                prazo: 2
            },
        ]
    );
}

#[tokio::test]
async fn test_cross_country_quote() {
    // São Paulo (01) -> Porto Alegre (90), zone distance 89
    let quotes = engine()
        .run(QuoteRequest::new("01310-100", "90010-000", 1.0))
        .await
        .unwrap();

    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].servico, ServiceTier::Pac);
    assert_eq!(quotes[0].valor, 99.2); // 18.0 + 89*0.8 + 1.0*10
    assert_eq!(quotes[0].prazo, 15); // raw 7 + 8 = 15, at the cap
    assert_eq!(quotes[1].servico, ServiceTier::Sedex);
    assert_eq!(quotes[1].valor, 173.5); // 25.0 + 89*1.5 + 1.0*15
    assert_eq!(quotes[1].prazo, 5); // raw 2 + 5 = 7, capped
}

#[tokio::test]
async fn test_separator_stripped_before_pricing() {
    let with_sep = engine()
        .run(QuoteRequest::new("01310-100", "20040-020", 0.5))
        .await
        .unwrap();
    let without_sep = engine()
        .run(QuoteRequest::new("01310100", "20040020", 0.5))
        .await
        .unwrap();
    assert_eq!(with_sep, without_sep);
}

#[tokio::test]
async fn test_missing_cep_is_rejected_before_pricing() {
    let err = engine()
        .run(QuoteRequest::new("", "20040-020", 0.5))
        .await
        .unwrap_err();
    assert!(matches!(err, FreteError::InvalidRequestError { .. }));
    assert_eq!(err.status_code(), 400);

    let err = engine()
        .run(QuoteRequest::new("01310-100", "", 0.5))
        .await
        .unwrap_err();
    assert!(matches!(err, FreteError::InvalidRequestError { .. }));
}

#[tokio::test]
async fn test_unparseable_cep_prefix_is_rejected() {
    let err = engine()
        .run(QuoteRequest::new("AB310-100", "20040-020", 0.5))
        .await
        .unwrap_err();
    assert!(matches!(err, FreteError::InvalidPostalCodeError { .. }));
}

#[tokio::test]
async fn test_non_positive_weight_falls_back_to_default() {
    let defaulted = engine()
        .run(QuoteRequest::new("01310-100", "20040-020", -1.0))
        .await
        .unwrap();
    let explicit = engine()
        .run(QuoteRequest::new("01310-100", "20040-020", 0.3))
        .await
        .unwrap();
    assert_eq!(defaulted, explicit);
}

#[tokio::test]
async fn test_idempotent() {
    let request = QuoteRequest::new("04538-132", "30130-010", 2.5);
    let first = engine().run(request.clone()).await.unwrap();
    let second = engine().run(request).await.unwrap();
    assert_eq!(first, second);
}
