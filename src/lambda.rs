#[cfg(feature = "lambda")]
use frete_service::api::{self, ApiResponse};
#[cfg(feature = "lambda")]
use frete_service::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use frete_service::{
    CorreiosProvider, HeuristicProvider, LambdaConfig, ProviderMode, QuoteEngine, QuoteProvider,
};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde_json::Value;

#[cfg(feature = "lambda")]
async fn function_handler(
    engine: &QuoteEngine<Box<dyn QuoteProvider>>,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    let (event, _context) = event.into_parts();

    let method = event
        .get("httpMethod")
        .and_then(Value::as_str)
        .unwrap_or("POST");
    let path = event.get("path").and_then(Value::as_str).unwrap_or("/calcular");

    if method.eq_ignore_ascii_case("OPTIONS") {
        return Ok(api::preflight());
    }
    if method.eq_ignore_ascii_case("GET") && path == "/health" {
        return Ok(api::health());
    }

    // API Gateway代理事件的body是JSON字串；直接調用時就是事件本身
    let body = match event.get("body") {
        Some(Value::String(raw)) => serde_json::from_str(raw).unwrap_or(Value::Null),
        Some(value) => value.clone(),
        None => event.clone(),
    };

    Ok(api::calcular(engine, &body).await)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    tracing::info!("Starting frete-service Lambda");

    // 配置從環境變量讀取，引擎在冷啟動時建立一次
    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let provider: Box<dyn QuoteProvider> = match config.provider_mode {
        ProviderMode::Heuristic => Box::new(HeuristicProvider::new()),
        ProviderMode::Correios => Box::new(CorreiosProvider::new(config.clone())?),
    };
    let engine = QuoteEngine::new(provider);
    let engine_ref = &engine;

    run(service_fn(move |event| async move {
        function_handler(engine_ref, event).await
    }))
    .await
}
