use clap::Parser;
use frete_service::utils::{logger, validation::Validate};
use frete_service::{
    CliConfig, CorreiosProvider, HeuristicProvider, ProviderMode, QuoteEngine, QuoteProvider,
    QuoteRequest,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting frete-service CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let request = QuoteRequest {
        cep_origem: config.cep_origem.clone(),
        cep_destino: config.cep_destino.clone(),
        peso: config.peso,
        comprimento: config.comprimento,
        altura: config.altura,
        largura: config.largura,
    };

    // 創建報價提供者和引擎
    let provider: Box<dyn QuoteProvider> = match config.mode {
        ProviderMode::Heuristic => Box::new(HeuristicProvider::new()),
        ProviderMode::Correios => Box::new(CorreiosProvider::new(config.clone())?),
    };
    let engine = QuoteEngine::new(provider);

    match engine.run(request).await {
        Ok(quotes) => {
            tracing::info!("✅ Cotação concluída ({} serviços)", quotes.len());
            println!("{}", serde_json::to_string_pretty(&quotes)?);
        }
        Err(e) => {
            tracing::error!("❌ Cotação falhou: {}", e);
            eprintln!("❌ {}", e);

            // 4xx類錯誤是輸入問題，其他是系統問題
            let exit_code = if e.status_code() == 400 { 2 } else { 1 };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
