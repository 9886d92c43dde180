use anyhow::Context;
use clap::Parser;
use saju_api::domain::ports::ConfigProvider;
use saju_api::server::{router, AppState};
use saju_api::utils::{logger, validation::Validate};
use saju_api::{CliConfig, KasiLunarClient};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::info!("Starting saju-api");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.apply_file_overrides() {
        tracing::error!("❌ Failed to load configuration file: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let oracle = KasiLunarClient::from_config(&config).context("failed to build oracle client")?;

    let app = router(AppState {
        oracle: Arc::new(oracle),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!("🔮 saju-api listening on http://{}", config.bind);
    tracing::info!("   oracle endpoint: {}", config.oracle_endpoint);

    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
