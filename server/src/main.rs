// marketplace_api/src/main.rs

use actix_web::HttpServer;
use anyhow::Context;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

use marketplace_api::{bootstrap, web, AppConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging; RUST_LOG overrides the default level.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting marketplace listings server...");

  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  let server_address = app_config.bind_address();

  let app_state = bootstrap::initialise(app_config)
    .await
    .context("Failed to open the product catalog")?;

  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || web::build_app(app_state.clone()))
    .bind(&server_address)
    .with_context(|| format!("Failed to bind {}", server_address))?
    .run()
    .await
    .context("HTTP server terminated with an error")?;

  Ok(())
}
