// marketplace_api/src/bootstrap.rs

//! Process start-up: open the catalog file and seed it when empty.

use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::repository::ProductRepository;
use crate::state::AppState;

/// Opens the JSON catalog under `config.data_dir`, creating and seeding it if
/// needed.
#[instrument(name = "bootstrap::open_repository", skip(config), fields(data_dir = %config.data_dir.display()), err(Display))]
pub async fn open_repository(config: &AppConfig) -> Result<ProductRepository> {
  let repository = ProductRepository::json_file(config.database_path());
  prepare_repository(&repository).await?;
  Ok(repository)
}

/// Seeds `repository` if its catalog is empty.
pub async fn prepare_repository(repository: &ProductRepository) -> Result<()> {
  let inserted = repository.seed_if_empty().await?;
  if inserted > 0 {
    info!(inserted, location = %repository.location(), "Catalog was empty; seed listings written.");
  } else {
    info!(location = %repository.location(), "Existing catalog opened.");
  }
  Ok(())
}

/// Everything the HTTP server needs, ready to share across workers.
pub async fn initialise(config: AppConfig) -> Result<AppState> {
  let repository = open_repository(&config).await?;
  Ok(AppState::new(config, repository))
}
