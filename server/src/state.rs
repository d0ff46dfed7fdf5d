// marketplace_api/src/state.rs
use crate::config::AppConfig;
use crate::repository::ProductRepository;
use crate::web::middleware::rate_limit::ClientRateLimiter;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub repository: Arc<ProductRepository>,
  pub rate_limiter: Arc<ClientRateLimiter>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(config: AppConfig, repository: ProductRepository) -> Self {
    let rate_limiter = ClientRateLimiter::new(config.rate_limit_max_requests, config.rate_limit_window);
    Self {
      repository: Arc::new(repository),
      rate_limiter: Arc::new(rate_limiter),
      config: Arc::new(config),
    }
  }
}
