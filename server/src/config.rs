// marketplace_api/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Every route is mounted under this prefix.
pub const API_PREFIX: &str = "/api";

/// Largest accepted JSON request body.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Requests a single client may make per rate-limit window.
pub const RATE_LIMIT_MAX_REQUESTS: usize = 500;

/// Length of the sliding rate-limit window.
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(15 * 60);

pub const DATABASE_FILE_NAME: &str = "db.json";

const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub data_dir: PathBuf,

  pub rate_limit_max_requests: usize,
  pub rate_limit_window: Duration,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from an arbitrary variable source. `from_env` passes
  /// the process environment; tests pass a map.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

    let server_port = match lookup("PORT").or_else(|| lookup("SERVER_PORT")) {
      Some(raw) => raw
        .trim()
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid PORT '{}': {}", raw, e)))?,
      None => DEFAULT_PORT,
    };

    let data_dir = lookup("DATA_DIR")
      .filter(|d| !d.trim().is_empty())
      .map(PathBuf::from)
      .unwrap_or_else(|| PathBuf::from("data"));

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      data_dir,
      rate_limit_max_requests: RATE_LIMIT_MAX_REQUESTS,
      rate_limit_window: RATE_LIMIT_WINDOW,
    })
  }

  pub fn database_path(&self) -> PathBuf {
    self.data_dir.join(DATABASE_FILE_NAME)
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
