// marketplace_api/src/errors.rs

use actix_web::http::header;
use actix_web::{HttpResponse, ResponseError};
use docstore::StoreError;
use serde_json::json;
use thiserror::Error;

pub const MISSING_REQUIRED_FIELDS: &str = "title and category are required";
pub const NOT_FOUND: &str = "Not found";
pub const TOO_MANY_REQUESTS: &str = "Too many requests, please try again later.";

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Payload Too Large: {0}")]
  PayloadTooLarge(String),

  #[error("Rate limit exceeded; retry after {retry_after_secs}s")]
  RateLimited { retry_after_secs: u64 },

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Storage Error: {0}")]
  Store(#[from] StoreError),

}

impl AppError {
  pub fn missing_required_fields() -> Self {
    AppError::Validation(MISSING_REQUIRED_FIELDS.to_string())
  }

  pub fn not_found() -> Self {
    AppError::NotFound(NOT_FOUND.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::PayloadTooLarge(_) => {
        HttpResponse::PayloadTooLarge().json(json!({"error": "request entity too large"}))
      }
      AppError::RateLimited { retry_after_secs } => HttpResponse::TooManyRequests()
        .insert_header((header::RETRY_AFTER, retry_after_secs.to_string()))
        .json(json!({"error": TOO_MANY_REQUESTS})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Store(_) => HttpResponse::InternalServerError().json(json!({"error": "Storage operation failed"})),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::to_bytes;
  use actix_web::http::StatusCode;

  async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.error_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[actix_web::test]
  async fn validation_maps_to_400_with_message() {
    let (status, body) = body_json(AppError::missing_required_fields()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "title and category are required"}));
  }

  #[actix_web::test]
  async fn not_found_maps_to_404() {
    let (status, body) = body_json(AppError::not_found()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
  }

  #[actix_web::test]
  async fn store_failure_maps_to_500_without_leaking_paths() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = AppError::from(StoreError::Io {
      path: "/secret/db.json".into(),
      source: io,
    });
    let (status, body) = body_json(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Storage operation failed"}));
  }

  #[actix_web::test]
  async fn rate_limited_sets_retry_after() {
    let response = AppError::RateLimited { retry_after_secs: 42 }.error_response();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), "42");
  }
}
