// marketplace_api/src/web/routes.rs

use actix_web::error::JsonPayloadError;
use actix_web::http::Method;
use actix_web::{web, HttpRequest};

use crate::config::{API_PREFIX, MAX_BODY_BYTES};
use crate::errors::AppError;
use crate::web::handlers::product_handlers;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

/// Malformed, mistyped or oversized JSON bodies become `AppError`s so they
/// share the `{ "error": ... }` response shape.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .limit(MAX_BODY_BYTES)
    .error_handler(|err, req: &HttpRequest| {
      let app_error = match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
          AppError::PayloadTooLarge(err.to_string())
        }
        // A create that is not JSON has no title or category.
        JsonPayloadError::ContentType if req.method() == Method::POST => AppError::missing_required_fields(),
        other => AppError::Validation(other.to_string()),
      };
      app_error.into()
    })
}

fn query_config() -> web::QueryConfig {
  web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| AppError::Validation(err.to_string()).into())
}

// This function is called by `build_app` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.app_data(json_config()).app_data(query_config()).service(
    web::scope(API_PREFIX)
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("", web::post().to(product_handlers::create_product_handler))
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler))
          .route("/{product_id}", web::put().to(product_handlers::update_product_handler))
          .route("/{product_id}", web::delete().to(product_handlers::delete_product_handler)),
      ),
  );
}
