// marketplace_api/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::{AppError, Result};
use crate::models::{CreateProductRequest, ProductPatch};
use crate::repository::{ProductFilter, SortOrder};
use crate::state::AppState;

#[derive(Deserialize, Debug, Default)]
pub struct ListProductsQuery {
  pub q: Option<String>,
  pub category: Option<String>,
  pub subcategory: Option<String>,
  pub sort: Option<String>,
}

/// Ids that are not non-negative integers cannot name a product.
fn parse_product_id(raw: &str) -> Result<u64> {
  raw.trim().parse::<u64>().map_err(|_| AppError::not_found())
}

#[instrument(name = "handler::list_products", skip(app_state, query_params), fields(q = ?query_params.q, sort = ?query_params.sort))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse> {
  let ListProductsQuery {
    q,
    category,
    subcategory,
    sort,
  } = query_params.into_inner();
  let filter = ProductFilter::new(q, category, subcategory);
  let sort = SortOrder::parse(sort.as_deref());

  let items = app_state.repository.list(&filter, sort).await?;

  info!("Listed {} products.", items.len());
  Ok(HttpResponse::Ok().json(json!({ "items": items })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn get_product_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
  let product_id = parse_product_id(&path)?;

  let product = app_state.repository.get(product_id).await?;

  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, req_payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateProductRequest>,
) -> Result<HttpResponse> {
  let product = app_state.repository.create(req_payload.into_inner()).await?;

  info!(product_id = product.id, "Product listing created.");
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, req_payload), fields(product_id = %path.as_str()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<ProductPatch>,
) -> Result<HttpResponse> {
  let product_id = parse_product_id(&path)?;

  let product = app_state.repository.update(product_id, req_payload.into_inner()).await?;

  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn delete_product_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
  let product_id = parse_product_id(&path)?;

  app_state.repository.delete(product_id).await?;

  Ok(HttpResponse::NoContent().finish())
}
