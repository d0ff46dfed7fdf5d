// marketplace_api/src/models/catalog.rs

use serde::{Deserialize, Serialize};

use super::product::Product;

/// The whole persisted database: `{ "products": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
  #[serde(default)]
  pub products: Vec<Product>,
}
