// marketplace_api/src/models/product.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  #[serde(default, deserialize_with = "crate::repository::ids::lenient_id")]
  pub id: u64,
  pub title: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub price: f64,
  pub category: String,
  #[serde(default)]
  pub subcategory: String,
  #[serde(default)]
  pub images: Vec<String>,
  #[serde(default)]
  pub likes: u64,
  #[serde(default)]
  pub dislikes: u64,
  /// Milliseconds since the Unix epoch.
  #[serde(default)]
  pub created_at: i64,
}

/// Body of `POST /products`.
///
/// String fields must be strings (or null). `price` and `images` are coerced
/// instead of rejected: see [`coerce_price`] and [`coerce_images`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProductRequest {
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "lenient_price")]
  pub price: Option<f64>,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub subcategory: Option<String>,
  #[serde(default, deserialize_with = "lenient_images")]
  pub images: Option<Vec<String>>,
}

/// A create request that passed validation; `title` and `category` are non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub title: String,
  pub description: String,
  pub price: f64,
  pub category: String,
  pub subcategory: String,
  pub images: Vec<String>,
}

impl CreateProductRequest {
  pub fn validate(self) -> Result<NewProduct> {
    let title = self.title.filter(|t| !t.is_empty());
    let category = self.category.filter(|c| !c.is_empty());

    let (Some(title), Some(category)) = (title, category) else {
      return Err(AppError::missing_required_fields());
    };

    Ok(NewProduct {
      title,
      description: self.description.unwrap_or_default(),
      price: self.price.unwrap_or(0.0),
      category,
      subcategory: self.subcategory.unwrap_or_default(),
      images: self.images.unwrap_or_default(),
    })
  }
}

impl NewProduct {
  pub fn into_product(self, id: u64, created_at: i64) -> Product {
    Product {
      id,
      title: self.title,
      description: self.description,
      price: self.price,
      category: self.category,
      subcategory: self.subcategory,
      images: self.images,
      likes: 0,
      dislikes: 0,
      created_at,
    }
  }
}

/// Body of `PUT /products/{id}`.
///
/// Only listing content is patchable. There is no `id` field, so an `id` in
/// the body is ignored along with any other unknown key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPatch {
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "lenient_price")]
  pub price: Option<f64>,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub subcategory: Option<String>,
  #[serde(default, deserialize_with = "lenient_images")]
  pub images: Option<Vec<String>>,
}

impl ProductPatch {
  /// Overwrites every field present in the patch; absent fields keep their value.
  pub fn apply_to(self, product: &mut Product) {
    if let Some(title) = self.title {
      product.title = title;
    }
    if let Some(description) = self.description {
      product.description = description;
    }
    if let Some(price) = self.price {
      product.price = price;
    }
    if let Some(category) = self.category {
      product.category = category;
    }
    if let Some(subcategory) = self.subcategory {
      product.subcategory = subcategory;
    }
    if let Some(images) = self.images {
      product.images = images;
    }
  }
}

/// Numbers pass through, numeric strings are parsed, `true` is 1, and
/// everything else (including NaN and infinities) becomes 0.
pub fn coerce_price(value: &Value) -> f64 {
  let price = match value {
    Value::Number(n) => n.as_f64().unwrap_or(0.0),
    Value::String(s) => {
      let trimmed = s.trim();
      if trimmed.is_empty() {
        0.0
      } else {
        trimmed.parse::<f64>().unwrap_or(0.0)
      }
    }
    Value::Bool(true) => 1.0,
    _ => 0.0,
  };
  if price.is_finite() {
    price
  } else {
    0.0
  }
}

/// Arrays keep their string elements; any other value becomes an empty list.
pub fn coerce_images(value: Value) -> Vec<String> {
  match value {
    Value::Array(items) => items
      .into_iter()
      .filter_map(|item| match item {
        Value::String(url) => Some(url),
        _ => None,
      })
      .collect(),
    _ => Vec::new(),
  }
}

fn lenient_price<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  Ok(Some(coerce_price(&value)))
}

fn lenient_images<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  Ok(Some(coerce_images(value)))
}
