// marketplace_api/src/repository/ids.rs

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::Product;

/// Reads a stored `id` the way a hand-edited database file may hold it.
/// Non-negative integers and numeric strings are kept; anything else
/// (missing, `null`, `"x"`, negative, non-finite) reads as 0.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(coerce_id(&Value::deserialize(deserializer)?))
}

pub fn coerce_id(value: &Value) -> u64 {
  match value {
    Value::Number(n) => n
      .as_u64()
      .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map(|f| f as u64))
      .unwrap_or(0),
    Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
    _ => 0,
  }
}

/// `1 + max(0, ids...)`. Ids freed by deleting the current maximum are reused.
pub fn next_id(products: &[Product]) -> u64 {
  products.iter().map(|p| p.id).max().unwrap_or(0) + 1
}
