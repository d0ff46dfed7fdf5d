// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::Level;

// --- Common Document Structs ---
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
  pub id: u64,
  pub title: String,
  pub price: f64,
  #[serde(default)]
  pub images: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingsDoc {
  #[serde(default)]
  pub listings: Vec<Listing>,
}

pub fn listing(id: u64, title: &str, price: f64) -> Listing {
  Listing {
    id,
    title: title.to_string(),
    price,
    images: vec![format!("https://img.example.com/{}.jpg", id)],
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
