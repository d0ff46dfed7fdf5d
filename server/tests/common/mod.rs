// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use docstore::Memory;
use marketplace_api::repository::ProductRepository;
use marketplace_api::{AppConfig, AppState};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tracing::Level;

// --- Common State Builders ---
pub fn test_config() -> AppConfig {
  AppConfig::from_lookup(|_| None).expect("default config should load")
}

pub fn state_with_memory(memory: Memory) -> AppState {
  AppState::new(test_config(), ProductRepository::in_memory(memory))
}

/// A state whose storage already holds `products`.
pub fn state_with_products(products: Value) -> (AppState, Memory) {
  let memory = Memory::with_contents(json!({ "products": products }).to_string());
  (state_with_memory(memory.clone()), memory)
}

/// A state seeded exactly as the server does on first start.
pub async fn seeded_state() -> (AppState, Memory) {
  let memory = Memory::new();
  let state = state_with_memory(memory.clone());
  marketplace_api::bootstrap::prepare_repository(&state.repository)
    .await
    .expect("seeding in-memory catalog should succeed");
  (state, memory)
}

/// Products as they are currently persisted.
pub fn persisted_products(memory: &Memory) -> Vec<Value> {
  let raw = memory.snapshot().unwrap_or_else(|| "{\"products\": []}".to_string());
  let doc: Value = serde_json::from_str(&raw).expect("persisted catalog should be JSON");
  doc["products"].as_array().cloned().unwrap_or_default()
}

pub fn listing(id: u64, title: &str, category: &str, price: f64, created_at: i64) -> Value {
  json!({
    "id": id,
    "title": title,
    "description": "",
    "price": price,
    "category": category,
    "subcategory": "",
    "images": [],
    "likes": 0,
    "dislikes": 0,
    "createdAt": created_at
  })
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
