// marketplace_api/src/lib.rs

//! Marketplace listings API: CRUD over products kept in a single JSON file.

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod models;
pub mod repository;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
