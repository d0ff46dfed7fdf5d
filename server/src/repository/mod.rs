// marketplace_api/src/repository/mod.rs

//! Product operations over the catalog document.
//!
//! Every operation re-reads the document from storage, works on the fresh
//! in-memory copy and, for mutations, persists the whole document again.

pub mod ids;
pub mod product_repository;
pub mod query;
pub mod seed;

pub use ids::next_id;
pub use product_repository::ProductRepository;
pub use query::{ProductFilter, SortOrder};
