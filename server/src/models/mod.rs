// marketplace_api/src/models/mod.rs

//! Contains data structures representing persisted entities and the request
//! bodies that create or modify them.

pub mod catalog;
pub mod product;

// Re-export the model structs for convenient access
pub use catalog::Catalog;
pub use product::{CreateProductRequest, NewProduct, Product, ProductPatch};
