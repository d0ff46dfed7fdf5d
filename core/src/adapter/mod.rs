// docstore/src/adapter/mod.rs

//! Storage backends for a [`crate::DocumentStore`].
//!
//! An adapter only moves serialized text in and out of durable storage; all
//! (de)serialization happens in the store.

pub mod json_file;
pub mod memory;

use crate::error::StoreResult;
use async_trait::async_trait;

#[async_trait]
pub trait Adapter: Send + Sync {
    /// Returns the stored text, or `None` when nothing has been stored yet.
    async fn load(&self) -> StoreResult<Option<String>>;

    /// Replaces the stored text in full.
    async fn save(&self, contents: String) -> StoreResult<()>;

    /// Human-readable location, used in errors and logs.
    fn location(&self) -> String;
}
