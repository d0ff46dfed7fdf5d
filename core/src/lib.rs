// src/lib.rs

//! Docstore: a tiny asynchronous document store for Rust.
//!
//! Docstore keeps exactly one serde-serializable document in memory and
//! persists it through an [`Adapter`]:
//!  - `read()` hydrates the in-memory document from storage (missing or empty
//!    storage yields `T::default()`).
//!  - `write()` flushes the whole in-memory document back to storage.
//!  - Adapters are pluggable: [`JsonFile`] for a file on disk, [`Memory`] for tests.
//!
//! There is no partial persistence, no versioning and no locking across
//! processes. Callers that need read-modify-write atomicity serialize their
//! own operations around `read()` / `write()`.

pub mod adapter;
pub mod error;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::adapter::json_file::JsonFile;
pub use crate::adapter::memory::Memory;
pub use crate::adapter::Adapter;
pub use crate::error::{StoreError, StoreResult};
pub use crate::store::DocumentStore;

/*
    Typical usage:
    1. Define a document struct `MyDoc` deriving Serialize, Deserialize, Default.
    2. Build a store: `DocumentStore::<MyDoc>::new(JsonFile::new("data/db.json"))`.
    3. Call `store.read().await?` to load what is on disk.
    4. Mutate with `store.update(|doc| ...)`, inspect with `store.data()`.
    5. Call `store.write().await?` to persist.
*/
