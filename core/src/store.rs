// docstore/src/store.rs

//! Defines `DocumentStore<T>`, the in-memory holder of one persisted document.

use crate::adapter::Adapter;
use crate::error::{StoreError, StoreResult};
use parking_lot::{RwLock, RwLockReadGuard};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

/// One document of type `T`, held in memory and persisted through an adapter.
///
/// Lock guards returned by [`DocumentStore::data`] must not be held across an
/// `.await`; copy what you need out of the guard first.
pub struct DocumentStore<T> {
    adapter: Box<dyn Adapter>,
    data: RwLock<T>,
}

impl<T> DocumentStore<T>
where
    T: Serialize + DeserializeOwned + Default + Send + Sync,
{
    /// Creates a store whose in-memory document starts as `T::default()`.
    /// Nothing is loaded until [`DocumentStore::read`] is called.
    pub fn new(adapter: impl Adapter + 'static) -> Self {
        Self {
            adapter: Box::new(adapter),
            data: RwLock::new(T::default()),
        }
    }

    /// Loads the document from storage, replacing the in-memory copy.
    ///
    /// Missing storage, or storage holding only whitespace, yields `T::default()`.
    /// Malformed content is reported as [`StoreError::Corrupt`].
    #[instrument(name = "document_store::read", skip(self), fields(location = %self.adapter.location()), err(Display))]
    pub async fn read(&self) -> StoreResult<()> {
        let loaded = self.adapter.load().await?;

        let document = match loaded {
            Some(text) if !text.trim().is_empty() => serde_json::from_str::<T>(&text).map_err(|source| StoreError::Corrupt {
                location: self.adapter.location(),
                source,
            })?,
            _ => {
                debug!("Storage empty; starting from the default document.");
                T::default()
            }
        };

        *self.data.write() = document;
        Ok(())
    }

    /// Serializes the in-memory document and replaces what is in storage.
    #[instrument(name = "document_store::write", skip(self), fields(location = %self.adapter.location()), err(Display))]
    pub async fn write(&self) -> StoreResult<()> {
        let contents = {
            let guard = self.data.read();
            serde_json::to_string_pretty(&*guard).map_err(StoreError::Serialize)?
        }; // guard dropped before awaiting the adapter

        self.adapter.save(contents).await
    }

    /// Read access to the in-memory document.
    pub fn data(&self) -> RwLockReadGuard<'_, T> {
        self.data.read()
    }

    /// Runs `f` against the in-memory document. Does not persist.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.data.write();
        f(&mut guard)
    }

    /// Swaps the in-memory document, returning the previous one. Does not persist.
    pub fn replace(&self, document: T) -> T {
        std::mem::replace(&mut *self.data.write(), document)
    }

    pub fn location(&self) -> String {
        self.adapter.location()
    }
}

impl<T> std::fmt::Debug for DocumentStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("location", &self.adapter.location())
            .finish_non_exhaustive()
    }
}
