// docstore/src/adapter/memory.rs

use super::Adapter;
use crate::error::StoreResult;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps the serialized document in process memory.
///
/// Clones share the same buffer, so a test can hold one handle and inspect
/// what the store persisted through another.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    contents: Arc<Mutex<Option<String>>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `contents` already "on disk".
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }

    /// Last text passed to `save`, if any.
    pub fn snapshot(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

#[async_trait]
impl Adapter for Memory {
    async fn load(&self) -> StoreResult<Option<String>> {
        Ok(self.contents.lock().clone())
    }

    async fn save(&self, contents: String) -> StoreResult<()> {
        *self.contents.lock() = Some(contents);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
