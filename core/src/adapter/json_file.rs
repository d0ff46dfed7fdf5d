// docstore/src/adapter/json_file.rs

use super::Adapter;
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Persists the document as a single file.
///
/// Saves write a sibling `*.tmp` file and rename it over the target, so a
/// reader never observes a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "db.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl Adapter for JsonFile {
    #[instrument(name = "json_file::load", skip(self), fields(path = %self.path.display()), err(Display))]
    async fn load(&self) -> StoreResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                debug!(bytes = contents.len(), "Loaded document file.");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Document file does not exist yet.");
                Ok(None)
            }
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    #[instrument(name = "json_file::save", skip(self, contents), fields(path = %self.path.display(), bytes = contents.len()), err(Display))]
    async fn save(&self, contents: String) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, contents.as_bytes())
            .await
            .map_err(|e| StoreError::io(&temp_path, e))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        debug!("Document file replaced.");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
