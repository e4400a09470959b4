//! Content loader - reads the content document for a site

use std::path::{Path, PathBuf};
use thiserror::Error;

use super::ContentDocument;

/// Errors raised while loading the content document
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read content document `{0}`: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to parse content document `{0}`: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// Location of a content document, relative to the site root
#[derive(Debug, Clone)]
pub struct ContentSource {
    path: PathBuf,
}

impl ContentSource {
    /// Resolve `relative` against `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P, relative: &str) -> Self {
        let relative = relative.trim_start_matches('/');
        Self {
            path: base_dir.as_ref().join(relative),
        }
    }

    /// Full path of the document on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the document
    pub async fn fetch(&self) -> Result<ContentDocument, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::Read(self.path.clone(), e))?;

        let document = ContentDocument::from_slice(&bytes)
            .map_err(|e| LoadError::Parse(self.path.clone(), e))?;

        tracing::debug!("Loaded content document {:?}", self.path);
        Ok(document)
    }
}
