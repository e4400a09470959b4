//! pagebind: populate static HTML site templates from a JSON content document
//!
//! A site is a directory holding HTML pages, their assets and a
//! `content.json`. Every configured page is parsed, the content document is
//! bound into fixed locations of it, and the result is written out or
//! served.

pub mod binder;
pub mod commands;
pub mod config;
pub mod content;
pub mod dom;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use binder::{BindReport, ContentLoader};
pub use content::{ContentDocument, ContentSource};
pub use dom::Document;

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// A site directory and its configuration
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory (templates, assets, content)
    pub base_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
        })
    }

    /// Where the content document lives
    pub fn content_source(&self) -> ContentSource {
        ContentSource::new(&self.base_dir, &self.config.content)
    }

    /// Template path of a configured page
    pub fn page_path(&self, page: &str) -> PathBuf {
        self.base_dir.join(page.trim_start_matches('/'))
    }

    /// Load the content document, logging and swallowing a failure
    pub async fn loader(&self) -> Option<ContentLoader> {
        match ContentLoader::load(&self.content_source()).await {
            Ok(loader) => Some(loader.with_config(&self.config)),
            Err(e) => {
                tracing::error!("Error loading content: {}", e);
                None
            }
        }
    }

    /// Render every page into the public directory
    pub async fn apply(&self) -> Result<()> {
        commands::apply::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
