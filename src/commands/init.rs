//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::templates;

/// Write the starter site into `target_dir`, keeping files that already exist
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    for (relative, contents) in templates::starter_files() {
        let path = target_dir.join(relative);
        if path.exists() {
            tracing::warn!("Skipping existing file {:?}", path);
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        tracing::debug!("Created {:?}", path);
    }

    Ok(())
}
