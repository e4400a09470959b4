//! Render pages into the public directory

use anyhow::Result;
use notify::Watcher;
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::fs;
use walkdir::{DirEntry, WalkDir};

use crate::binder;
use crate::Site;

/// Render every configured page and copy the remaining site files
pub async fn run(site: &Site) -> Result<()> {
    let start = Instant::now();

    // A missing or broken content document still produces a working site
    let loader = site.loader().await;

    fs::create_dir_all(&site.public_dir).await?;

    let mut pages = 0;
    for page in &site.config.pages {
        let template_path = site.page_path(page);
        let template = match fs::read_to_string(&template_path).await {
            Ok(template) => template,
            Err(e) => {
                tracing::warn!("Failed to read page {:?}: {}", template_path, e);
                continue;
            }
        };

        let (html, report) = binder::render(&template, loader.as_ref());

        let output = site.public_dir.join(page.trim_start_matches('/'));
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&output, html).await?;

        match report {
            Some(report) => tracing::info!(
                "Rendered {} ({} writes)",
                page,
                report.total_writes()
            ),
            None => tracing::info!("Copied {} with template defaults", page),
        }
        pages += 1;
    }

    let assets = copy_assets(site).await?;

    let duration = start.elapsed();
    tracing::info!(
        "Wrote {} pages and {} files in {:.2}s",
        pages,
        assets,
        duration.as_secs_f64()
    );

    Ok(())
}

/// Copy everything that is not a page, the config or the output itself
async fn copy_assets(site: &Site) -> Result<usize> {
    let mut copied = 0;

    let walker = WalkDir::new(&site.base_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped(site, entry));

    for entry in walker.filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(&site.base_dir) else {
            continue;
        };
        let relative_str = relative.to_string_lossy().replace('\\', "/");
        if site.config.is_page(&relative_str) || relative_str == crate::CONFIG_FILE {
            continue;
        }

        let target = site.public_dir.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::copy(entry.path(), &target).await?;
        tracing::debug!("Copied {}", relative_str);
        copied += 1;
    }

    Ok(copied)
}

fn is_skipped(site: &Site, entry: &DirEntry) -> bool {
    let path = entry.path();
    if path.starts_with(&site.public_dir) {
        return true;
    }

    let hidden = entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false);
    if hidden {
        return true;
    }

    let relative = path.strip_prefix(&site.base_dir).unwrap_or(path);
    site.config
        .skip_copy
        .iter()
        .any(|skip| relative.starts_with(Path::new(skip.trim_start_matches('/'))))
}

/// Watch the site directory and re-render on changes
pub async fn watch(site: &Site) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    watcher.watch(&site.base_dir, notify::RecursiveMode::Recursive)?;

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_render = Instant::now();

    while let Some(event) = rx.recv().await {
        // Writes into the public directory are our own output
        if event
            .paths
            .iter()
            .all(|path| path.starts_with(&site.public_dir))
        {
            continue;
        }

        // Debounce: only re-render if more than 500ms since the last one
        if last_render.elapsed() > Duration::from_millis(500) {
            tracing::info!("File changed, re-rendering...");
            if let Err(e) = run(site).await {
                tracing::error!("Rendering failed: {}", e);
            }
            last_render = Instant::now();
        }
    }

    Ok(())
}
