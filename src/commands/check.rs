//! Report how the content document binds to each page

use anyhow::{Context, Result};
use tokio::fs;

use crate::binder::{BindReport, ContentLoader};
use crate::dom::Document;
use crate::Site;

/// Bind every configured page in memory and return the reports
pub async fn reports(site: &Site) -> Result<Vec<(String, BindReport)>> {
    let source = site.content_source();
    let loader = ContentLoader::load(&source)
        .await
        .with_context(|| format!("Cannot check bindings for {:?}", site.base_dir))?
        .with_config(&site.config);

    let mut reports = Vec::new();
    for page in &site.config.pages {
        let template_path = site.page_path(page);
        let template = fs::read_to_string(&template_path)
            .await
            .with_context(|| format!("Failed to read page {:?}", template_path))?;

        let document = Document::parse(&template);
        reports.push((page.clone(), loader.apply(&document)));
    }

    Ok(reports)
}

/// Print the binding report of every page
pub async fn run(site: &Site) -> Result<()> {
    for (page, report) in reports(site).await? {
        println!("{}:", page);
        println!("{}", report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::section;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reports_count_bound_nodes() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("index.html"),
            r#"<section id="faq"><div class="faq-item"><h3>Q</h3></div><div class="faq-item"><h3>Q</h3></div></section>"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("assets/data")).unwrap();
        fs::write(
            dir.path().join("assets/data/content.json"),
            r#"{ "faq": { "items": [{ "question": "a" }, { "question": "b" }, { "question": "c" }] } }"#,
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let reports = reports(&site).await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, "index.html");
        assert_eq!(reports[0].1.nodes(section::FAQ), 2);
    }

    #[tokio::test]
    async fn test_reports_fail_without_content() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(reports(&site).await.is_err());
    }
}
