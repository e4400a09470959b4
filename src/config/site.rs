//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Content
    pub content: String,
    pub pages: Vec<String>,

    // Directory
    pub public_dir: String,
    #[serde(default)]
    pub skip_copy: Vec<String>,

    // Fixed text written by the binder
    #[serde(default)]
    pub labels: LabelsConfig,
    #[serde(default)]
    pub credits: CreditsConfig,

    // Development server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: "assets/data/content.json".to_string(),
            pages: vec!["index.html".to_string()],

            public_dir: "public".to_string(),
            skip_copy: Vec::new(),

            labels: LabelsConfig::default(),
            credits: CreditsConfig::default(),

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Whether a site-relative path is one of the populated pages
    pub fn is_page(&self, rel: &str) -> bool {
        let rel = rel.trim_start_matches('/');
        self.pages.iter().any(|p| p.trim_start_matches('/') == rel)
    }
}

/// Labels the binder writes that do not come from the content document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    pub buy_button: String,
    pub advanced_badge: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            buy_button: "Buy Now".to_string(),
            advanced_badge: "Advanced".to_string(),
        }
    }
}

/// Footer credits line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditsConfig {
    pub text: String,
    pub name: String,
    pub url: String,
}

impl Default for CreditsConfig {
    fn default() -> Self {
        Self {
            text: "Designed by".to_string(),
            name: "BootstrapMade".to_string(),
            url: "https://bootstrapmade.com/".to_string(),
        }
    }
}

/// Development server defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content, "assets/data/content.json");
        assert_eq!(config.pages, vec!["index.html"]);
        assert_eq!(config.labels.buy_button, "Buy Now");
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
content: data/site.json
pages:
  - index.html
  - about.html
labels:
  buy_button: Subscribe
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.content, "data/site.json");
        assert_eq!(config.pages.len(), 2);
        assert_eq!(config.labels.buy_button, "Subscribe");
        assert_eq!(config.labels.advanced_badge, "Advanced");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ip, "localhost");
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_is_page() {
        let config = SiteConfig::default();
        assert!(config.is_page("index.html"));
        assert!(config.is_page("/index.html"));
        assert!(!config.is_page("about.html"));
    }
}
