//! Built-in starter site
//!
//! Files written by `pagebind init`, embedded in the binary.

/// Starter `_config.yml`
pub const CONFIG: &str = include_str!("starter/_config.yml");

/// Starter page template
pub const INDEX_HTML: &str = include_str!("starter/index.html");

/// Starter content document
pub const CONTENT_JSON: &str = include_str!("starter/content.json");

/// Files of the starter site, relative to the site root
pub fn starter_files() -> Vec<(&'static str, &'static str)> {
    vec![
        (crate::CONFIG_FILE, CONFIG),
        ("index.html", INDEX_HTML),
        ("assets/data/content.json", CONTENT_JSON),
    ]
}
