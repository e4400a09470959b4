//! Content binding
//!
//! [`ContentLoader`] copies fields of a [`ContentDocument`] into fixed
//! locations of a parsed page. Each page section has its own routine; the
//! routines are independent of each other and run in page order.
//!
//! Repeating lists bind positionally: data entry `i` goes to the `i`-th
//! matching node. Extra entries are dropped and extra nodes keep their
//! template content, so reordering nodes in the template reorders what
//! they show.

mod contact;
mod fields;
mod header;
mod pricing;
mod report;
mod sections;
mod showcase;

pub use report::{BindReport, SectionReport};

use crate::config::{CreditsConfig, LabelsConfig, SiteConfig};
use crate::content::{ContentDocument, ContentSource, LoadError};
use crate::dom::Document;

/// Section names used in [`BindReport`]
pub mod section {
    pub const SITE: &str = "site";
    pub const NAVIGATION: &str = "navigation";
    pub const HERO: &str = "hero";
    pub const FEATURED_SERVICES: &str = "featured-services";
    pub const ABOUT: &str = "about";
    pub const SKILLS: &str = "skills";
    pub const STATS: &str = "stats";
    pub const SERVICES: &str = "services";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const PORTFOLIO: &str = "portfolio";
    pub const TEAM: &str = "team";
    pub const PRICING: &str = "pricing";
    pub const FAQ: &str = "faq";
    pub const CONTACT: &str = "contact";
    pub const FOOTER: &str = "footer";
}

/// Binds one content document to pages
#[derive(Debug, Clone)]
pub struct ContentLoader {
    content: ContentDocument,
    labels: LabelsConfig,
    credits: CreditsConfig,
}

impl ContentLoader {
    /// Create a loader for an already parsed document
    pub fn new(content: ContentDocument) -> Self {
        Self {
            content,
            labels: LabelsConfig::default(),
            credits: CreditsConfig::default(),
        }
    }

    /// Use the fixed labels and credits from the site configuration
    pub fn with_config(mut self, config: &SiteConfig) -> Self {
        self.labels = config.labels.clone();
        self.credits = config.credits.clone();
        self
    }

    /// Read and parse the content document
    pub async fn load(source: &ContentSource) -> Result<Self, LoadError> {
        let content = source.fetch().await?;
        Ok(Self::new(content))
    }

    /// Write every section of the content document into `document`.
    ///
    /// Targets missing from the page are skipped without error.
    pub fn apply(&self, document: &Document) -> BindReport {
        let root = document.root();
        let content = &self.content;

        let mut report = BindReport::default();
        report.push(header::site_info(document, &content.site));
        report.push(header::navigation(root, &content.navigation));
        report.push(header::hero(root, &content.hero));
        report.push(sections::featured_services(root, &content.featured_services));
        report.push(sections::about(root, &content.about));
        report.push(sections::skills(root, &content.skills));
        report.push(sections::stats(root, &content.stats));
        report.push(sections::services(root, &content.services));
        report.push(showcase::testimonials(root, &content.testimonials));
        report.push(showcase::portfolio(root, &content.portfolio));
        report.push(showcase::team(root, &content.team));
        report.push(pricing::pricing(root, &content.pricing, &self.labels));
        report.push(pricing::faq(root, &content.faq));
        report.push(contact::contact(root, &content.contact));
        report.push(contact::footer(root, &content.footer, &self.credits));

        for section in report.sections() {
            tracing::debug!(
                "Bound {}: {} nodes, {} writes",
                section.name,
                section.nodes,
                section.writes
            );
        }

        report
    }
}

/// Parse `template`, apply `loader` when there is one, and serialize.
///
/// Without a loader the page is passed through unchanged so it keeps its
/// placeholder content.
pub fn render(template: &str, loader: Option<&ContentLoader>) -> (String, Option<BindReport>) {
    let Some(loader) = loader else {
        return (template.to_string(), None);
    };

    let document = Document::parse(template);
    let report = loader.apply(&document);
    (document.to_html(), Some(report))
}
