//! Content document model
//!
//! Mirrors the JSON shape of `content.json`. Every field is optional on
//! input and falls back to an empty value, so a partial document still
//! binds whatever it does carry.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The whole content document driving a page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(deserialize_with = "section")]
    pub site: SiteInfo,
    #[serde(deserialize_with = "section")]
    pub navigation: Navigation,
    #[serde(deserialize_with = "section")]
    pub hero: Hero,
    #[serde(deserialize_with = "section")]
    pub featured_services: FeaturedServices,
    #[serde(deserialize_with = "section")]
    pub about: About,
    #[serde(deserialize_with = "section")]
    pub skills: Skills,
    #[serde(deserialize_with = "section")]
    pub stats: Stats,
    #[serde(deserialize_with = "section")]
    pub services: Services,
    #[serde(deserialize_with = "section")]
    pub testimonials: Testimonials,
    #[serde(deserialize_with = "section")]
    pub portfolio: Portfolio,
    #[serde(deserialize_with = "section")]
    pub team: Team,
    #[serde(deserialize_with = "section")]
    pub pricing: Pricing,
    #[serde(deserialize_with = "section")]
    pub faq: Faq,
    #[serde(deserialize_with = "section")]
    pub contact: Contact,
    #[serde(deserialize_with = "section")]
    pub footer: Footer,
}

impl ContentDocument {
    /// Parse a content document from raw JSON bytes
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

/// Heading block shared by most sections: `<h2>` plus a two-part subtitle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeading {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub subtitle: String,
    #[serde(deserialize_with = "text")]
    pub highlight: String,
}

/// Icon, title and description card
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IconCard {
    #[serde(deserialize_with = "text")]
    pub icon: String,
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "text")]
    pub keywords: String,
    #[serde(deserialize_with = "section")]
    pub contact: SiteContact,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContact {
    #[serde(deserialize_with = "text")]
    pub email: String,
    #[serde(deserialize_with = "text")]
    pub phone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Navigation {
    #[serde(deserialize_with = "list")]
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    #[serde(deserialize_with = "text")]
    pub text: String,
    #[serde(deserialize_with = "text")]
    pub href: String,
    #[serde(deserialize_with = "flag")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub highlight: String,
    #[serde(deserialize_with = "text")]
    pub subtitle: String,
    #[serde(deserialize_with = "section")]
    pub buttons: HeroButtons,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroButtons {
    #[serde(deserialize_with = "text")]
    pub primary: String,
    #[serde(deserialize_with = "text")]
    pub secondary: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedServices {
    #[serde(deserialize_with = "list")]
    pub services: Vec<IconCard>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    #[serde(flatten)]
    pub heading: SectionHeading,
    #[serde(deserialize_with = "text")]
    pub main_heading: String,
    #[serde(deserialize_with = "text")]
    pub intro_text: String,
    #[serde(deserialize_with = "list")]
    pub features: Vec<IconCard>,
    #[serde(deserialize_with = "text")]
    pub conclusion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "list")]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub percentage: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(deserialize_with = "list")]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    #[serde(deserialize_with = "text")]
    pub icon: String,
    #[serde(deserialize_with = "text")]
    pub number: String,
    #[serde(deserialize_with = "text")]
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Services {
    #[serde(flatten)]
    pub heading: SectionHeading,
    #[serde(deserialize_with = "list")]
    pub services: Vec<IconCard>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonials {
    #[serde(deserialize_with = "list")]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    #[serde(deserialize_with = "text")]
    pub image: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub position: String,
    #[serde(deserialize_with = "text")]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    #[serde(flatten)]
    pub heading: SectionHeading,
    #[serde(deserialize_with = "list")]
    pub filters: Vec<PortfolioFilter>,
    #[serde(deserialize_with = "list")]
    pub items: Vec<PortfolioItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioFilter {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub filter: String,
    #[serde(deserialize_with = "flag")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioItem {
    #[serde(deserialize_with = "text")]
    pub image: String,
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "text")]
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(flatten)]
    pub heading: SectionHeading,
    #[serde(deserialize_with = "list")]
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    #[serde(deserialize_with = "text")]
    pub image: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub position: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    #[serde(flatten)]
    pub heading: SectionHeading,
    #[serde(deserialize_with = "list")]
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPlan {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub price: String,
    #[serde(deserialize_with = "text")]
    pub period: String,
    #[serde(deserialize_with = "text_list")]
    pub features: Vec<String>,
    /// Indices into `features` rendered as not included
    #[serde(deserialize_with = "indices")]
    pub excluded: Vec<usize>,
    #[serde(deserialize_with = "flag")]
    pub featured: bool,
    #[serde(deserialize_with = "flag")]
    pub advanced: bool,
}

impl PricingPlan {
    pub fn is_excluded(&self, index: usize) -> bool {
        self.excluded.contains(&index)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    #[serde(flatten)]
    pub heading: SectionHeading,
    #[serde(deserialize_with = "list")]
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    #[serde(deserialize_with = "text")]
    pub question: String,
    #[serde(deserialize_with = "text")]
    pub answer: String,
    #[serde(deserialize_with = "flag")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(flatten)]
    pub heading: SectionHeading,
    #[serde(deserialize_with = "section")]
    pub info: ContactInfo,
    #[serde(deserialize_with = "section")]
    pub form: ContactForm,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(deserialize_with = "section")]
    pub address: InfoBlock,
    #[serde(deserialize_with = "section")]
    pub phone: InfoBlock,
    #[serde(deserialize_with = "section")]
    pub email: InfoBlock,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoBlock {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub email: String,
    #[serde(deserialize_with = "text")]
    pub subject: String,
    #[serde(deserialize_with = "text")]
    pub message: String,
    #[serde(deserialize_with = "text")]
    pub submit: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    #[serde(deserialize_with = "section")]
    pub newsletter: Newsletter,
    #[serde(deserialize_with = "section")]
    pub about: FooterAbout,
    #[serde(deserialize_with = "section")]
    pub links: FooterLinks,
    #[serde(deserialize_with = "section")]
    pub social: Social,
    #[serde(deserialize_with = "section")]
    pub copyright: Copyright,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Newsletter {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterAbout {
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "text")]
    pub address: String,
    #[serde(deserialize_with = "text")]
    pub phone: String,
    #[serde(deserialize_with = "text")]
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLinks {
    #[serde(deserialize_with = "section")]
    pub useful: LinkGroup,
    #[serde(deserialize_with = "section")]
    pub services: LinkGroup,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkGroup {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "list")]
    pub items: Vec<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "text")]
    pub text: String,
    #[serde(deserialize_with = "text")]
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Copyright {
    #[serde(deserialize_with = "text")]
    pub text: String,
    #[serde(deserialize_with = "text")]
    pub company: String,
    #[serde(deserialize_with = "text")]
    pub rights: String,
}

/// Accept strings, numbers, booleans or lists where the page shows text
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => String::new(),
    }
}

/// `true`, non-zero numbers and strings other than "", "0" and "false"
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
        }
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    })
}

/// A nested object; anything else becomes the empty value
fn section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// A list of objects. Entries that are not objects stay in place as empty
/// values so later entries keep their positions.
fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(array(Value::deserialize(deserializer)?)
        .into_iter()
        .map(|item| T::deserialize(item).unwrap_or_default())
        .collect())
}

fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(array(Value::deserialize(deserializer)?)
        .iter()
        .map(value_to_text)
        .collect())
}

/// Row indices given as numbers or numeric strings; anything else is dropped
fn indices<'de, D>(deserializer: D) -> Result<Vec<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(array(Value::deserialize(deserializer)?)
        .iter()
        .filter_map(|item| match item {
            Value::Number(n) => n.as_u64().map(|n| n as usize),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .collect())
}

fn array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}
