//! Configuration module

mod site;

pub use site::CreditsConfig;
pub use site::LabelsConfig;
pub use site::ServerConfig;
pub use site::SiteConfig;
