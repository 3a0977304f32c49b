//! Configuration module

mod site;

pub use site::CtaConfig;
pub use site::CtaLink;
pub use site::HighlightConfig;
pub use site::SiteConfig;
