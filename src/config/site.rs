//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub description: String,
    pub copyright: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    /// File extension recognized as a post (without the dot)
    pub extension: String,

    // Writing
    pub default_author: String,
    pub date_format: String,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Listing
    pub categories: Vec<String>,
    #[serde(default)]
    pub accent_categories: Vec<String>,

    // Navigation chrome
    pub home_url: String,
    pub home_label: String,
    #[serde(default)]
    pub cta: CtaConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            subtitle: "Insights & Updates".to_string(),
            tagline: String::new(),
            description: String::new(),
            copyright: String::new(),

            url: String::new(),
            root: "/".to_string(),

            content_dir: "content/posts".to_string(),
            public_dir: "out".to_string(),
            extension: "mdx".to_string(),

            default_author: "team".to_string(),
            date_format: "M/D/YYYY".to_string(),
            highlight: HighlightConfig::default(),

            categories: vec![
                "Company".to_string(),
                "Legal Info".to_string(),
                "Immigration".to_string(),
                "Business".to_string(),
                "Baklava".to_string(),
                "Updates".to_string(),
            ],
            accent_categories: vec!["Baklava".to_string()],

            home_url: String::new(),
            home_label: "Back to home".to_string(),
            cta: CtaConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Whether a category gets the accent style on badges and tabs
    pub fn is_accent(&self, category: &str) -> bool {
        self.accent_categories.iter().any(|c| c == category)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// Call-to-action block shown at the bottom of the listing page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaConfig {
    pub heading: String,
    pub text: String,
    pub links: Vec<CtaLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub primary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content/posts");
        assert_eq!(config.extension, "mdx");
        assert_eq!(config.default_author, "team");
        assert!(config.categories.contains(&"Updates".to_string()));
        // No canonical links unless the site address is set
        assert!(config.url.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: VeraLex Blog
default_author: VeraLex Team
categories:
  - Company
  - Updates
cta:
  heading: Need Legal Help?
  links:
    - label: Get Started Now
      url: http://localhost:5173/request
      primary: true
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "VeraLex Blog");
        assert_eq!(config.default_author, "VeraLex Team");
        assert_eq!(config.categories, vec!["Company", "Updates"]);
        assert_eq!(config.cta.links.len(), 1);
        assert!(config.cta.links[0].primary);
        // Untouched fields keep their defaults
        assert_eq!(config.public_dir, "out");
    }

    #[test]
    fn test_accent_category() {
        let config = SiteConfig::default();
        assert!(config.is_accent("Baklava"));
        assert!(!config.is_accent("Company"));
    }
}
