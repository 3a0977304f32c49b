//! postshelf: a static blog generator for MDX posts
//!
//! Posts live as `.mdx` files with YAML front-matter in a single content
//! directory. Each build scans that directory, sorts posts newest first,
//! and writes a listing page (with category views and featured posts)
//! plus one page per post with previous/next navigation.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The blog site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding the post files
    pub content_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<generator::BuildReport> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_without_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.content_dir, tmp.path().join("content/posts"));
        assert_eq!(blog.public_dir, tmp.path().join("out"));
    }

    #[test]
    fn test_new_reads_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "title: Team Blog\ncontent_dir: posts\npublic_dir: dist\n",
        )
        .unwrap();

        let blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.config.title, "Team Blog");
        assert_eq!(blog.content_dir, tmp.path().join("posts"));
        assert_eq!(blog.public_dir, tmp.path().join("dist"));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "categories: [unclosed\n").unwrap();
        assert!(Blog::new(tmp.path()).is_err());
    }
}
