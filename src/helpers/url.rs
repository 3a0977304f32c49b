//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::HashSet;

use crate::config::SiteConfig;
use crate::content::listing::ALL_CATEGORIES;

/// Characters escaped in a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Directory holding one sub-directory per post
pub const POSTS_DIR: &str = "posts";
/// Directory holding one sub-directory per category view
pub const CATEGORY_DIR: &str = "category";

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Percent-encode one path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Output path of a post, relative to the public directory
pub fn post_path(slug: &str) -> String {
    format!("{}/{}/", POSTS_DIR, slug)
}

/// Output path of a category view, relative to the public directory
pub fn category_path(category: &str) -> String {
    format!("{}/{}/", CATEGORY_DIR, slug::slugify(category))
}

/// Configured categories that get their own page, in config order.
///
/// `"All"` is the root listing and is skipped here. A category whose page
/// path is already taken by an earlier one is dropped with a warning.
pub fn category_pages(config: &SiteConfig) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut pages = Vec::new();

    for name in &config.categories {
        if name == ALL_CATEGORIES {
            continue;
        }
        let path = category_path(name);
        if !seen.insert(path.clone()) {
            tracing::warn!(
                "Category {:?} shares the page {} with another category, skipping",
                name,
                path
            );
            continue;
        }
        pages.push(name.as_str());
    }

    pages
}

/// Link to a post page
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &post_path(&encode_segment(slug)))
}

/// Absolute link to a post page; path-only when the site `url` is unset
pub fn post_permalink(config: &SiteConfig, slug: &str) -> String {
    full_url_for(config, &post_path(&encode_segment(slug)))
}

/// Link to a category view
pub fn category_url(config: &SiteConfig, category: &str) -> String {
    url_for(config, &category_path(category))
}
