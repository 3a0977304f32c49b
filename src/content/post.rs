//! Post models

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Listing metadata for a post, with every default already applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    /// File name without the extension; unique within the content directory
    pub slug: String,

    pub title: String,

    /// Publication date
    pub date: NaiveDate,

    pub excerpt: String,

    pub author: String,

    pub category: String,

    /// Free-form estimate such as "5 min read"
    pub read_time: String,

    /// Highlighted at the top of the listing
    pub featured: bool,
}

impl PostMeta {
    /// Listing order: newest first, then by slug so equal dates are stable
    pub fn listing_order(a: &PostMeta, b: &PostMeta) -> Ordering {
        b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug))
    }
}

/// A full post: metadata plus the raw MDX body
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    #[serde(flatten)]
    pub meta: PostMeta,

    /// Raw markup after the front-matter block
    pub body: String,

    /// Front-matter keys without a dedicated field
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Post {
    pub fn slug(&self) -> &str {
        &self.meta.slug
    }
}

/// Sort posts into listing order in place
pub fn sort_posts(posts: &mut [PostMeta]) {
    posts.sort_by(PostMeta::listing_order);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(slug: &str, date: &str) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            excerpt: String::new(),
            author: "team".to_string(),
            category: "General".to_string(),
            read_time: "5 min read".to_string(),
            featured: false,
        }
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![
            meta("a", "2025-01-03"),
            meta("b", "2025-01-01"),
            meta("c", "2025-01-02"),
        ];
        sort_posts(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_equal_dates_break_ties_by_slug() {
        let mut posts = vec![
            meta("zeta", "2025-03-01"),
            meta("alpha", "2025-03-01"),
            meta("mid", "2025-03-01"),
        ];
        sort_posts(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_serialized_keys_match_frontmatter() {
        let json = serde_json::to_value(meta("a", "2025-01-03")).unwrap();
        assert_eq!(json["readTime"], "5 min read");
        assert_eq!(json["date"], "2025-01-03");
    }
}
