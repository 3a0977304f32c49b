//! Listing views: featured posts, category filter, category counts

use indexmap::IndexMap;

use super::PostMeta;

/// Pseudo-category that selects every post
pub const ALL_CATEGORIES: &str = "All";

/// Featured posts, in listing order
pub fn featured(posts: &[PostMeta]) -> Vec<&PostMeta> {
    posts.iter().filter(|p| p.featured).collect()
}

/// Posts in `category`; [`ALL_CATEGORIES`] keeps everything
pub fn filter_by_category<'a>(posts: &'a [PostMeta], category: &str) -> Vec<&'a PostMeta> {
    if category == ALL_CATEGORIES {
        return posts.iter().collect();
    }
    posts.iter().filter(|p| p.category == category).collect()
}

/// Number of posts per category, most used first (ties by name)
pub fn category_counts(posts: &[PostMeta]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for post in posts {
        *counts.entry(post.category.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<_> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
