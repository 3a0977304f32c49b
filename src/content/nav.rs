//! Previous/next navigation between posts

use super::PostMeta;

/// Neighbours of a post in listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjacent<'a> {
    /// The newer post, listed just before
    pub prev: Option<&'a PostMeta>,
    /// The older post, listed just after
    pub next: Option<&'a PostMeta>,
}

/// Find the posts around `slug` in an already sorted listing.
///
/// An unknown slug has no neighbours.
pub fn find_adjacent<'a>(slug: &str, posts: &'a [PostMeta]) -> Adjacent<'a> {
    let Some(pos) = posts.iter().position(|p| p.slug == slug) else {
        return Adjacent::default();
    };

    Adjacent {
        prev: pos.checked_sub(1).map(|i| &posts[i]),
        next: posts.get(pos + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::post::sort_posts;
    use chrono::NaiveDate;

    fn meta(slug: &str, date: &str) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            excerpt: String::new(),
            author: "team".to_string(),
            category: "General".to_string(),
            read_time: "5 min read".to_string(),
            featured: false,
        }
    }

    fn sorted() -> Vec<PostMeta> {
        let mut posts = vec![
            meta("A", "2025-01-03"),
            meta("B", "2025-01-01"),
            meta("C", "2025-01-02"),
        ];
        sort_posts(&mut posts);
        posts
    }

    #[test]
    fn test_interior_post() {
        let posts = sorted();
        let adj = find_adjacent("C", &posts);
        assert_eq!(adj.prev.map(|p| p.slug.as_str()), Some("A"));
        assert_eq!(adj.next.map(|p| p.slug.as_str()), Some("B"));
    }

    #[test]
    fn test_boundaries() {
        let posts = sorted();

        let first = find_adjacent("A", &posts);
        assert!(first.prev.is_none());
        assert_eq!(first.next.map(|p| p.slug.as_str()), Some("C"));

        let last = find_adjacent("B", &posts);
        assert_eq!(last.prev.map(|p| p.slug.as_str()), Some("C"));
        assert!(last.next.is_none());
    }

    #[test]
    fn test_unknown_slug() {
        let posts = sorted();
        assert_eq!(find_adjacent("missing", &posts), Adjacent::default());
        assert_eq!(find_adjacent("A", &[]), Adjacent::default());
    }

    #[test]
    fn test_single_post() {
        let posts = vec![meta("only", "2025-05-05")];
        let adj = find_adjacent("only", &posts);
        assert!(adj.prev.is_none());
        assert!(adj.next.is_none());
    }
}
