//! List site content

use anyhow::Result;
use std::io::Write;

use crate::content::listing::category_counts;
use crate::content::ContentLoader;
use crate::Blog;

/// List site content by type, writing to stdout
pub fn run(blog: &Blog, content_type: &str, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_listing(blog, content_type, json, &mut out)
}

/// List site content by type
pub fn write_listing<W: Write>(blog: &Blog, content_type: &str, json: bool, out: &mut W) -> Result<()> {
    let loader = ContentLoader::new(blog);

    match content_type {
        "post" | "posts" => {
            let posts = loader.list_all()?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&posts)?)?;
                return Ok(());
            }
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {}{} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    if post.featured { " *" } else { "" },
                    post.slug
                )?;
            }
        }
        "category" | "categories" => {
            let counts = category_counts(&loader.list_all()?);
            if json {
                let map: serde_json::Map<String, serde_json::Value> = counts
                    .into_iter()
                    .map(|(name, count)| (name, count.into()))
                    .collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&map)?)?;
                return Ok(());
            }
            writeln!(out, "Categories ({}):", counts.len())?;
            for (cat, count) in counts {
                writeln!(out, "  {} ({})", cat, count)?;
            }
        }
        "slug" | "slugs" => {
            let slugs = loader.list_slugs()?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&slugs)?)?;
                return Ok(());
            }
            for slug in slugs {
                writeln!(out, "{}", slug)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category, slug",
                content_type
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn blog() -> (TempDir, Blog) {
        let tmp = TempDir::new().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        fs::create_dir_all(&blog.content_dir).unwrap();
        fs::write(
            blog.content_dir.join("launch.mdx"),
            "---\ntitle: Launch\ndate: 2025-01-03\ncategory: Company\nfeatured: true\n---\n",
        )
        .unwrap();
        fs::write(
            blog.content_dir.join("notes.mdx"),
            "---\ntitle: Notes\ndate: 2025-01-01\ncategory: Company\n---\n",
        )
        .unwrap();
        (tmp, blog)
    }

    fn listing(blog: &Blog, content_type: &str, json: bool) -> String {
        let mut out = Vec::new();
        write_listing(blog, content_type, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_posts() {
        let (_tmp, blog) = blog();
        let text = listing(&blog, "post", false);
        assert!(text.starts_with("Posts (2):"));
        assert!(text.contains("2025-01-03 - Launch * [launch]"));
        assert!(text.contains("2025-01-01 - Notes [notes]"));
    }

    #[test]
    fn test_list_posts_json() {
        let (_tmp, blog) = blog();
        let value: serde_json::Value = serde_json::from_str(&listing(&blog, "posts", true)).unwrap();
        assert_eq!(value[0]["slug"], "launch");
        assert_eq!(value[0]["readTime"], "5 min read");
        assert_eq!(value[1]["featured"], false);
    }

    #[test]
    fn test_list_categories_and_slugs() {
        let (_tmp, blog) = blog();
        assert!(listing(&blog, "category", false).contains("Company (2)"));
        assert_eq!(listing(&blog, "slug", false), "launch\nnotes\n");
    }

    #[test]
    fn test_unknown_type() {
        let (_tmp, blog) = blog();
        let mut out = Vec::new();
        assert!(write_listing(&blog, "tags", false, &mut out).is_err());
    }
}
