//! Generator module - writes the static site using the built-in Tera templates

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tera::Context;

use crate::content::listing::{self, ALL_CATEGORIES};
use crate::content::{find_adjacent, ContentLoader, MarkdownRenderer, Post, PostMeta};
use crate::helpers::{category_pages, category_path, post_path};
use crate::templates::{CategoryTab, NavPost, PostCard, SiteData, TemplateRenderer, STYLESHEET};
use crate::Blog;

/// Counts reported after a build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Article pages written
    pub posts: usize,
    /// Listing pages written ("All" plus one per category)
    pub listings: usize,
    /// Post files that exist but could not be rendered
    pub skipped: usize,
}

/// Static site generator using Tera templates
pub struct Generator {
    blog: Blog,
    loader: ContentLoader,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
    site: SiteData,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            blog: blog.clone(),
            loader: ContentLoader::new(blog),
            renderer: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::from_config(&blog.config.highlight),
            site: SiteData::from_config(&blog.config),
        })
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<BuildReport> {
        fs::create_dir_all(&self.blog.public_dir)
            .with_context(|| format!("Failed to create {:?}", self.blog.public_dir))?;

        let posts = self.loader.list_all()?;
        tracing::info!("Loaded {} posts", posts.len());

        let mut report = BuildReport::default();

        self.write_file("css/style.css", STYLESHEET)?;

        // Listing: "All" at the root, then one static view per category
        self.write_file("index.html", &self.render_listing(&posts, ALL_CATEGORIES)?)?;
        report.listings += 1;
        for category in category_pages(&self.blog.config) {
            let html = self.render_listing(&posts, category)?;
            self.write_file(&format!("{}index.html", category_path(category)), &html)?;
            report.listings += 1;
        }

        // Article pages, one per post file found at build time
        for slug in self.loader.list_slugs()? {
            match self.render_post(&slug, &posts)? {
                Some(html) => {
                    self.write_file(&format!("{}index.html", post_path(&slug)), &html)?;
                    report.posts += 1;
                }
                None => report.skipped += 1,
            }
        }

        self.write_file("404.html", &self.render_not_found()?)?;

        tracing::info!(
            "Generated {} posts and {} listing pages ({} skipped)",
            report.posts,
            report.listings,
            report.skipped
        );
        Ok(report)
    }

    /// Render the listing page filtered to `category`
    pub fn render_listing(&self, posts: &[PostMeta], category: &str) -> Result<String> {
        let config = &self.blog.config;
        let cards = |items: Vec<&PostMeta>| -> Vec<PostCard> {
            items.into_iter().map(|p| PostCard::new(config, p)).collect()
        };

        let mut context = self.base_context();
        context.insert("featured", &cards(listing::featured(posts)));
        context.insert("posts", &cards(listing::filter_by_category(posts, category)));
        context.insert("tabs", &CategoryTab::build(config, category));
        context.insert("selected", category);

        self.renderer.render("index.html", &context)
    }

    /// Render the article page for `slug`; `None` when there is no such post
    pub fn render_post(&self, slug: &str, posts: &[PostMeta]) -> Result<Option<String>> {
        let post = match self.loader.get_by_slug(slug) {
            Ok(post) => post,
            Err(e) if e.is_not_found() => {
                tracing::warn!("No page for {}: {}", slug, e);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Some(self.render_article(&post, posts)?))
    }

    fn render_article(&self, post: &Post, posts: &[PostMeta]) -> Result<String> {
        let config = &self.blog.config;
        let adjacent = find_adjacent(post.slug(), posts);

        let mut context = self.base_context();
        context.insert("post", &PostCard::new(config, &post.meta));
        context.insert("content", &self.markdown.render(&post.body));
        context.insert("extra", &post.extra);
        context.insert("prev_post", &adjacent.prev.map(|p| NavPost::new(config, p)));
        context.insert("next_post", &adjacent.next.map(|p| NavPost::new(config, p)));

        self.renderer.render("post.html", &context)
    }

    /// Render the page shown for unknown articles
    pub fn render_not_found(&self) -> Result<String> {
        self.renderer.render("404.html", &self.base_context())
    }

    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site);
        context
    }

    /// Write `content` to `relative` inside the public directory
    fn write_file(&self, relative: &str, content: &str) -> Result<()> {
        let output_path = self.blog.public_dir.join(Path::new(relative));
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, content)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }
}
