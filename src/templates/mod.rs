//! Built-in site templates using the Tera template engine
//!
//! All templates are embedded in the binary.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::{CtaLink, SiteConfig};
use crate::content::PostMeta;
use crate::helpers::{
    category_pages, category_url, format_date, full_date, post_permalink, post_url, url_for,
};

/// Stylesheet written next to the generated pages
pub const STYLESHEET: &str = include_str!("site/style.css");

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Paths and pre-rendered HTML go in as-is; author text is escaped
        // explicitly in the templates
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("index.html", include_str!("site/index.html")),
            ("post.html", include_str!("site/post.html")),
            ("404.html", include_str!("site/404.html")),
            ("partials/card.html", include_str!("site/partials/card.html")),
            (
                "partials/featured_card.html",
                include_str!("site/partials/featured_card.html"),
            ),
        ])?;

        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: format a `YYYY-MM-DD` string.
///
/// `format` takes Moment.js tokens; `"LL"` means "January 3, 2025".
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "YYYY-MM-DD".to_string(),
    };

    let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") else {
        return Ok(tera::Value::String(s));
    };

    let formatted = if format == "LL" {
        full_date(&date)
    } else {
        format_date(&date, &format)
    };
    Ok(tera::Value::String(formatted))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub description: String,
    pub copyright: String,
    pub date_format: String,
    /// Public site address, empty when not configured
    pub url: String,
    pub home: String,
    pub stylesheet: String,
    pub home_url: String,
    pub home_label: String,
    pub cta_heading: String,
    pub cta_text: String,
    pub cta_links: Vec<CtaLink>,
}

impl SiteData {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            tagline: config.tagline.clone(),
            description: config.description.clone(),
            copyright: config.copyright.clone(),
            date_format: config.date_format.clone(),
            url: config.url.clone(),
            home: url_for(config, ""),
            stylesheet: url_for(config, "css/style.css"),
            home_url: config.home_url.clone(),
            home_label: config.home_label.clone(),
            cta_heading: config.cta.heading.clone(),
            cta_text: config.cta.text.clone(),
            cta_links: config.cta.links.clone(),
        }
    }
}

/// A post as shown on listing cards and in the article header
#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub read_time: String,
    pub featured: bool,
    pub url: String,
    pub permalink: String,
    /// Category rendered with the accent style
    pub accent: bool,
}

impl PostCard {
    pub fn new(config: &SiteConfig, meta: &PostMeta) -> Self {
        Self {
            slug: meta.slug.clone(),
            title: meta.title.clone(),
            date: meta.date.format("%Y-%m-%d").to_string(),
            excerpt: meta.excerpt.clone(),
            author: meta.author.clone(),
            category: meta.category.clone(),
            read_time: meta.read_time.clone(),
            featured: meta.featured,
            url: post_url(config, &meta.slug),
            permalink: post_permalink(config, &meta.slug),
            accent: config.is_accent(&meta.category),
        }
    }
}

/// One entry of the category filter bar
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTab {
    pub name: String,
    pub url: String,
    pub selected: bool,
    pub accent: bool,
}

impl CategoryTab {
    /// `"All"` first, then the configured category pages in order
    pub fn build(config: &SiteConfig, selected: &str) -> Vec<Self> {
        use crate::content::listing::ALL_CATEGORIES;

        let all = CategoryTab {
            name: ALL_CATEGORIES.to_string(),
            url: url_for(config, ""),
            selected: selected == ALL_CATEGORIES,
            accent: false,
        };

        std::iter::once(all)
            .chain(category_pages(config).into_iter().map(|name| CategoryTab {
                name: name.to_string(),
                url: category_url(config, name),
                selected: selected == name,
                accent: config.is_accent(name),
            }))
            .collect()
    }
}

/// Link to a neighbouring post
#[derive(Debug, Clone, Serialize)]
pub struct NavPost {
    pub title: String,
    pub url: String,
}

impl NavPost {
    pub fn new(config: &SiteConfig, meta: &PostMeta) -> Self {
        Self {
            title: meta.title.clone(),
            url: post_url(config, &meta.slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_str(renderer: &TemplateRenderer, tpl: &str, ctx: &Context) -> String {
        let mut tera = renderer.tera.clone();
        tera.add_raw_template("__test.html", tpl).unwrap();
        tera.render("__test.html", ctx).unwrap()
    }

    #[test]
    fn test_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_date_format_filter() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert("d", "2025-01-03");

        assert_eq!(
            render_str(&renderer, r#"{{ d | date_format(format="M/D/YYYY") }}"#, &ctx),
            "1/3/2025"
        );
        assert_eq!(
            render_str(&renderer, r#"{{ d | date_format(format="LL") }}"#, &ctx),
            "January 3, 2025"
        );

        ctx.insert("d", "not a date");
        assert_eq!(render_str(&renderer, "{{ d | date_format }}", &ctx), "not a date");
    }

    #[test]
    fn test_category_tabs() {
        let config = SiteConfig {
            categories: vec!["Company".to_string(), "Baklava".to_string()],
            ..SiteConfig::default()
        };
        let tabs = CategoryTab::build(&config, "Baklava");

        let names: Vec<_> = tabs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["All", "Company", "Baklava"]);
        assert!(!tabs[0].selected);
        assert!(tabs[2].selected);
        assert!(tabs[2].accent);
        assert_eq!(tabs[0].url, "/");
        assert_eq!(tabs[1].url, "/category/company/");
    }

    #[test]
    fn test_category_tabs_single_all() {
        let config = SiteConfig {
            categories: vec!["All".to_string(), "Company".to_string()],
            ..SiteConfig::default()
        };
        let tabs = CategoryTab::build(&config, "All");

        let names: Vec<_> = tabs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["All", "Company"]);
        assert!(tabs[0].selected);
    }
}
