//! Content module - post models, front-matter, loading and navigation

mod error;
mod frontmatter;
pub mod listing;
pub mod loader;
mod markdown;
pub mod nav;
mod post;

pub use error::ContentError;
pub use frontmatter::{FrontMatter, MetaDefaults};
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use nav::{find_adjacent, Adjacent};
pub use post::{sort_posts, Post, PostMeta};
