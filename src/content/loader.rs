//! Content loader - reads posts from the content directory
//!
//! Every call re-scans the directory, so the result always reflects what
//! is on disk right now.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, MetaDefaults, Post, PostMeta};
use crate::Blog;

/// Loads posts from a flat directory of front-matter documents
#[derive(Debug, Clone)]
pub struct ContentLoader {
    content_dir: PathBuf,
    extension: String,
    defaults: MetaDefaults,
}

impl ContentLoader {
    /// Create a loader for the site's configured content directory
    pub fn new(blog: &Blog) -> Self {
        Self::with_dir(
            &blog.content_dir,
            &blog.config.extension,
            MetaDefaults::new(blog.config.default_author.as_str()),
        )
    }

    /// Create a loader for an arbitrary directory
    pub fn with_dir<P: AsRef<Path>>(content_dir: P, extension: &str, defaults: MetaDefaults) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
            defaults,
        }
    }

    /// Metadata of every post, newest first.
    ///
    /// A missing content directory is created and yields an empty listing.
    /// Posts that cannot be read are skipped with a warning.
    pub fn list_all(&self) -> Result<Vec<PostMeta>, ContentError> {
        if !self.content_dir.exists() {
            match fs::create_dir_all(&self.content_dir) {
                Ok(()) => tracing::info!("Created content directory {:?}", self.content_dir),
                Err(e) => tracing::warn!(
                    "Could not create content directory {:?}: {}",
                    self.content_dir,
                    e
                ),
            }
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        for (slug, path) in self.scan()? {
            match self.read_post(&slug, &path) {
                Ok(post) => posts.push(post.meta),
                Err(e) => tracing::warn!("Skipping {:?}: {}", path, e),
            }
        }

        super::sort_posts(&mut posts);
        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.content_dir);

        Ok(posts)
    }

    /// Load one post with its body
    pub fn get_by_slug(&self, slug: &str) -> Result<Post, ContentError> {
        if !is_valid_slug(slug) {
            return Err(ContentError::NotFound(slug.to_string()));
        }

        let path = self.post_path(slug);
        if !path.is_file() {
            return Err(ContentError::NotFound(slug.to_string()));
        }

        self.read_post(slug, &path)
    }

    /// Slugs of every post file, sorted; used to decide which pages to build.
    ///
    /// Unlike [`list_all`](Self::list_all) a missing directory is left alone.
    pub fn list_slugs(&self) -> Result<Vec<String>, ContentError> {
        if !self.content_dir.exists() {
            return Ok(Vec::new());
        }

        let mut slugs: Vec<String> = self.scan()?.into_iter().map(|(slug, _)| slug).collect();
        slugs.sort();
        Ok(slugs)
    }

    /// Path of the file backing `slug`
    pub fn post_path(&self, slug: &str) -> PathBuf {
        self.content_dir.join(format!("{}.{}", slug, self.extension))
    }

    /// (slug, path) of every post file directly inside the content directory
    fn scan(&self) -> Result<Vec<(String, PathBuf)>, ContentError> {
        let mut found = Vec::new();

        for entry in WalkDir::new(&self.content_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                e.into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop in content directory"))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if let Some(slug) = self.slug_for(path) {
                found.push((slug, path.to_path_buf()));
            }
        }

        Ok(found)
    }

    /// File name minus the recognized extension, if this is a post file
    fn slug_for(&self, path: &Path) -> Option<String> {
        let ext = path.extension()?.to_str()?;
        if ext != self.extension {
            return None;
        }
        let slug = path.file_stem()?.to_str()?;
        if slug.is_empty() {
            return None;
        }
        Some(slug.to_string())
    }

    fn read_post(&self, slug: &str, path: &Path) -> Result<Post, ContentError> {
        let malformed = |reason: String| ContentError::Malformed {
            slug: slug.to_string(),
            reason,
        };

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ContentError::NotFound(slug.to_string()))
            }
            Err(e) => return Err(malformed(e.to_string())),
        };
        let content = String::from_utf8(bytes).map_err(|e| malformed(e.to_string()))?;

        let (fm, body) = FrontMatter::parse(&content).map_err(|e| malformed(e.to_string()))?;
        let (meta, extra) = fm.into_meta(slug, &self.defaults);

        Ok(Post {
            meta,
            body: body.to_string(),
            extra,
        })
    }
}

/// A slug must name a single file inside the content directory
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\', '\0'])
}
