//! Content errors

use thiserror::Error;

/// Errors raised while loading a single post
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Malformed post {slug}: {reason}")]
    Malformed { slug: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    /// Whether the rendering layer should treat this as "no such page".
    ///
    /// A malformed post is reported separately in logs but surfaces to
    /// readers exactly like a missing one.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ContentError::NotFound(_) | ContentError::Malformed { .. }
        )
    }
}
