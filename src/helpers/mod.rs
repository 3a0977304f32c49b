//! Helper functions for templates
//!
//! URL generation and date formatting shared by the generator and the
//! template filters.

mod date;
mod url;

pub use date::*;
pub use url::*;
