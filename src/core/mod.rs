//! Core types - pure abstractions shared across the codebase.

mod link;
mod url;

pub use link::{LinkKind, LinkTarget, LinkView, is_absolute_url};
pub use url::UrlPath;
