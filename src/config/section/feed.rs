//! Feed (RSS/Atom) generation configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

/// `[build.feed]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Enable feed generation.
    pub enable: bool,
    /// Output path for feed file, relative to the output directory.
    pub path: PathBuf,
    /// Feed format (RSS 2.0 or Atom 1.0).
    pub format: FeedFormat,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "blog/rss.xml".into(),
            format: FeedFormat::Rss,
        }
    }
}
