//! `[build]` configuration: paths, output shaping, and sub-sections.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::FeedConfig;
use crate::core::UrlPath;

/// `[build]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content directory (markdown posts), relative to project root.
    pub content: PathBuf,
    /// Output directory, relative to project root.
    pub output: PathBuf,
    /// Minify generated output (feed XML, page data JSON).
    pub minify: bool,
    /// Include draft posts in the build.
    pub include_drafts: bool,
    /// Feed settings.
    pub feed: FeedConfig,
    /// Listing page data settings.
    pub listing: ListingConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            minify: true,
            include_drafts: false,
            feed: FeedConfig::default(),
            listing: ListingConfig::default(),
        }
    }
}

/// `[build.listing]` section: where the blog index page data lands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Output path for the page data file, relative to the output directory.
    pub path: PathBuf,
    /// Route of the listing page; the "current location" for active-link
    /// matching and the base route of article permalinks.
    pub route: UrlPath,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            path: "blog/index.json".into(),
            route: UrlPath::from_page("/blog/"),
        }
    }
}
