//! Feed generation (RSS, Atom).
//!
//! Republishes the syndication document from the complete post corpus:
//!
//! - **RSS 2.0**: Standard feed format (`rss.xml`)
//! - **Atom 1.0**: Modern feed format (`atom.xml`)
//!
//! Regeneration is idempotent - every timestamp in the document derives
//! from post dates, never from the clock.

use anyhow::Result;

pub mod atom;
mod common;
pub mod rss;

pub use common::{FeedEntry, collect_entries};

use crate::config::{FeedFormat, SiteConfig};
use crate::generator::minify_xml;
use crate::log;

/// Republish the feed if enabled (RSS or Atom based on format setting).
///
/// Any failure propagates and aborts the build; a missing feed is a build
/// failure, not a degraded page.
pub async fn publish(config: &SiteConfig) -> Result<()> {
    if config.build.feed.enable {
        match config.build.feed.format {
            FeedFormat::Rss => rss::build_rss(config).await?,
            FeedFormat::Atom => atom::build_atom(config).await?,
        }
    }
    Ok(())
}

/// Write the serialized feed under the output directory.
pub(crate) async fn write_feed(xml: String, config: &SiteConfig) -> Result<()> {
    let xml = minify_xml(xml.as_bytes(), config.build.minify);
    let feed_path = config.build.output.join(&config.build.feed.path);

    if let Some(parent) = feed_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&feed_path, &*xml).await?;

    log!("feed"; "{}", feed_path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}
