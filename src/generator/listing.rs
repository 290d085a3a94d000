//! Blog index page data: the hand-off to the rendering layer.
//!
//! Serializes the aggregation pipeline's output - year groups, descending -
//! together with resolved navigation links and the feed location. The
//! rendering layer consumes this file as-is; nothing here survives past one
//! build invocation.

use anyhow::Result;
use serde::Serialize;

use crate::archive::YearGroup;
use crate::config::SiteConfig;
use crate::core::{LinkTarget, LinkView};
use crate::log;

/// Data contract for the blog index page.
#[derive(Debug, Serialize)]
pub struct ListingData {
    /// Site-relative feed location, when feed generation is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,
    /// Navigation links resolved against the listing route.
    pub nav: Vec<NavLink>,
    /// Year groups, years descending, items newest-first within each year.
    pub years: Vec<YearGroup>,
}

/// One resolved navigation anchor.
#[derive(Debug, Serialize)]
pub struct NavLink {
    pub label: String,
    #[serde(flatten)]
    pub link: LinkView,
}

/// Assemble the page data for the listing route.
///
/// Each nav entry goes through the link router once: external destinations
/// become tracked outbound anchors, internal ones get active-state matching
/// against the listing route.
pub fn listing_data(years: Vec<YearGroup>, config: &SiteConfig) -> ListingData {
    let current = &config.build.listing.route;

    let nav = config
        .site
        .nav
        .iter()
        .map(|entry| NavLink {
            label: entry.label.clone(),
            link: LinkTarget::classify(&entry.href).view(current, entry.active_exact),
        })
        .collect();

    let feed_url = config
        .build
        .feed
        .enable
        .then(|| format!("/{}", config.build.feed.path.display()));

    ListingData {
        feed_url,
        nav,
        years,
    }
}

/// Write the page data JSON under the output directory.
pub async fn write_listing(data: &ListingData, config: &SiteConfig) -> Result<()> {
    let path = config.build.output.join(&config.build.listing.path);

    let json = if config.build.minify {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, json).await?;

    log!("listing"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavEntry;
    use crate::core::LinkKind;

    fn make_config(nav: Vec<NavEntry>) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.nav = nav;
        config
    }

    fn nav_entry(label: &str, href: &str, active_exact: bool) -> NavEntry {
        NavEntry {
            label: label.into(),
            href: href.into(),
            active_exact,
        }
    }

    #[test]
    fn test_nav_resolved_against_listing_route() {
        let config = make_config(vec![
            nav_entry("Blog", "/blog", false),
            nav_entry("Home", "/", true),
            nav_entry("Twitter", "https://twitter.com/someone", false),
        ]);

        let data = listing_data(Vec::new(), &config);

        // Listing route is /blog/: the blog entry is active
        assert_eq!(data.nav[0].link.kind, LinkKind::Internal);
        assert!(data.nav[0].link.active);
        // Exact-match home entry is not
        assert!(!data.nav[1].link.active);
        // External entry is tracked and never active
        assert_eq!(data.nav[2].link.kind, LinkKind::External);
        assert!(data.nav[2].link.track_outbound);
        assert!(!data.nav[2].link.active);
    }

    #[test]
    fn test_feed_url_follows_enable_flag() {
        let mut config = make_config(Vec::new());
        let data = listing_data(Vec::new(), &config);
        assert!(data.feed_url.is_none());

        config.build.feed.enable = true;
        let data = listing_data(Vec::new(), &config);
        assert_eq!(data.feed_url.as_deref(), Some("/blog/rss.xml"));
    }

    #[test]
    fn test_serialized_shape() {
        let mut config = make_config(vec![nav_entry("Blog", "/blog", false)]);
        config.build.feed.enable = true;

        let json = serde_json::to_value(listing_data(Vec::new(), &config)).unwrap();
        assert_eq!(json["feed_url"], "/blog/rss.xml");
        assert_eq!(json["nav"][0]["label"], "Blog");
        assert_eq!(json["nav"][0]["kind"], "internal");
        assert!(json["years"].as_array().unwrap().is_empty());
    }
}
