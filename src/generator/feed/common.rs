//! Common utilities for feed generation.

use anyhow::Result;
use std::cmp::Reverse;

use crate::archive::buffer;
use crate::config::SiteConfig;
use crate::post::PostSummary;
use crate::store::ContentStore;
use crate::utils::date::DateTimeUtc;

/// A post adapted for feed inclusion.
///
/// The store guarantees title and date are present; drafts never reach
/// the feed.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub title: String,
    pub date: String,
    pub permalink: String,
    pub summary: Option<String>,
    pub author: Option<String>,
}

impl FeedEntry {
    fn from_summary(post: &PostSummary, config: &SiteConfig) -> Self {
        Self {
            title: post.title.clone(),
            date: post.date.clone(),
            permalink: post.route_under(&config.build.listing.route),
            summary: post.summary.clone(),
            author: post.author.clone(),
        }
    }
}

/// Load the full corpus for the feed, newest first.
///
/// The feed reads the store independently; it shares no materialized state
/// with the listing pipeline.
pub async fn collect_entries(config: &SiteConfig) -> Result<Vec<FeedEntry>> {
    let posts = buffer(ContentStore::scan(config, false)?).await?;

    let mut entries: Vec<FeedEntry> = posts
        .iter()
        .map(|post| FeedEntry::from_summary(post, config))
        .collect();
    entries.sort_by_key(|entry| {
        Reverse(
            DateTimeUtc::parse(&entry.date)
                .map(DateTimeUtc::unix_timestamp)
                .unwrap_or(i64::MIN),
        )
    });

    Ok(entries)
}

/// Full URL for an entry: site base + permalink.
pub(super) fn entry_url(entry: &FeedEntry, config: &SiteConfig) -> String {
    let base_url = config
        .site
        .info
        .url
        .as_deref()
        .unwrap_or_default()
        .trim_end_matches('/');
    format!("{}{}", base_url, entry.permalink)
}
