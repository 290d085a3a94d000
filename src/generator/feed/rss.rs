//! RSS 2.0 feed generation.

use anyhow::{Ok, Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::sync::LazyLock;

use super::common::{FeedEntry, collect_entries, entry_url};
use super::write_feed;
use crate::config::SiteConfig;

/// Build RSS 2.0 feed
pub async fn build_rss(config: &SiteConfig) -> Result<()> {
    let entries = collect_entries(config).await?;
    let xml = into_xml(&entries, config)?;
    write_feed(xml, config).await
}

fn into_xml(entries: &[FeedEntry], config: &SiteConfig) -> Result<String> {
    let items: Vec<_> = entries
        .iter()
        .filter_map(|entry| entry_to_rss_item(entry, config))
        .collect();

    let channel = ChannelBuilder::default()
        .title(&config.site.info.title)
        .link(config.site.info.url.as_deref().unwrap_or_default())
        .description(&config.site.info.description)
        .language(Some(config.site.info.language.clone()))
        .generator(Some("chronica".to_string()))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn entry_to_rss_item(entry: &FeedEntry, config: &SiteConfig) -> Option<rss::Item> {
    use crate::utils::date::DateTimeUtc;

    let pub_date = DateTimeUtc::parse(&entry.date).map(DateTimeUtc::to_rfc2822)?;
    let link = entry_url(entry, config);
    let author = normalize_rss_author(entry.author.as_ref(), config);

    Some(
        ItemBuilder::default()
            .title(Some(entry.title.clone()))
            .link(Some(link.clone()))
            .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
            .description(entry.summary.clone())
            .pub_date(Some(pub_date))
            .author(author)
            .build(),
    )
}

/// Normalize author field to RSS format: "email (Name)"
fn normalize_rss_author(author: Option<&String>, config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let author = author?;

    // Check if post author is already valid
    if RE_VALID_AUTHOR.is_match(author) {
        return Some(author.clone());
    }

    // Try site config author
    let site_author = &config.site.info.author;
    if RE_VALID_AUTHOR.is_match(site_author) {
        return Some(site_author.clone());
    }

    // Combine email and author name
    Some(format!("{} ({})", config.site.info.email, site_author))
}
