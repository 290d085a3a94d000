//! Atom 1.0 feed generation.

use anyhow::{Ok, Result};
use atom_syndication::{
    Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder,
    Person, PersonBuilder, Text,
};

use super::common::{FeedEntry, collect_entries, entry_url};
use super::write_feed;
use crate::config::SiteConfig;
use crate::utils::date::DateTimeUtc;

/// Build Atom 1.0 feed.
pub async fn build_atom(config: &SiteConfig) -> Result<()> {
    let entries = collect_entries(config).await?;
    let xml = into_xml(&entries, config)?;
    write_feed(xml, config).await
}

fn into_xml(feed_entries: &[FeedEntry], config: &SiteConfig) -> Result<String> {
    let base_url = config
        .site
        .info
        .url
        .as_deref()
        .unwrap_or_default()
        .trim_end_matches('/');

    let entries: Vec<Entry> = feed_entries
        .iter()
        .filter_map(|entry| entry_to_atom_entry(entry, config))
        .collect();

    // Feed updated field = most recent post date, so regeneration over an
    // unchanged corpus stays byte-identical.
    // Compare by RFC3339 strings (lexicographically sortable for ISO dates)
    let updated_str = feed_entries
        .iter()
        .filter_map(|entry| DateTimeUtc::parse(&entry.date).map(|dt| dt.to_rfc3339()))
        .max()
        .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string());

    let updated: FixedDateTime = updated_str
        .parse()
        .unwrap_or_else(|_| FixedDateTime::default());

    // Build author
    let author: Person = PersonBuilder::default()
        .name(config.site.info.author.clone())
        .email(Some(config.site.info.email.clone()))
        .build();

    // Build self link
    let self_link: Link = LinkBuilder::default()
        .href(format!("{}/{}", base_url, config.build.feed.path.display()))
        .rel("self".to_string())
        .mime_type(Some("application/atom+xml".to_string()))
        .build();

    // Build alternate link
    let alternate_link: Link = LinkBuilder::default()
        .href(base_url.to_string())
        .rel("alternate".to_string())
        .build();

    let feed: Feed = FeedBuilder::default()
        .title(Text::plain(config.site.info.title.clone()))
        .id(base_url)
        .updated(updated)
        .authors(vec![author])
        .links(vec![self_link, alternate_link])
        .subtitle(Some(Text::plain(config.site.info.description.clone())))
        .generator(Some(
            GeneratorBuilder::default()
                .value("chronica")
                .uri(Some("https://github.com/chronica-ssg/chronica".to_string()))
                .build(),
        ))
        .lang(Some(config.site.info.language.clone()))
        .entries(entries)
        .build();

    Ok(feed.to_string())
}

fn entry_to_atom_entry(entry: &FeedEntry, config: &SiteConfig) -> Option<Entry> {
    let updated_str = DateTimeUtc::parse(&entry.date)?.to_rfc3339();
    let updated: FixedDateTime = updated_str.parse().ok()?;

    let link = entry_url(entry, config);

    // Build entry link
    let entry_link: Link = LinkBuilder::default()
        .href(&link)
        .rel("alternate".to_string())
        .build();

    // Build author if available
    let authors: Vec<Person> = entry
        .author
        .as_ref()
        .map(|name| vec![PersonBuilder::default().name(name.clone()).build()])
        .unwrap_or_default();

    Some(
        EntryBuilder::default()
            .title(Text::plain(entry.title.clone()))
            .id(&link)
            .updated(updated)
            .links(vec![entry_link])
            .summary(entry.summary.clone().map(Text::plain))
            .authors(authors)
            .build(),
    )
}
