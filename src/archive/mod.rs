//! Post aggregation: the build-time listing pipeline.
//!
//! One aggregation run per page build:
//!
//! 1. Republish the feed (a failure here aborts everything after).
//! 2. Stream post summaries from the content store through the buffer.
//! 3. Sanitize each summary for the serialization boundary.
//! 4. Sort newest-first by the date's epoch timestamp (stable).
//! 5. Group by UTC calendar year.
//! 6. Order the year groups descending.
//!
//! The pipeline owns its summaries for the duration of one invocation;
//! nothing is retained or shared across runs.

mod buffer;
mod group;
mod sanitize;

pub use buffer::{Sequence, buffer};
pub use group::{Group, group_by};
pub use sanitize::{sanitize, strip_nulls};

use anyhow::{Context, Result};
use serde::Serialize;
use std::cmp::Reverse;

use crate::config::SiteConfig;
use crate::generator::feed;
use crate::post::PostSummary;
use crate::store::ContentStore;
use crate::utils::date::DateTimeUtc;

/// Posts published in one calendar year, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearGroup {
    pub year: u16,
    pub items: Vec<PostSummary>,
}

/// Run one full aggregation for a page build.
///
/// The feed reads the corpus independently of the listing; both may observe
/// the same store state, but the feed completes (or fails) strictly first.
pub async fn aggregate(config: &SiteConfig) -> Result<Vec<YearGroup>> {
    feed::publish(config).await?;
    let dated = load_sorted(config, config.build.include_drafts).await?;
    Ok(group_by_year(dated))
}

/// Steps shared with `query`: stream, buffer, sanitize, and sort the corpus.
pub async fn collect_posts(config: &SiteConfig, include_drafts: bool) -> Result<Vec<PostSummary>> {
    let dated = load_sorted(config, include_drafts).await?;
    Ok(dated.into_iter().map(|(_, post)| post).collect())
}

async fn load_sorted(
    config: &SiteConfig,
    include_drafts: bool,
) -> Result<Vec<(DateTimeUtc, PostSummary)>> {
    let store = ContentStore::scan(config, include_drafts)?;
    let mut posts = buffer(store).await?;
    for post in &mut posts {
        sanitize(post);
    }
    sort_by_date(posts)
}

/// Sort newest-first by epoch timestamp; stable, so posts with equal dates
/// keep their emission order. A date that fails to parse is fatal.
fn sort_by_date(posts: Vec<PostSummary>) -> Result<Vec<(DateTimeUtc, PostSummary)>> {
    let mut dated = Vec::with_capacity(posts.len());
    for post in posts {
        let dt = DateTimeUtc::parse(&post.date)
            .with_context(|| format!("post '{}': unparseable date '{}'", post.id, post.date))?;
        dated.push((dt, post));
    }
    dated.sort_by_key(|(dt, _)| Reverse(dt.unix_timestamp()));
    Ok(dated)
}

/// Group sorted posts by UTC calendar year, years descending.
fn group_by_year(dated: Vec<(DateTimeUtc, PostSummary)>) -> Vec<YearGroup> {
    let mut groups = group_by(dated, |(dt, _)| dt.year);
    groups.sort_by_key(|group| Reverse(group.key));
    groups
        .into_iter()
        .map(|group| YearGroup {
            year: group.key,
            items: group.items.into_iter().map(|(_, post)| post).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::JsonMap;

    fn make_post(id: &str, date: &str) -> PostSummary {
        PostSummary {
            id: id.into(),
            title: id.to_uppercase(),
            date: date.into(),
            read_time_ms: 60_000,
            author: None,
            summary: None,
            tags: Vec::new(),
            extra: JsonMap::new(),
        }
    }

    fn sort_and_group(posts: Vec<PostSummary>) -> Vec<YearGroup> {
        group_by_year(sort_by_date(posts).unwrap())
    }

    #[test]
    fn test_years_descending_items_descending() {
        let groups = sort_and_group(vec![
            make_post("a", "2024-01-01"),
            make_post("b", "2023-06-15"),
            make_post("c", "2024-06-01"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].year, 2024);
        assert_eq!(groups[0].items[0].id, "c"); // 2024-06-01
        assert_eq!(groups[0].items[1].id, "a"); // 2024-01-01
        assert_eq!(groups[1].year, 2023);
        assert_eq!(groups[1].items[0].id, "b");
    }

    #[test]
    fn test_equal_dates_keep_emission_order() {
        let groups = sort_and_group(vec![
            make_post("first", "2024-03-01"),
            make_post("second", "2024-03-01"),
            make_post("third", "2024-03-01"),
        ]);

        let ids: Vec<&str> = groups[0].items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_corpus_yields_empty_groups() {
        let groups = sort_and_group(Vec::new());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_unparseable_date_is_fatal() {
        let result = sort_by_date(vec![
            make_post("ok", "2024-01-01"),
            make_post("broken", "soonish"),
        ]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("broken"));
        assert!(err.to_string().contains("soonish"));
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let posts = vec![
            make_post("a", "2024-01-01"),
            make_post("b", "2023-06-15"),
            make_post("c", "2024-06-01"),
        ];
        let once = sort_and_group(posts.clone());
        let twice = sort_and_group(posts);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_time_of_day_orders_within_a_date() {
        let groups = sort_and_group(vec![
            make_post("morning", "2024-03-01T08:00:00Z"),
            make_post("evening", "2024-03-01T20:00:00Z"),
        ]);
        assert_eq!(groups[0].items[0].id, "evening");
    }
}
