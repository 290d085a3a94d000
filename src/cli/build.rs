//! Build command: one full archive build.
//!
//! Feed first, then the listing - the feed completes (or fails) strictly
//! before the listing pipeline reads its own copy of the corpus.

use anyhow::Result;

use crate::archive;
use crate::config::SiteConfig;
use crate::generator::listing;
use crate::log;
use crate::utils::plural::plural_s;

/// Build the site: publish feed, aggregate posts, write listing page data.
pub async fn build_site(config: &SiteConfig) -> Result<()> {
    let years = archive::aggregate(config).await?;

    let posts: usize = years.iter().map(|group| group.items.len()).sum();
    let year_count = years.len();

    let data = listing::listing_data(years, config);
    listing::write_listing(&data, config).await?;

    log!(
        "build";
        "{} post{} across {} year{}",
        posts, plural_s(posts), year_count, plural_s(year_count)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_post(dir: &Path, name: &str, frontmatter: &str) {
        let content = format!("---\n{frontmatter}\n---\n\nSome body text here.");
        fs::write(dir.join(name), content).unwrap();
    }

    fn site_fixture() -> (tempfile::TempDir, SiteConfig) {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir(&content).unwrap();

        write_post(&content, "a.md", "title: A\ndate: 2024-01-01");
        write_post(&content, "b.md", "title: B\ndate: 2023-06-15");
        write_post(&content, "c.md", "title: C\ndate: 2024-06-01");

        let mut config = SiteConfig::default();
        config.build.content = content;
        config.build.output = dir.path().join("public");
        (dir, config)
    }

    #[tokio::test]
    async fn test_build_writes_year_grouped_listing() {
        let (_dir, config) = site_fixture();
        build_site(&config).await.unwrap();

        let raw = fs::read_to_string(config.build.output.join("blog/index.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let years = json["years"].as_array().unwrap();
        assert_eq!(years.len(), 2);
        assert_eq!(years[0]["year"], 2024);
        assert_eq!(years[0]["items"][0]["id"], "c"); // 2024-06-01 first
        assert_eq!(years[0]["items"][1]["id"], "a");
        assert_eq!(years[1]["year"], 2023);
        assert_eq!(years[1]["items"][0]["id"], "b");
    }

    #[tokio::test]
    async fn test_build_publishes_feed_when_enabled() {
        let (_dir, mut config) = site_fixture();
        config.build.feed.enable = true;
        config.site.info.title = "Blog".into();
        config.site.info.description = "Posts".into();
        config.site.info.url = Some("https://example.com".into());

        build_site(&config).await.unwrap();

        let feed = fs::read_to_string(config.build.output.join("blog/rss.xml")).unwrap();
        assert!(feed.contains("<rss"));
        assert!(feed.contains("https://example.com/blog/c/"));
    }

    #[tokio::test]
    async fn test_build_is_idempotent() {
        let (_dir, mut config) = site_fixture();
        config.build.feed.enable = true;
        config.site.info.title = "Blog".into();
        config.site.info.description = "Posts".into();
        config.site.info.url = Some("https://example.com".into());

        build_site(&config).await.unwrap();
        let listing_once = fs::read(config.build.output.join("blog/index.json")).unwrap();
        let feed_once = fs::read(config.build.output.join("blog/rss.xml")).unwrap();

        build_site(&config).await.unwrap();
        let listing_twice = fs::read(config.build.output.join("blog/index.json")).unwrap();
        let feed_twice = fs::read(config.build.output.join("blog/rss.xml")).unwrap();

        assert_eq!(listing_once, listing_twice);
        assert_eq!(feed_once, feed_twice);
    }

    #[tokio::test]
    async fn test_empty_corpus_builds_empty_listing() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir(&content).unwrap();

        let mut config = SiteConfig::default();
        config.build.content = content;
        config.build.output = dir.path().join("public");

        build_site(&config).await.unwrap();

        let raw = fs::read_to_string(config.build.output.join("blog/index.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(json["years"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_date_aborts_build() {
        let (_dir, config) = site_fixture();
        write_post(
            &config.build.content,
            "bad.md",
            "title: Bad\ndate: someday",
        );

        let err = build_site(&config).await.unwrap_err();
        assert!(err.to_string().contains("unparseable date"));
        // No partial listing is rendered
        assert!(!config.build.output.join("blog/index.json").exists());
    }
}
