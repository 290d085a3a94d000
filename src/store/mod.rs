//! Markdown content store: the article-store read interface.
//!
//! Scanning is eager and deterministic (paths sorted before emission);
//! file reads are the suspension points, one file per yield. The store
//! never mutates content - it is strictly a producer of post summaries.

mod frontmatter;
mod read_time;

pub use frontmatter::{PostMeta, extract_frontmatter};
pub use read_time::estimate_read_time_ms;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;

use crate::archive::Sequence;
use crate::config::SiteConfig;
use crate::post::PostSummary;
use crate::{debug, log};

/// Ordered, suspendable reader over the markdown corpus.
pub struct ContentStore {
    paths: std::vec::IntoIter<PathBuf>,
    include_drafts: bool,
    seen_ids: FxHashSet<String>,
}

impl ContentStore {
    /// Scan the content directory for markdown posts.
    pub fn scan(config: &SiteConfig, include_drafts: bool) -> Result<Self> {
        let content_dir = &config.build.content;
        if !content_dir.is_dir() {
            bail!("content directory '{}' not found", content_dir.display());
        }

        let mut paths = Vec::new();
        collect_markdown(content_dir, &mut paths)?;
        paths.sort();

        Ok(Self {
            paths: paths.into_iter(),
            include_drafts,
            seen_ids: FxHashSet::default(),
        })
    }

    /// Read one file into a summary.
    ///
    /// Returns `Ok(None)` for records unfit for listing (no frontmatter,
    /// missing title or date, skipped draft) - defects of a record, not of
    /// the stream. Duplicate identifiers are a corpus-level defect and fail
    /// the whole read.
    async fn load(&mut self, path: &Path) -> Result<Option<PostSummary>> {
        let source = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read '{}'", path.display()))?;

        let Some((meta, body)) = extract_frontmatter(&source)? else {
            debug!("store"; "skipping '{}': no frontmatter", path.display());
            return Ok(None);
        };

        if meta.draft && !self.include_drafts {
            debug!("store"; "skipping draft '{}'", path.display());
            return Ok(None);
        }

        let (Some(title), Some(date)) = (meta.title, meta.date) else {
            log!("store"; "skipping '{}': missing title or date", path.display());
            return Ok(None);
        };

        let id = match meta.slug {
            Some(slug) => slug,
            None => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        if !self.seen_ids.insert(id.clone()) {
            bail!("duplicate post id '{}' at '{}'", id, path.display());
        }

        Ok(Some(PostSummary {
            id,
            title,
            date,
            read_time_ms: estimate_read_time_ms(body),
            author: meta.author,
            summary: meta.summary,
            tags: meta.tags,
            extra: meta.extra,
        }))
    }
}

impl Sequence for ContentStore {
    type Item = PostSummary;

    async fn next(&mut self) -> Result<Option<PostSummary>> {
        while let Some(path) = self.paths.next() {
            if let Some(post) = self.load(&path).await? {
                return Ok(Some(post));
            }
        }
        Ok(None)
    }
}

/// Collect `*.md` files under `dir`, recursively.
fn collect_markdown(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to scan '{}'", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            collect_markdown(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            out.push(path);
        }
    }
    Ok(())
}
