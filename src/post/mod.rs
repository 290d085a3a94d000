//! Post metadata types shared by the store, archive, and generators.

use serde::{Deserialize, Serialize};

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Lightweight reference to a full article, carrying only listing-relevant
/// fields.
///
/// # Standard Fields
///
/// | Field          | Type     | Description                              |
/// |----------------|----------|------------------------------------------|
/// | `id`           | `String` | Unique identifier; builds the article route |
/// | `title`        | `String` | Display title                            |
/// | `date`         | `String` | Publication date (`YYYY-MM-DD` or RFC 3339 `Z`) |
/// | `read_time_ms` | `u64`    | Estimated read time in milliseconds      |
///
/// Optional fields are omitted from serialized output entirely when unset,
/// never emitted as `null`. Free-form frontmatter fields are captured in
/// `extra` as raw JSON; the archive sanitizer strips explicit nulls there
/// before the summary crosses the serialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub date: String,
    pub read_time_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Additional user-defined fields (raw JSON).
    #[serde(flatten, default)]
    pub extra: JsonMap,
}

impl PostSummary {
    /// Site-relative route to the full article under the listing base.
    pub fn route_under(&self, base: &crate::core::UrlPath) -> String {
        format!("{}{}/", base.as_str(), self.id)
    }
}
