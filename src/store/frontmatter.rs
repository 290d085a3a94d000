//! Frontmatter extraction for markdown posts.
//!
//! Posts open with YAML-like (`---`) or TOML (`+++`) frontmatter. Standard
//! fields map onto [`PostMeta`]; anything else lands in `extra` as raw JSON.

use anyhow::Result;
use serde::Deserialize;

use crate::post::JsonMap;

/// Deserialize tags, treating `null` as empty vec
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Raw post metadata parsed from frontmatter.
///
/// | Field     | Type          | Description                          |
/// |-----------|---------------|--------------------------------------|
/// | `title`   | `String`      | Post title                           |
/// | `date`    | `String`      | Publication date                     |
/// | `author`  | `String`      | Author name                          |
/// | `summary` | `String`      | Brief description                    |
/// | `draft`   | `bool`        | Draft status (default: false)        |
/// | `tags`    | `Vec<String>` | Categorization tags                  |
/// | `slug`    | `String`      | Custom identifier (overrides file stem) |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PostMeta {
    pub title: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    pub slug: Option<String>,
    /// Additional user-defined fields (raw JSON).
    #[serde(flatten, default)]
    pub extra: JsonMap,
}

impl Default for PostMeta {
    fn default() -> Self {
        Self {
            title: None,
            date: None,
            author: None,
            summary: None,
            draft: false,
            tags: Vec::new(),
            slug: None,
            extra: JsonMap::new(),
        }
    }
}

/// Extract frontmatter and return (metadata, body).
pub fn extract_frontmatter(content: &str) -> Result<Option<(PostMeta, &str)>> {
    match detect_frontmatter(content) {
        Some((fm, body, is_toml)) => {
            let meta = if is_toml {
                parse_toml(fm)?
            } else {
                parse_yaml_like(fm)
            };
            Ok(Some((meta, body)))
        }
        None => Ok(None),
    }
}

/// Parse simple YAML-like frontmatter (key: value).
///
/// Supports standard fields (title, date, etc.) and custom fields in `extra`.
fn parse_yaml_like(content: &str) -> PostMeta {
    let mut meta = PostMeta::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            let key_lower = key.trim().to_lowercase();
            let value = value.trim();

            match key_lower.as_str() {
                "title" => meta.title = Some(value.to_string()),
                "date" => meta.date = Some(value.to_string()),
                "author" => meta.author = Some(value.to_string()),
                "summary" => meta.summary = Some(value.to_string()),
                "slug" => meta.slug = Some(value.to_string()),
                "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
                "tags" => {
                    meta.tags = value
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                }
                _ => {
                    // Custom field -> extra (preserve original key case)
                    let key = key.trim().to_string();
                    meta.extra.insert(key, parse_yaml_value(value));
                }
            }
        }
    }

    meta
}

/// Parse TOML frontmatter.
fn parse_toml(content: &str) -> Result<PostMeta> {
    toml::from_str(content).map_err(|e| anyhow::anyhow!("invalid TOML frontmatter: {}", e))
}

/// Detect and extract frontmatter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start();

    // YAML: ---...---
    if trimmed.starts_with("---")
        && let Some(end) = trimmed[3..].find("\n---")
    {
        let fm = trimmed[3..3 + end].trim();
        let body = trimmed[3 + end + 4..].trim_start_matches('\n');
        return Some((fm, body, false));
    }

    // TOML: +++...+++
    if trimmed.starts_with("+++")
        && let Some(end) = trimmed[3..].find("\n+++")
    {
        let fm = trimmed[3..3 + end].trim();
        let body = trimmed[3 + end + 4..].trim_start_matches('\n');
        return Some((fm, body, true));
    }

    None
}

/// Parse a YAML-like value string to JSON value
///
/// Supports:
/// - Booleans: `true`, `false`
/// - Null: `null`, `~`
/// - Numbers: `123`, `3.14`
/// - Arrays: `a, b, c` -> `["a", "b", "c"]`
/// - Strings: everything else
fn parse_yaml_value(s: &str) -> serde_json::Value {
    use serde_json::Value;

    // Boolean
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    // Null
    if s.is_empty() || s.eq_ignore_ascii_case("null") || s == "~" {
        return Value::Null;
    }

    // Number (integer)
    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }

    // Number (float)
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }

    // Comma-separated array (if contains comma)
    if s.contains(',') {
        let arr: Vec<Value> = s
            .split(',')
            .map(|item| Value::String(item.trim().to_string()))
            .filter(|v| !matches!(v, Value::String(s) if s.is_empty()))
            .collect();
        return Value::Array(arr);
    }

    // Default: string
    Value::String(s.to_string())
}
