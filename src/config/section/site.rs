//! `[site]` configuration: site metadata and navigation.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// `[site]` section: info plus navigation entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    pub info: SiteInfoConfig,
    /// Navigation entries resolved per page through the link router.
    pub nav: Vec<NavEntry>,
}

/// Site metadata for feed generation and the listing page data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Author email.
    pub email: String,

    /// Site description.
    pub description: String,

    /// Site URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Language code (e.g., "en", "zh-Hans").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            email: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `feed_enabled`, `url` must be set
    /// - `url` must be a valid URL with http(s) scheme and host
    pub fn validate(&self, feed_enabled: bool, diag: &mut ConfigDiagnostics) {
        // Feed requires url
        if feed_enabled && self.url.is_none() {
            diag.error_with_hint(
                "site.info.url",
                "build.feed.enable is set but site.info.url is not configured",
                "set site.info.url, e.g.: \"https://example.com\"",
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            "site.info.url",
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            "site.info.url",
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        "site.info.url",
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}

/// One `[[site.nav]]` entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavEntry {
    /// Display label.
    pub label: String,
    /// Destination; internal route or absolute external URL.
    pub href: String,
    /// Require an exact route match for "active" highlighting
    /// (default: segment-prefix matching).
    pub active_exact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(info: &SiteInfoConfig, feed_enabled: bool) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        info.validate(feed_enabled, &mut diag);
        diag.into_result()
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.info.language, "en");
        assert!(config.site.info.url.is_none());
        assert!(config.site.nav.is_empty());
    }

    #[test]
    fn test_nav_entries() {
        let config = test_parse_config(
            "[[site.nav]]\nlabel = \"Blog\"\nhref = \"/blog\"\n\n\
             [[site.nav]]\nlabel = \"Home\"\nhref = \"/\"\nactive_exact = true",
        );
        assert_eq!(config.site.nav.len(), 2);
        assert_eq!(config.site.nav[0].href, "/blog");
        assert!(!config.site.nav[0].active_exact);
        assert!(config.site.nav[1].active_exact);
    }

    #[test]
    fn test_feed_requires_url() {
        let info = SiteInfoConfig::default();
        assert!(validate(&info, true).is_err());
        assert!(validate(&info, false).is_ok());
    }

    #[test]
    fn test_url_must_be_http() {
        let info = SiteInfoConfig {
            url: Some("ftp://example.com".into()),
            ..Default::default()
        };
        assert!(validate(&info, false).is_err());

        let info = SiteInfoConfig {
            url: Some("https://example.com".into()),
            ..Default::default()
        };
        assert!(validate(&info, true).is_ok());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let info = SiteInfoConfig {
            url: Some("not a url".into()),
            ..Default::default()
        };
        assert!(validate(&info, false).is_err());
    }
}
