//! Link routing: external vs internal destinations.
//!
//! Every link destination resolves to exactly one of two rendering
//! strategies, decided once per call:
//!
//! | Target | Example | Rendering |
//! |--------|---------|-----------|
//! | `External` | `https://example.com/x` | plain outbound anchor, tracked, never active |
//! | `Internal` | `/blog/my-post` | client-side route, active-state matching |
//!
//! Classification is pure and total: a string that does not have the
//! absolute-URL shape (scheme + `://` authority marker) routes internally,
//! including malformed input. There is no error case.

use serde::Serialize;

use super::url::UrlPath;

/// Routing decision for one link destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Absolute URL with explicit scheme and authority (https://example.com).
    External(&'a str),
    /// Site-relative route (/blog/my-post).
    Internal(&'a str),
}

impl<'a> LinkTarget<'a> {
    /// Classify a destination string by its shape.
    #[inline]
    pub fn classify(href: &'a str) -> Self {
        if is_absolute_url(href) {
            Self::External(href)
        } else {
            Self::Internal(href)
        }
    }

    #[inline]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// Apply this target's rendering strategy.
    ///
    /// `current` is the route of the page being rendered; `active_exact`
    /// requires an exact route match for active highlighting instead of
    /// the default segment-prefix match. External targets carry the
    /// outbound tracking flag and are never active.
    pub fn view(self, current: &UrlPath, active_exact: bool) -> LinkView {
        match self {
            Self::External(href) => LinkView {
                href: href.to_string(),
                kind: LinkKind::External,
                rel: Some("external noopener"),
                track_outbound: true,
                active: false,
            },
            Self::Internal(href) => LinkView {
                href: href.to_string(),
                kind: LinkKind::Internal,
                rel: None,
                track_outbound: false,
                active: is_active(href, current, active_exact),
            },
        }
    }
}

/// Serialized tag of the chosen strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    External,
    Internal,
}

/// Resolved rendering attributes for one anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub href: String,
    pub kind: LinkKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<&'static str>,
    /// Record an outbound-navigation event on activation.
    pub track_outbound: bool,
    /// Current location matches the destination (internal only).
    pub active: bool,
}

/// Check absolute-URL shape: a scheme token followed by `://`.
///
/// The scheme must be non-empty ASCII alphanumeric / `+` / `-` / `.`.
/// A bare scheme without authority (`mailto:user@example.com`) does not
/// qualify; it routes internally like any other non-absolute string.
#[inline]
pub fn is_absolute_url(link: &str) -> bool {
    link.find("://").is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Does `current` match the destination route?
///
/// Exact: equal paths, trailing slash ignored. Prefix: `current` equals
/// the destination or lies beneath it at a path-segment boundary, so
/// `/blog` matches `/blog/post-1` but never `/blogger`.
fn is_active(dest: &str, current: &UrlPath, exact: bool) -> bool {
    let dest = UrlPath::from_page(dest);
    if exact {
        return current.matches_ignoring_trailing_slash(dest.as_str());
    }

    let base = dest.as_str().trim_end_matches('/');
    if base.is_empty() {
        // Root is a prefix of every route
        return true;
    }
    let cur = current.as_str().trim_end_matches('/');
    cur == base || (cur.len() > base.len() && cur.starts_with(base) && cur.as_bytes()[base.len()] == b'/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_external() {
        assert!(matches!(
            LinkTarget::classify("https://example.com/x"),
            LinkTarget::External("https://example.com/x")
        ));
        assert!(matches!(
            LinkTarget::classify("http://example.com"),
            LinkTarget::External(_)
        ));
        assert!(matches!(
            LinkTarget::classify("ftp://files.example.com/a.tar"),
            LinkTarget::External(_)
        ));
    }

    #[test]
    fn test_classify_internal() {
        assert!(matches!(
            LinkTarget::classify("/blog/my-post"),
            LinkTarget::Internal("/blog/my-post")
        ));
        assert!(matches!(
            LinkTarget::classify("blog/rss.xml"),
            LinkTarget::Internal(_)
        ));
        assert!(matches!(
            LinkTarget::classify("#section"),
            LinkTarget::Internal(_)
        ));
    }

    #[test]
    fn test_classify_no_authority_is_internal() {
        // Scheme without authority lacks the absolute-URL shape
        assert!(matches!(
            LinkTarget::classify("mailto:user@example.com"),
            LinkTarget::Internal(_)
        ));
        assert!(matches!(
            LinkTarget::classify("tel:+1234567890"),
            LinkTarget::Internal(_)
        ));
    }

    #[test]
    fn test_classify_total_on_malformed_input() {
        // No third case: anything without the shape routes internally
        assert!(matches!(LinkTarget::classify(""), LinkTarget::Internal("")));
        assert!(matches!(
            LinkTarget::classify("://missing-scheme"),
            LinkTarget::Internal(_)
        ));
        assert!(matches!(
            LinkTarget::classify("ht tp://spaced"),
            LinkTarget::Internal(_)
        ));
    }

    #[test]
    fn test_classify_is_pure() {
        let a = LinkTarget::classify("https://example.com/x");
        let b = LinkTarget::classify("https://example.com/x");
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com"));
        assert!(is_absolute_url("http://example.com"));
        assert!(!is_absolute_url("mailto:user@example.com"));
        assert!(!is_absolute_url("/about"));
        assert!(!is_absolute_url("./file.txt"));
        assert!(!is_absolute_url("#section"));
    }

    #[test]
    fn test_external_view_never_active() {
        let current = UrlPath::from_page("/blog/");
        let view = LinkTarget::classify("https://example.com/blog").view(&current, false);
        assert_eq!(view.kind, LinkKind::External);
        assert!(view.track_outbound);
        assert_eq!(view.rel, Some("external noopener"));
        assert!(!view.active);
    }

    #[test]
    fn test_internal_view_prefix_active() {
        let current = UrlPath::from_page("/blog/post-1/");
        let view = LinkTarget::classify("/blog").view(&current, false);
        assert_eq!(view.kind, LinkKind::Internal);
        assert!(!view.track_outbound);
        assert!(view.rel.is_none());
        assert!(view.active);
    }

    #[test]
    fn test_internal_view_exact_not_active_on_prefix() {
        let current = UrlPath::from_page("/blog/post-1/");
        let view = LinkTarget::classify("/blog").view(&current, true);
        assert!(!view.active);
    }

    #[test]
    fn test_internal_view_exact_active() {
        let current = UrlPath::from_page("/blog/");
        assert!(LinkTarget::classify("/blog").view(&current, true).active);
        assert!(LinkTarget::classify("/blog/").view(&current, true).active);
    }

    #[test]
    fn test_prefix_respects_segment_boundary() {
        let current = UrlPath::from_page("/blogger/post/");
        assert!(!LinkTarget::classify("/blog").view(&current, false).active);
    }

    #[test]
    fn test_root_prefix_matches_everything() {
        let current = UrlPath::from_page("/blog/post-1/");
        assert!(LinkTarget::classify("/").view(&current, false).active);
        assert!(!LinkTarget::classify("/").view(&current, true).active);
    }

    #[test]
    fn test_active_ignores_fragment() {
        let current = UrlPath::from_page("/about/");
        assert!(LinkTarget::classify("/about#team").view(&current, true).active);
    }

    #[test]
    fn test_view_serialization() {
        let current = UrlPath::from_page("/blog/");
        let view = LinkTarget::classify("/blog").view(&current, true);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "internal");
        assert_eq!(json["active"], true);
        // Unset rel is omitted entirely
        assert!(json.get("rel").is_none());
    }
}
