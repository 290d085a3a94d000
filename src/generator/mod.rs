//! Content generators for static output.
//!
//! Generates the build's side-effect files from aggregated post metadata:
//!
//! - **Feed**: RSS/Atom feed for blog readers (`rss.xml`, `atom.xml`)
//! - **Listing**: year-grouped page data for the blog index page
//!
//! Both generators read pre-collected metadata; neither re-scans what the
//! other produced.

pub mod feed;
pub mod listing;

use std::borrow::Cow;

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_xml_basic() {
        let xml = br#"<?xml version="1.0"?>
<root>
  <item>Hello</item>
</root>"#;
        let result = minify_xml(xml, true);

        assert_eq!(
            &*result,
            br#"<?xml version="1.0"?><root><item>Hello</item></root>"#
        );
    }

    #[test]
    fn test_minify_xml_removes_empty_lines() {
        let xml = b"<root>\n\n  <item/>\n\n</root>";
        let result = minify_xml(xml, true);

        assert_eq!(&*result, b"<root><item/></root>");
    }

    #[test]
    fn test_minify_xml_disabled() {
        let xml = b"<root>\n  <item/>\n</root>";
        let not_minified = minify_xml(xml, false);
        assert_eq!(&*not_minified, xml.as_slice());
    }
}
