//! Read-time estimation from markdown body length.

use pulldown_cmark::{Event, Parser};

/// Average adult reading speed used for the estimate.
const WORDS_PER_MINUTE: u64 = 200;

/// Estimate read time for a markdown body, in milliseconds.
///
/// Counts words across text and inline-code events, so markup syntax
/// (headings markers, link urls, emphasis) never inflates the estimate.
pub fn estimate_read_time_ms(markdown: &str) -> u64 {
    let words: u64 = Parser::new(markdown)
        .filter_map(|event| match event {
            Event::Text(text) | Event::Code(text) => {
                Some(text.split_whitespace().count() as u64)
            }
            _ => None,
        })
        .sum();

    words * 60_000 / WORDS_PER_MINUTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body() {
        assert_eq!(estimate_read_time_ms(""), 0);
    }

    #[test]
    fn test_word_count_scaling() {
        // 200 words at 200 wpm is one minute
        let body = "word ".repeat(200);
        assert_eq!(estimate_read_time_ms(&body), 60_000);

        let body = "word ".repeat(100);
        assert_eq!(estimate_read_time_ms(&body), 30_000);
    }

    #[test]
    fn test_markup_not_counted() {
        // Heading markers and emphasis contribute no words of their own
        let plain = estimate_read_time_ms("hello world");
        let marked = estimate_read_time_ms("# **hello** _world_");
        assert_eq!(plain, marked);
    }

    #[test]
    fn test_link_url_not_counted() {
        let linked = estimate_read_time_ms("[hello](https://example.com/a/very/long/url)");
        assert_eq!(linked, estimate_read_time_ms("hello"));
    }

    #[test]
    fn test_inline_code_counted() {
        assert_eq!(
            estimate_read_time_ms("run `cargo build` now"),
            estimate_read_time_ms("run cargo build now")
        );
    }
}
