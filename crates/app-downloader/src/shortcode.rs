use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub static URL_MATCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/(?:reel|p|tv)/(?P<shortcode>[^/?#]+)").expect("Invalid regex")
});

/// Instagram's identifier for a single post, as found in its URL.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Shortcode(String);

impl Shortcode {
    /// Finds the first `/reel/<id>`, `/p/<id>` or `/tv/<id>` segment anywhere in `url`.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        URL_MATCH
            .captures(url)
            .and_then(|x| x.name("shortcode"))
            .map(|x| Self(x.as_str().to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Shortcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(url: &str) -> Option<String> {
        Shortcode::from_url(url).map(|x| x.to_string())
    }

    #[test]
    fn post_reel_and_tv_urls() {
        for kind in ["reel", "p", "tv"] {
            for suffix in ["", "/", "?igsh=MWQ1ZGUxMzBkMA==", "/?utm_source=ig_web", "#comments"] {
                let url = format!("https://www.instagram.com/{kind}/abc123{suffix}");
                assert_eq!(parse(&url).as_deref(), Some("abc123"), "{url}");
            }
        }
    }

    #[test]
    fn match_is_not_anchored() {
        assert_eq!(parse("/p/abc123").as_deref(), Some("abc123"));
        assert_eq!(
            parse("see instagram.com/reel/C9x_-Yz/ later").as_deref(),
            Some("C9x_-Yz")
        );
        assert_eq!(
            parse("https://www.instagram.com/someone/reel/DEF456/").as_deref(),
            Some("DEF456")
        );
    }

    #[test]
    fn leftmost_segment_wins() {
        assert_eq!(
            parse("https://instagram.com/p/first/reel/second").as_deref(),
            Some("first")
        );
        assert_eq!(
            parse("https://instagram.com/reel//p/later").as_deref(),
            Some("later")
        );
    }

    #[test]
    fn urls_without_a_post_segment() {
        for url in [
            "https://example.com/not-instagram",
            "https://www.instagram.com/",
            "https://www.instagram.com/someone/",
            "https://www.instagram.com/reel/",
            "https://www.instagram.com/reels/abc123/",
            "https://www.instagram.com/stories/someone/123/",
            "https://example.com/app/abc",
            "",
        ] {
            assert_eq!(parse(url), None, "{url}");
        }
    }

    #[test]
    fn id_characters_are_not_validated() {
        assert_eq!(
            parse("https://instagram.com/p/ünïcode%20id?x").as_deref(),
            Some("ünïcode%20id")
        );
    }
}
