//! Canonical video id extraction.
//!
//! Watch URLs come in many shapes (`watch?v=`, short-link, embed, shorts,
//! live). All of them carry the same 11-character id, which is what the
//! renderer links against. Extraction is best-effort: a URL we don't
//! recognize yields `None`, not an error.

use lazy_regex::regex_captures;

/// Extract the 11-character video id from a watch URL, if present.
pub fn video_id(url: &str) -> Option<String> {
    regex_captures!(
        r"(?:youtube\.com/(?:watch\?(?:[^#\s]*&)?v=|embed/|shorts/|live/|v/)|youtu\.be/)([0-9A-Za-z_-]{11})",
        url
    )
    .map(|(_, id)| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_urls() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            video_id("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ&t=10"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_and_embed_urls() {
        assert_eq!(
            video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_unrecognized_urls() {
        assert_eq!(video_id("https://example.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(video_id("not a url at all"), None);
        assert_eq!(video_id("https://www.youtube.com/watch?v=short"), None);
    }
}
