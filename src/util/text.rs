//! Text truncation for constrained display widths.

/// Shorten `text` to at most `max_chars` characters, ellipsis included.
///
/// Text that already fits is returned unchanged. Otherwise the cut backs
/// off to the last word boundary before the budget so titles don't end
/// mid-word, and a `…` marks the cut.
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    if let Some(space) = cut.rfind(' ') {
        cut.truncate(space);
    }
    let cut = cut.trim_end();

    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(ellipsize("short title", 48), "short title");
        assert_eq!(ellipsize("exactly four", 12), "exactly four");
    }

    #[test]
    fn test_cuts_at_word_boundary() {
        assert_eq!(ellipsize("hello wonderful world", 14), "hello…");
        assert_eq!(ellipsize("one two three four", 12), "one two…");
    }

    #[test]
    fn test_single_long_word() {
        // No boundary to back off to, so the word itself gets cut
        assert_eq!(ellipsize("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_multibyte_chars() {
        let title = "日本語のタイトルがとても長い場合";
        let short = ellipsize(title, 8);
        assert!(short.ends_with('…'));
        assert!(short.chars().count() <= 8);
    }
}

/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The result never exceeds the character budget
        #[test]
        fn ellipsize_respects_budget(text in ".{0,80}", max in 1usize..60) {
            let out = ellipsize(&text, max);
            prop_assert!(out.chars().count() <= max);
        }

        /// Text within budget passes through untouched
        #[test]
        fn ellipsize_preserves_fitting_text(text in "[a-z ]{0,20}") {
            prop_assert_eq!(ellipsize(&text, 20), text);
        }

        /// A truncated result is always marked with an ellipsis
        #[test]
        fn ellipsize_marks_the_cut(text in "[a-z]{30,50}", max in 1usize..20) {
            let out = ellipsize(&text, max);
            prop_assert!(out.ends_with('…'));
        }
    }
}
