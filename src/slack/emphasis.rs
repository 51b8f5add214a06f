//! Header emphasis detection.
//!
//! Headers keep their original emphasis markers in `raw`. The markers are
//! matched against an ordered rule table and the first match decides how the
//! header is wrapped for Slack.

use regex::Regex;
use std::sync::LazyLock;

/// Slack emphasis applied to a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `*text*`
    Bold,
    /// `*_text_*`
    BoldItalic,
}

impl Emphasis {
    /// Wrap `text` in this emphasis.
    pub fn wrap(self, text: &str) -> String {
        match self {
            Emphasis::Bold => format!("*{}*", text),
            Emphasis::BoldItalic => format!("*_{}_*", text),
        }
    }
}

/// Ordered (pattern, emphasis) rules. Capture group 1 is the header text.
///
/// Anchored patterns must cover the whole raw header; the unanchored ones
/// take the first span found and drop everything around it. Single
/// asterisks map to bold+italic.
static EMPHASIS_RULES: LazyLock<Vec<(Regex, Emphasis)>> = LazyLock::new(|| {
    [
        (r"^\*{3}(.+?)\*{3}$", Emphasis::BoldItalic),
        (r"^\*{2}(.+?)\*{2}$", Emphasis::Bold),
        (r"^\*(.+?)\*$", Emphasis::BoldItalic),
        (r"\*{3}(.+?)\*{3}", Emphasis::BoldItalic),
        (r"\*{2}(.+?)\*{2}", Emphasis::Bold),
        (r"\*(.+?)\*", Emphasis::BoldItalic),
    ]
    .into_iter()
    .map(|(pattern, emphasis)| (Regex::new(pattern).unwrap(), emphasis))
    .collect()
});

/// Find the emphasis and inner text for a raw header.
///
/// Returns `None` when `raw` carries no recognizable emphasis.
pub fn detect_emphasis(raw: &str) -> Option<(Emphasis, &str)> {
    EMPHASIS_RULES.iter().find_map(|(pattern, emphasis)| {
        pattern
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|inner| (*emphasis, inner.as_str()))
    })
}

/// Format a header for Slack.
///
/// Falls back to bolding `value` with every asterisk removed when `raw` has
/// no emphasis markers.
///
/// # Examples
///
/// ```
/// use md2slack::slack::format_header;
///
/// assert_eq!(format_header("**Title**", "Title"), "*Title*");
/// assert_eq!(format_header("***Title***", "Title"), "*_Title_*");
/// assert_eq!(format_header("Title", "Title"), "*Title*");
/// ```
pub fn format_header(raw: &str, value: &str) -> String {
    match detect_emphasis(raw) {
        Some((emphasis, inner)) => emphasis.wrap(inner),
        None => Emphasis::Bold.wrap(&value.replace('*', "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_bold_italic() {
        assert_eq!(
            detect_emphasis("***Title***"),
            Some((Emphasis::BoldItalic, "Title"))
        );
    }

    #[test]
    fn test_full_bold() {
        assert_eq!(detect_emphasis("**Title**"), Some((Emphasis::Bold, "Title")));
    }

    #[test]
    fn test_full_single_asterisk_is_bold_italic() {
        assert_eq!(
            detect_emphasis("*Title*"),
            Some((Emphasis::BoldItalic, "Title"))
        );
    }

    #[test]
    fn test_embedded_span_keeps_only_inner_text() {
        assert_eq!(format_header("Intro **Setup** guide", "Intro Setup guide"), "*Setup*");
        assert_eq!(format_header("a ***b*** c", "a b c"), "*_b_*");
        assert_eq!(format_header("see *this* now", "see this now"), "*_this_*");
    }

    #[test]
    fn test_first_embedded_span_wins() {
        assert_eq!(format_header("x **one** y **two**", "x one y two"), "*one*");
    }

    #[test]
    fn test_three_asterisks_checked_before_two() {
        // A full bold match would also apply, but bold+italic is tried first.
        assert_eq!(format_header("***both***", "both"), "*_both_*");
    }

    #[test]
    fn test_fallback_strips_asterisks_from_value() {
        assert_eq!(format_header("", "Plain ** title *"), "*Plain  title *");
        assert_eq!(format_header("No emphasis", "No emphasis"), "*No emphasis*");
    }

    #[test]
    fn test_lone_asterisks_do_not_match() {
        assert_eq!(detect_emphasis("**"), None);
        assert_eq!(detect_emphasis("a * b"), None);
    }
}
