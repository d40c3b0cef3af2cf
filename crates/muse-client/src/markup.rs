//! Minimal inline markup for model text output

use std::sync::OnceLock;

use regex::Regex;

/// Replace `**span**` markup with emphasis tags
///
/// The match is non-greedy so adjacent spans stay separate. Spans do
/// not cross line boundaries; anything unmatched passes through
/// unchanged.
pub fn render_bold(text: &str) -> String {
    fn bold() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("must be valid regex"))
    }

    bold().replace_all(text, "<strong>$1</strong>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_span() {
        assert_eq!(render_bold("a **bold** word"), "a <strong>bold</strong> word");
    }

    #[test]
    fn adjacent_spans_stay_separate() {
        assert_eq!(
            render_bold("**one** and **two**"),
            "<strong>one</strong> and <strong>two</strong>"
        );
    }

    #[test]
    fn unterminated_markers_pass_through() {
        assert_eq!(render_bold("**open ended"), "**open ended");
    }

    #[test]
    fn empty_span_is_not_a_match() {
        assert_eq!(render_bold("****"), "****");
    }

    #[test]
    fn spans_do_not_cross_lines() {
        assert_eq!(render_bold("**a\nb**"), "**a\nb**");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(render_bold("nothing to do"), "nothing to do");
    }
}
