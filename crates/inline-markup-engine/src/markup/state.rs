use serde::Serialize;

use super::{kinds::MarkupKind, scan, span::MarkupSpan, span::Span};

/// Which inline formats are active at the cursor.
///
/// Recomputed from the buffer on every selection or content change; the host
/// decides how long to keep it (typically one render).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FormattingState {
    pub bold: bool,
    pub highlight: bool,
}

impl FormattingState {
    pub fn is_active(&self, kind: MarkupKind) -> bool {
        match kind {
            MarkupKind::Bold => self.bold,
            MarkupKind::Highlight => self.highlight,
        }
    }
}

/// Every complete span of `kind` in `text`, in buffer order.
///
/// Delimiters are paired left to right: the first occurrence opens, the next
/// closes, and so on. An opener with no closer does not form a span.
pub fn markup_spans(text: &str, kind: MarkupKind) -> Vec<MarkupSpan> {
    let delim = kind.delimiter();
    scan::pairs(text.as_bytes(), delim)
        .map(|(open, close)| MarkupSpan {
            open: Span::new(open, open + delim.len()),
            close: Span::new(close, close + delim.len()),
        })
        .collect()
}

/// Finds the delimiter pair of `kind` enclosing `cursor`, if any.
///
/// Parity check: the cursor is inside when an odd number of delimiters lie
/// wholly before it and the matching closer lies wholly at or after it. A
/// cursor between two complete spans sees an even count and is outside.
/// Offsets past the end of `text` are clamped.
pub fn enclosing_span(text: &str, cursor: usize, kind: MarkupKind) -> Option<MarkupSpan> {
    let delim = kind.delimiter();
    let cursor = cursor.min(text.len());

    scan::pairs(text.as_bytes(), delim)
        .take_while(|&(open, _)| open + delim.len() <= cursor)
        .find(|&(_, close)| close >= cursor)
        .map(|(open, close)| MarkupSpan {
            open: Span::new(open, open + delim.len()),
            close: Span::new(close, close + delim.len()),
        })
}

/// Computes the formatting state at `cursor` for every markup kind.
pub fn compute_formatting_state(text: &str, cursor: usize) -> FormattingState {
    FormattingState {
        bold: enclosing_span(text, cursor, MarkupKind::Bold).is_some(),
        highlight: enclosing_span(text, cursor, MarkupKind::Highlight).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const HELLO: &str = "Hello **world** today";

    #[rstest]
    #[case(2, false)]
    #[case(6, false)]
    #[case(8, true)]
    #[case(9, true)]
    #[case(13, true)]
    #[case(14, false)]
    #[case(15, false)]
    #[case(20, false)]
    #[case(21, false)]
    fn bold_state_in_hello_world(#[case] cursor: usize, #[case] bold: bool) {
        let state = compute_formatting_state(HELLO, cursor);
        assert_eq!(state.bold, bold, "cursor {cursor}");
        assert!(!state.highlight);
    }

    #[test]
    fn enclosing_span_reports_delimiter_offsets() {
        let span = enclosing_span(HELLO, 9, MarkupKind::Bold).unwrap();
        assert_eq!(span.open, Span::new(6, 8));
        assert_eq!(span.close, Span::new(13, 15));
        assert_eq!(&HELLO[span.inner().range()], "world");
    }

    #[test]
    fn span_at_start_of_buffer() {
        let text = "**world** today";
        assert!(compute_formatting_state(text, 4).bold);
        assert!(!compute_formatting_state(text, 0).bold);
    }

    #[test]
    fn no_delimiters_means_no_formatting() {
        let text = "plain text with * and = but no pairs";
        for cursor in 0..=text.len() {
            assert_eq!(
                compute_formatting_state(text, cursor),
                FormattingState::default()
            );
        }
    }

    #[test]
    fn unclosed_opener_is_not_active() {
        assert!(!compute_formatting_state("**dangling", 5).bold);
        assert!(!compute_formatting_state("dangling**", 3).bold);
    }

    #[test]
    fn kinds_are_independent() {
        let text = "**bold** and ==mark==";
        assert_eq!(
            compute_formatting_state(text, 4),
            FormattingState {
                bold: true,
                highlight: false
            }
        );
        assert_eq!(
            compute_formatting_state(text, 17),
            FormattingState {
                bold: false,
                highlight: true
            }
        );
    }

    #[test]
    fn nested_different_kinds_are_both_active() {
        let text = "**bold ==both== bold**";
        let state = compute_formatting_state(text, 11);
        assert!(state.bold);
        assert!(state.highlight);
        assert!(state.is_active(MarkupKind::Bold));
        assert!(state.is_active(MarkupKind::Highlight));
    }

    #[rstest]
    #[case(5, false)]
    #[case(8, false)]
    #[case(11, false)]
    #[case(3, true)]
    #[case(14, true)]
    fn gap_between_spans_is_outside(#[case] cursor: usize, #[case] bold: bool) {
        let text = "**a** plain **b**";
        assert_eq!(compute_formatting_state(text, cursor).bold, bold, "cursor {cursor}");
    }

    #[test]
    fn enclosing_span_agrees_with_markup_spans() {
        let text = "**a** x **b** **dangling";
        let spans = markup_spans(text, MarkupKind::Bold);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].full(), Span::new(8, 13));

        for cursor in 0..=text.len() {
            let expected = spans
                .iter()
                .find(|s| s.open.end <= cursor && cursor <= s.close.start)
                .copied();
            assert_eq!(enclosing_span(text, cursor, MarkupKind::Bold), expected, "cursor {cursor}");
        }
    }

    #[test]
    fn cursor_past_end_is_clamped() {
        assert_eq!(
            compute_formatting_state(HELLO, 500),
            compute_formatting_state(HELLO, HELLO.len())
        );
    }

    #[test]
    fn multibyte_text_does_not_panic_mid_char() {
        let text = "**héllo** 世界";
        for cursor in 0..=text.len() + 1 {
            let _ = compute_formatting_state(text, cursor);
        }
        // 'é' occupies bytes 3..5, offset 4 is mid-char but still inside the span
        assert!(compute_formatting_state(text, 4).bold);
    }
}
