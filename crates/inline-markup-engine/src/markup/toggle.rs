use serde::{Deserialize, Serialize};

use super::{kinds::MarkupKind, span::Span, state::enclosing_span};
use crate::editing::selection::{SelectionError, SelectionRange};

/// Switches for the collapsed-cursor removal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TogglePolicy {
    /// Remove the enclosing delimiters when toggling with a collapsed cursor
    /// inside a span. When off, toggling there only refocuses the host.
    pub commit_cursor_unwrap: bool,
    /// Apply the collapsed-cursor removal to highlight spans as well as bold.
    pub highlight_cursor_unwrap: bool,
}

impl Default for TogglePolicy {
    fn default() -> Self {
        Self {
            commit_cursor_unwrap: true,
            highlight_cursor_unwrap: false,
        }
    }
}

impl TogglePolicy {
    fn unwraps_at_cursor(&self, kind: MarkupKind) -> bool {
        match kind {
            MarkupKind::Bold => self.commit_cursor_unwrap,
            MarkupKind::Highlight => self.commit_cursor_unwrap && self.highlight_cursor_unwrap,
        }
    }
}

/// What a toggle did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToggleOutcome {
    /// The selection was bracketed with delimiters.
    Wrapped,
    /// The selection started and ended with delimiters, which were removed.
    Stripped,
    /// The span enclosing a collapsed cursor lost its delimiters.
    Unwrapped,
    /// Nothing to toggle.
    Unchanged,
}

/// A single text replacement that performs a toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TogglePlan {
    pub outcome: ToggleOutcome,
    /// Byte range of the buffer to replace.
    pub replace: Span,
    /// Text that replaces `replace`.
    pub insert: String,
    /// Selection the host should show once the replacement is committed.
    pub selection_after: SelectionRange,
}

/// Works out how toggling `kind` at `selection` changes `text`.
///
/// - Non-empty selection: strip the delimiters if the selected text starts and
///   ends with them, otherwise wrap it. The cursor lands after the replacement.
/// - Collapsed cursor inside a span: remove both delimiters of the enclosing
///   span (subject to `policy`), keeping the cursor on the same character.
/// - Collapsed cursor outside any span: `Ok(None)`.
///
/// Errors only when `selection` cannot be sliced out of `text`.
pub fn plan_toggle(
    text: &str,
    selection: SelectionRange,
    kind: MarkupKind,
    policy: &TogglePolicy,
) -> Result<Option<TogglePlan>, SelectionError> {
    let selected = selection.slice(text)?;
    let delim = kind.delimiter_str();

    if !selection.is_collapsed() {
        let replace = Span::new(selection.start, selection.end);
        let (outcome, insert) = if is_delimited(selected, delim) {
            let inner = &selected[delim.len()..selected.len() - delim.len()];
            (ToggleOutcome::Stripped, inner.to_string())
        } else {
            (
                ToggleOutcome::Wrapped,
                format!("{delim}{selected}{delim}"),
            )
        };
        let selection_after = SelectionRange::cursor(selection.start + insert.len());
        return Ok(Some(TogglePlan {
            outcome,
            replace,
            insert,
            selection_after,
        }));
    }

    let Some(span) = enclosing_span(text, selection.start, kind) else {
        return Ok(None);
    };
    if !policy.unwraps_at_cursor(kind) {
        return Ok(None);
    }

    let inner = &text[span.inner().range()];
    Ok(Some(TogglePlan {
        outcome: ToggleOutcome::Unwrapped,
        replace: span.full(),
        insert: inner.to_string(),
        selection_after: SelectionRange::cursor(selection.start - span.open.len()),
    }))
}

fn is_delimited(selected: &str, delim: &str) -> bool {
    selected.len() >= 2 * delim.len() && selected.starts_with(delim) && selected.ends_with(delim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HELLO: &str = "Hello **world** today";

    fn apply(text: &str, plan: &TogglePlan) -> String {
        let mut out = text.to_string();
        out.replace_range(plan.replace.range(), &plan.insert);
        out
    }

    fn toggle(text: &str, selection: SelectionRange, kind: MarkupKind) -> Option<TogglePlan> {
        plan_toggle(text, selection, kind, &TogglePolicy::default()).unwrap()
    }

    #[test]
    fn wraps_plain_selection() {
        let plan = toggle(HELLO, SelectionRange::new(8, 13), MarkupKind::Bold).unwrap();
        assert_eq!(plan.outcome, ToggleOutcome::Wrapped);
        assert_eq!(apply(HELLO, &plan), "Hello ****world**** today");

        let plan = toggle("word", SelectionRange::new(0, 4), MarkupKind::Bold).unwrap();
        assert_eq!(apply("word", &plan), "**word**");
        assert_eq!(plan.selection_after, SelectionRange::cursor(8));
    }

    #[test]
    fn strips_delimited_selection() {
        let plan = toggle(HELLO, SelectionRange::new(6, 15), MarkupKind::Bold).unwrap();
        assert_eq!(plan.outcome, ToggleOutcome::Stripped);
        assert_eq!(apply(HELLO, &plan), "Hello world today");
        assert_eq!(plan.selection_after, SelectionRange::cursor(11));
    }

    #[test]
    fn strip_then_wrap_round_trips() {
        let plan = toggle("**word**", SelectionRange::new(0, 8), MarkupKind::Bold).unwrap();
        let stripped = apply("**word**", &plan);
        assert_eq!(stripped, "word");

        let plan = toggle(&stripped, SelectionRange::new(0, 4), MarkupKind::Bold).unwrap();
        assert_eq!(apply(&stripped, &plan), "**word**");
    }

    #[test]
    fn highlight_selection_uses_its_own_delimiter() {
        let plan = toggle("mark", SelectionRange::new(0, 4), MarkupKind::Highlight).unwrap();
        assert_eq!(apply("mark", &plan), "==mark==");

        let plan = toggle("==mark==", SelectionRange::new(0, 8), MarkupKind::Highlight).unwrap();
        assert_eq!(apply("==mark==", &plan), "mark");

        // A bold-delimited selection is wrapped, not stripped, by highlight
        let plan = toggle("**word**", SelectionRange::new(0, 8), MarkupKind::Highlight).unwrap();
        assert_eq!(plan.outcome, ToggleOutcome::Wrapped);
        assert_eq!(apply("**word**", &plan), "==**word**==");
    }

    #[test]
    fn short_delimiter_runs_are_wrapped() {
        // "***" starts and ends with "**" but the two delimiters would overlap
        let plan = toggle("***", SelectionRange::new(0, 3), MarkupKind::Bold).unwrap();
        assert_eq!(plan.outcome, ToggleOutcome::Wrapped);
        assert_eq!(plan.insert, "*******");

        let plan = toggle("****", SelectionRange::new(0, 4), MarkupKind::Bold).unwrap();
        assert_eq!(plan.outcome, ToggleOutcome::Stripped);
        assert_eq!(plan.insert, "");
    }

    #[test]
    fn unwraps_span_around_collapsed_cursor() {
        let plan = toggle(HELLO, SelectionRange::cursor(9), MarkupKind::Bold).unwrap();
        assert_eq!(plan.outcome, ToggleOutcome::Unwrapped);
        assert_eq!(plan.replace, Span::new(6, 15));
        assert_eq!(apply(HELLO, &plan), "Hello world today");
        // Cursor stays between 'w' and 'o'
        assert_eq!(plan.selection_after, SelectionRange::cursor(7));
    }

    #[test]
    fn collapsed_cursor_outside_span_is_noop() {
        assert_eq!(toggle(HELLO, SelectionRange::cursor(2), MarkupKind::Bold), None);
        assert_eq!(toggle(HELLO, SelectionRange::cursor(20), MarkupKind::Bold), None);
        assert_eq!(toggle("", SelectionRange::cursor(0), MarkupKind::Bold), None);
    }

    #[test]
    fn legacy_policy_leaves_span_in_place() {
        let policy = TogglePolicy {
            commit_cursor_unwrap: false,
            ..TogglePolicy::default()
        };
        let plan = plan_toggle(HELLO, SelectionRange::cursor(9), MarkupKind::Bold, &policy);
        assert_eq!(plan, Ok(None));
    }

    #[test]
    fn highlight_cursor_unwrap_is_opt_in() {
        let text = "a ==mark== b";

        // Default keeps highlight limited to selection toggles
        assert_eq!(toggle(text, SelectionRange::cursor(5), MarkupKind::Highlight), None);

        let policy = TogglePolicy {
            highlight_cursor_unwrap: true,
            ..TogglePolicy::default()
        };
        let plan = plan_toggle(text, SelectionRange::cursor(5), MarkupKind::Highlight, &policy)
            .unwrap()
            .unwrap();
        assert_eq!(apply(text, &plan), "a mark b");
        assert_eq!(plan.selection_after, SelectionRange::cursor(3));
    }

    #[test]
    fn invalid_selection_is_an_error() {
        let result = plan_toggle(
            "short",
            SelectionRange::new(2, 40),
            MarkupKind::Bold,
            &TogglePolicy::default(),
        );
        assert!(matches!(result, Err(SelectionError::OutOfBounds { .. })));

        let result = plan_toggle(
            "héllo",
            SelectionRange::new(2, 4),
            MarkupKind::Bold,
            &TogglePolicy::default(),
        );
        assert!(matches!(result, Err(SelectionError::NotCharBoundary { .. })));
    }
}
