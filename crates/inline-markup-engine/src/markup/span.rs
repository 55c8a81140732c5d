use serde::Serialize;

/// A byte range `[start, end)` into the text buffer.
///
/// Spans are always derived from the buffer they index, so slicing the buffer
/// with a span reproduces the exact source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// The delimiter pair enclosing a cursor, e.g. both `**` of `**world**`.
///
/// Computed fresh on every check and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkupSpan {
    /// The opening delimiter (`openStart..openEnd`).
    pub open: Span,
    /// The closing delimiter (`closeStart..closeEnd`).
    pub close: Span,
}

impl MarkupSpan {
    /// Whole span including both delimiters.
    pub fn full(&self) -> Span {
        Span::new(self.open.start, self.close.end)
    }

    /// Text between the delimiters.
    pub fn inner(&self) -> Span {
        Span::new(self.open.end, self.close.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_len_and_empty() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::new(4, 4).is_empty());
        // Inverted spans saturate rather than underflow
        assert_eq!(Span::new(7, 2).len(), 0);
    }

    #[test]
    fn markup_span_full_and_inner() {
        let span = MarkupSpan {
            open: Span::new(6, 8),
            close: Span::new(13, 15),
        };
        assert_eq!(span.full(), Span::new(6, 15));
        assert_eq!(span.inner(), Span::new(8, 13));
        assert_eq!(span.inner().range(), 8..13);
    }
}
