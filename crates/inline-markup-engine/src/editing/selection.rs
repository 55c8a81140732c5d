use serde::Serialize;
use thiserror::Error;

/// Why a selection could not be resolved against a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection {start}..{end} exceeds buffer length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("selection offset {offset} is not on a char boundary")]
    NotCharBoundary { offset: usize },
}

/// A selection as byte offsets into a UTF-8 buffer.
///
/// Always normalised so that `start <= end`. `start == end` is a collapsed
/// cursor with nothing selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SelectionRange {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Creates a selection, swapping the ends if given in reverse.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn cursor(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }

    pub fn clamp(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Returns the selected text, rejecting offsets that are out of bounds or
    /// split a character.
    pub fn slice<'a>(&self, text: &'a str) -> Result<&'a str, SelectionError> {
        if self.end > text.len() {
            return Err(SelectionError::OutOfBounds {
                start: self.start,
                end: self.end,
                len: text.len(),
            });
        }
        for offset in [self.start, self.end] {
            if !text.is_char_boundary(offset) {
                return Err(SelectionError::NotCharBoundary { offset });
            }
        }
        Ok(&text[self.range()])
    }
}

impl From<std::ops::Range<usize>> for SelectionRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_normalizes_reversed_ends() {
        let selection = SelectionRange::new(14, 9);
        assert_eq!(selection.start, 9);
        assert_eq!(selection.end, 14);
        assert_eq!(selection.len(), 5);
        assert!(!selection.is_collapsed());
    }

    #[test]
    fn cursor_is_collapsed() {
        let cursor = SelectionRange::cursor(3);
        assert!(cursor.is_collapsed());
        assert!(cursor.is_empty());
        assert_eq!(cursor.len(), 0);
    }

    #[test]
    fn clamp_to_buffer_length() {
        assert_eq!(SelectionRange::new(2, 50).clamp(10), SelectionRange::new(2, 10));
        assert_eq!(SelectionRange::cursor(50).clamp(10), SelectionRange::cursor(10));
    }

    #[test]
    fn slice_returns_selected_text() {
        let text = "Hello **world** today";
        assert_eq!(SelectionRange::new(6, 15).slice(text), Ok("**world**"));
        assert_eq!(SelectionRange::cursor(21).slice(text), Ok(""));
    }

    #[test]
    fn slice_rejects_bad_offsets() {
        assert_eq!(
            SelectionRange::new(0, 6).slice("short"),
            Err(SelectionError::OutOfBounds {
                start: 0,
                end: 6,
                len: 5
            })
        );
        assert_eq!(
            SelectionRange::cursor(2).slice("héllo"),
            Err(SelectionError::NotCharBoundary { offset: 2 })
        );
    }

    #[test]
    fn from_range() {
        assert_eq!(SelectionRange::from(3..7), SelectionRange::new(3, 7));
    }
}
