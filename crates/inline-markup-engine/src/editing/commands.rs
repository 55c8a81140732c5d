use std::ops::Range;

use xi_rope::{Delta, Rope, RopeInfo, delta::Builder};

use crate::editing::{Document, SelectionRange, text::floor_char_boundary};

/// Edit commands understood by [`Document::apply`].
///
/// Ranges are byte offsets into the current buffer. They are clamped to the
/// buffer and snapped back to char boundaries before compiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    InsertText { at: usize, text: String },
    DeleteRange { range: Range<usize> },
    Replace { range: Range<usize>, text: String },
}

impl Cmd {
    /// The old-buffer range this command replaces and the text put there.
    fn edit(&self) -> (Range<usize>, &str) {
        match self {
            Cmd::InsertText { at, text } => (*at..*at, text.as_str()),
            Cmd::DeleteRange { range } => (range.clone(), ""),
            Cmd::Replace { range, text } => (range.clone(), text.as_str()),
        }
    }
}

/// Resolve a command's target range against the document text.
fn clamped_edit<'c>(doc_text: &str, cmd: &'c Cmd) -> (Range<usize>, &'c str) {
    let (range, text) = cmd.edit();
    let start = floor_char_boundary(doc_text, range.start);
    let end = floor_char_boundary(doc_text, range.end).max(start);
    (start..end, text)
}

/// Compile a command into an xi-rope delta over the current buffer.
pub(crate) fn compile_command(doc: &Document, cmd: &Cmd) -> Delta<RopeInfo> {
    let doc_text = doc.text();
    let (range, text) = clamped_edit(&doc_text, cmd);

    let mut builder = Builder::new(doc.len());
    if !range.is_empty() || !text.is_empty() {
        builder.replace(range, Rope::from(text));
    }
    builder.build()
}

/// Map the selection through a command.
///
/// Offsets before the edit stay put, offsets inside the replaced range (or at
/// an insertion point) move to the end of the inserted text, and offsets after
/// it shift by the length difference.
pub(crate) fn transform_selection_for_command(
    doc: &Document,
    selection: SelectionRange,
    cmd: &Cmd,
) -> SelectionRange {
    let doc_text = doc.text();
    let (range, text) = clamped_edit(&doc_text, cmd);

    let map = |pos: usize| {
        if pos < range.start {
            pos
        } else if pos <= range.end {
            range.start + text.len()
        } else {
            pos - range.len() + text.len()
        }
    };

    SelectionRange::new(map(selection.start), map(selection.end))
}
