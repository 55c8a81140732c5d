use std::borrow::Cow;

use xi_rope::{Delta, Rope, RopeInfo};

use crate::editing::{Cmd, Patch, SelectionRange, text::floor_char_boundary};
use crate::markup::{
    EditorHost, FormattingState, MarkupKind, MarkupToggler, ToggleOutcome, TogglePolicy,
    compute_formatting_state,
};

/// A rope-backed text buffer with a selection, usable as an [`EditorHost`].
///
/// All edits flow through [`Cmd`]s which compile to xi-rope deltas; the
/// selection is mapped through every edit and the version increments so hosts
/// can detect change.
///
/// ```rust
/// # use inline_markup_engine::{Document, MarkupKind, SelectionRange, TogglePolicy};
/// let mut doc = Document::from_bytes(b"Hello world").unwrap();
/// doc.set_selection(SelectionRange::new(6, 11));
///
/// doc.toggle(MarkupKind::Bold, TogglePolicy::default());
/// assert_eq!(doc.text(), "Hello **world**");
///
/// doc.set_selection(SelectionRange::cursor(10));
/// assert!(doc.formatting_state().bold);
/// ```
#[derive(Clone)]
pub struct Document {
    /// xi-rope buffer containing the whole text as UTF-8
    pub(crate) buffer: Rope,
    /// Current selection as byte offsets into the buffer
    pub(crate) selection: SelectionRange,
    /// Incremented on each applied command
    pub(crate) version: u64,
    /// Set whenever the toggler hands focus back to the editing surface
    pub(crate) focused: bool,
}

impl Document {
    /// Create a new document from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        let buffer = Rope::from(text);
        let len = buffer.len();

        Ok(Self {
            buffer,
            selection: SelectionRange::cursor(len), // Start with cursor at end
            version: 0,
            focused: false,
        })
    }

    /// Get the document's content as raw bytes (exact round-trip)
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    /// Apply a command, returning the inserted ranges and the new selection.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let delta = self.compile_command(&cmd);
        // Map the selection against the old buffer, before the delta lands
        let new_selection = self.transform_selection_for_command(self.selection, &cmd);

        // Track changed ranges for the patch
        let mut changed = Vec::new();
        let mut cursor = 0;
        for op in delta.els.iter() {
            match op {
                xi_rope::delta::DeltaElement::Copy(from, to) => {
                    cursor += to - from;
                }
                xi_rope::delta::DeltaElement::Insert(inserted) => {
                    let start = cursor;
                    let end = cursor + inserted.len();
                    changed.push(start..end);
                    cursor = end;
                }
            }
        }

        self.buffer = delta.apply(&self.buffer);
        self.selection = new_selection;
        self.version += 1;

        log::trace!(
            "applied {cmd:?} -> version {}, selection {:?}",
            self.version,
            self.selection
        );

        Patch {
            changed,
            new_selection,
            version: self.version,
        }
    }

    /// Get the current selection range
    pub fn selection(&self) -> SelectionRange {
        self.selection
    }

    /// Set the selection range, clamped to the buffer and to char boundaries
    pub fn set_selection(&mut self, selection: SelectionRange) {
        let text = self.text();
        self.selection = SelectionRange::new(
            floor_char_boundary(&text, selection.start),
            floor_char_boundary(&text, selection.end),
        );
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Get the buffer length
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Slice the buffer to a cow string
    pub fn slice_to_cow(&self, range: std::ops::Range<usize>) -> Cow<'_, str> {
        let doc_len = self.buffer.len();

        // Clamp range to document bounds to prevent xi-rope panic
        let start = range.start.min(doc_len);
        let end = range.end.min(doc_len).max(start);

        self.buffer.slice_to_cow(start..end)
    }

    /// Formatting active at the start of the current selection.
    pub fn formatting_state(&self) -> FormattingState {
        compute_formatting_state(&self.text(), self.selection.start)
    }

    /// Toggle `kind` at the current selection using `policy`.
    pub fn toggle(&mut self, kind: MarkupKind, policy: TogglePolicy) -> ToggleOutcome {
        MarkupToggler::new(policy).toggle(Some(self), kind)
    }

    // Command compilation lives in `commands`
    pub(crate) fn compile_command(&self, cmd: &Cmd) -> Delta<RopeInfo> {
        crate::editing::commands::compile_command(self, cmd)
    }

    pub(crate) fn transform_selection_for_command(
        &self,
        selection: SelectionRange,
        cmd: &Cmd,
    ) -> SelectionRange {
        crate::editing::commands::transform_selection_for_command(self, selection, cmd)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("text", &self.buffer.to_string())
            .field("selection", &self.selection)
            .field("version", &self.version)
            .field("focused", &self.focused)
            .finish()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        // Compare buffer content as strings
        self.buffer.to_string() == other.buffer.to_string()
            && self.selection == other.selection
            && self.version == other.version
            && self.focused == other.focused
    }
}

impl EditorHost for Document {
    fn text(&self) -> Cow<'_, str> {
        self.slice_to_cow(0..self.len())
    }

    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn select(&mut self, selection: SelectionRange) {
        self.set_selection(selection);
    }

    fn replace_selection(&mut self, text: &str) {
        self.apply(Cmd::Replace {
            range: self.selection.range(),
            text: text.to_string(),
        });
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
