use std::{ops::Range, path::PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use inline_markup_engine::{
    Cmd, Document, EditorHost, FormattingState, MarkupKind, MarkupToggler, SelectionRange,
    ToggleOutcome, TogglePolicy, markup_spans, text,
};

/// Editor state for one open file.
pub struct App {
    pub path: PathBuf,
    pub document: Document,
    pub toggler: MarkupToggler,
    /// Recomputed after every handled key
    pub formatting: FormattingState,
    /// Fixed end of a shift-extended selection
    anchor: Option<usize>,
    /// Moving end of the selection, where the caret is drawn
    pub head: usize,
    saved_version: u64,
    pub status: String,
    pub scroll: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(path: PathBuf, document: Document, policy: TogglePolicy) -> Self {
        let head = document.selection().end;
        let saved_version = document.version();
        let mut app = Self {
            path,
            document,
            toggler: MarkupToggler::new(policy),
            formatting: FormattingState::default(),
            anchor: None,
            head,
            saved_version,
            status: String::new(),
            scroll: 0,
            should_quit: false,
        };
        app.refresh_formatting();
        app
    }

    pub fn is_dirty(&self) -> bool {
        self.document.version() != self.saved_version
    }

    /// Dispatch one key press, then recompute the formatting state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => self.save(),
            KeyCode::Char('b') if ctrl => self.toggle(MarkupKind::Bold),
            KeyCode::Char('g') if ctrl => self.toggle(MarkupKind::Highlight),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.insert(&c.to_string()),
            KeyCode::Enter => self.insert("\n"),
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => {
                let content = self.document.text();
                self.move_head(text::prev_char_boundary(&content, self.head), shift);
            }
            KeyCode::Right => {
                let content = self.document.text();
                self.move_head(text::next_char_boundary(&content, self.head), shift);
            }
            KeyCode::Home => {
                let content = self.document.text();
                self.move_head(text::line_start(&content, self.head), shift);
            }
            KeyCode::End => {
                let content = self.document.text();
                self.move_head(text::line_end(&content, self.head), shift);
            }
            KeyCode::Up => self.move_vertical(-1, shift),
            KeyCode::Down => self.move_vertical(1, shift),
            _ => {}
        }

        self.refresh_formatting();
    }

    /// The selection-change hook: state is derived, never carried over.
    fn refresh_formatting(&mut self) {
        self.formatting = self.toggler.check_formatting(Some(&self.document));
    }

    fn toggle(&mut self, kind: MarkupKind) {
        let outcome = self.toggler.toggle(Some(&mut self.document), kind);
        self.sync_from_document();
        self.status = match outcome {
            ToggleOutcome::Wrapped => format!("{kind} added"),
            ToggleOutcome::Stripped | ToggleOutcome::Unwrapped => format!("{kind} removed"),
            ToggleOutcome::Unchanged => format!("nothing to {kind}"),
        };
    }

    fn insert(&mut self, text: &str) {
        self.document.replace_selection(text);
        self.sync_from_document();
    }

    fn delete_backward(&mut self) {
        if self.document.selection().is_collapsed() {
            let content = self.document.text();
            let start = text::prev_char_boundary(&content, self.head);
            self.document.apply(Cmd::DeleteRange {
                range: start..self.head,
            });
        } else {
            self.document.replace_selection("");
        }
        self.sync_from_document();
    }

    fn delete_forward(&mut self) {
        if self.document.selection().is_collapsed() {
            let content = self.document.text();
            let end = text::next_char_boundary(&content, self.head);
            self.document.apply(Cmd::DeleteRange {
                range: self.head..end,
            });
        } else {
            self.document.replace_selection("");
        }
        self.sync_from_document();
    }

    fn move_vertical(&mut self, delta: isize, extend: bool) {
        let content = self.document.text();
        let (row, col) = text::offset_to_point(&content, self.head);
        let Some(row) = row.checked_add_signed(delta) else {
            self.move_head(0, extend);
            return;
        };
        self.move_head(text::point_to_offset(&content, row, col), extend);
    }

    fn move_head(&mut self, head: usize, extend: bool) {
        if !extend {
            self.anchor = None;
        } else if self.anchor.is_none() {
            self.anchor = Some(self.head);
        }
        self.head = head;
        let anchor = self.anchor.unwrap_or(head);
        self.document.select(SelectionRange::new(anchor, head));
    }

    /// Edits leave a collapsed cursor in the document; adopt it.
    fn sync_from_document(&mut self) {
        self.anchor = None;
        self.head = self.document.selection().end;
    }

    fn save(&mut self) {
        match std::fs::write(&self.path, self.document.to_bytes()) {
            Ok(()) => {
                self.saved_version = self.document.version();
                self.status = format!("Saved {}", self.path.display());
                log::info!("Saved {}", self.path.display());
            }
            Err(e) => {
                self.status = format!("Save failed: {e}");
                log::warn!("Failed to save {}: {e}", self.path.display());
            }
        }
    }
}

/// Byte ranges of complete `kind` spans, delimiters included, for rendering.
///
/// Uses the same pairing as the formatting indicators, so styled text and
/// `[B]`/`[H]` never disagree.
pub fn markup_ranges(text: &str, kind: MarkupKind) -> Vec<Range<usize>> {
    markup_spans(text, kind)
        .iter()
        .map(|span| span.full().range())
        .collect()
}
