//! # Markup Kinds
//!
//! Inline formatting kinds that own their delimiters. All delimiter constants
//! live here; scanning and toggling code asks the kind, it never hardcodes
//! `**` or `==`.
//!
//! - **`Bold`**: `DELIM = b"**"`
//! - **`Highlight`**: `DELIM = b"=="`

pub mod bold;
pub mod highlight;

use serde::Serialize;

pub use bold::Bold;
pub use highlight::Highlight;

/// The inline formatting kinds the toggler understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkupKind {
    Bold,
    Highlight,
}

impl MarkupKind {
    pub const ALL: [MarkupKind; 2] = [MarkupKind::Bold, MarkupKind::Highlight];

    /// The two-byte delimiter bracketing spans of this kind.
    pub fn delimiter(self) -> &'static [u8; 2] {
        match self {
            MarkupKind::Bold => Bold::DELIM,
            MarkupKind::Highlight => Highlight::DELIM,
        }
    }

    /// The delimiter as a `str`, for building replacement text.
    pub fn delimiter_str(self) -> &'static str {
        match self {
            MarkupKind::Bold => Bold::DELIM_STR,
            MarkupKind::Highlight => Highlight::DELIM_STR,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MarkupKind::Bold => "bold",
            MarkupKind::Highlight => "highlight",
        }
    }
}

impl std::fmt::Display for MarkupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
