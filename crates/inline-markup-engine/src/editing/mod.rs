/*!
 * # Editing Core Module
 *
 * A small command-based editing model that hosts the markup toggler.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: xi-rope Buffer
 * - The whole text lives in one **`xi_rope::Rope`**
 * - Saving writes the rope bytes verbatim, no formatting drift
 *
 * ### 2. Command-Based Editing
 * - All edits are **Commands** (`Cmd` enum) that compile to xi-rope **Deltas**
 * - Every applied command maps the selection through the edit and bumps the
 *   document version
 *
 * ### 3. Byte Offsets Everywhere
 * - Selections and command ranges are UTF-8 byte offsets
 * - Offsets that land inside a character snap back to its start
 *
 * ## Module Structure
 *
 * - **`document`**: `Document` (rope + selection + version), the reference `EditorHost`
 * - **`commands`**: `Cmd` enum and delta compilation / selection mapping
 * - **`selection`**: `SelectionRange` and `SelectionError`
 * - **`patch`**: edit result metadata (changed ranges, new selection, version)
 * - **`text`**: char-boundary, line and (row, col) helpers for cursor motion
 *
 * ## Usage Pattern
 *
 * ```rust
 * use inline_markup_engine::editing::*;
 *
 * let mut doc = Document::from_bytes(b"Hello world").unwrap();
 * let patch = doc.apply(Cmd::InsertText { at: 0, text: "> ".to_string() });
 * assert_eq!(patch.version, 1);
 * assert_eq!(doc.text(), "> Hello world");
 * ```
 */

pub mod commands;
pub mod document;
pub mod patch;
pub mod selection;
pub mod text;

// Public API re-exports
pub use commands::Cmd;
pub use document::Document;
pub use patch::Patch;
pub use selection::{SelectionError, SelectionRange};
