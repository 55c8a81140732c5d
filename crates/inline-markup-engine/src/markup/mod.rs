//! # Inline Markup
//!
//! Detection and toggling of inline formatting delimiters inside plain text.
//!
//! ## Architecture
//!
//! Formatting state is never stored. It is recomputed from a text snapshot and
//! a cursor offset whenever the host reports a selection or content change:
//!
//! - **`kinds`**: `MarkupKind` (Bold `**`, Highlight `==`) owning its delimiter
//! - **`span`**: byte `Span`s and the derived `MarkupSpan` delimiter pair
//! - **`scan`**: linear delimiter searches and left-to-right pairing
//! - **`state`**: `compute_formatting_state()`, `enclosing_span()` and `markup_spans()`
//! - **`toggle`**: `plan_toggle()` turning a selection into a text replacement
//! - **`host`**: the `EditorHost` seam and the `MarkupToggler` driving it
//!
//! ## Span Model
//!
//! Spans are single-level and never nest with themselves. Delimiters of a kind
//! pair up left to right, so the cursor is inside a span when an odd number of
//! them lie wholly before it and the next one follows:
//!
//! ```text
//! Hello **world** today
//!         ^ bold          (opener at 6, closer at 13)
//! **a** plain **b**
//!         ^ not bold      (two delimiters before the cursor)
//! ```

pub mod host;
pub mod kinds;
pub mod scan;
pub mod span;
pub mod state;
pub mod toggle;

pub use host::{EditorHost, MarkupToggler};
pub use kinds::MarkupKind;
pub use span::{MarkupSpan, Span};
pub use state::{FormattingState, compute_formatting_state, enclosing_span, markup_spans};
pub use toggle::{ToggleOutcome, TogglePlan, TogglePolicy, plan_toggle};
