pub mod editing;
pub mod markup;

// Re-export key types for easier usage
pub use editing::{commands::Cmd, document::Document, patch::Patch, selection::*, text};
pub use markup::*;
