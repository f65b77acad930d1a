//! # Auto-linking
//!
//! Turns occurrences of known article titles in plain summary text into
//! link runs.
//!
//! - **`matcher`**: case-insensitive search and word-boundary checks
//! - **`linker`**: `AutoLinker`, `LinkMatch` and the `auto_link()` shortcut
//!
//! Matching is a plain scan per candidate, which is fine for per-article
//! link lists in the hundreds and texts of a few thousand chars.

pub mod linker;
pub mod matcher;

pub use linker::{AutoLinker, LinkMatch, auto_link};
