//! # Markup Parsing
//!
//! Cursor-based parsing of the small HTML subset found in Wikipedia feed
//! snippets ("Did you know", "In the news") and summaries.
//!
//! ## Modules
//!
//! - **`kinds`**: tag delimiters, the `&nbsp;` forms, `TagKind` and `TagToken`
//! - **`cursor`**: `Cursor` for scanning with byte positions
//! - **`frames`**: `StyleFrame` and the `FrameStack` that decides run style
//! - **`attrs`**: double-quoted attribute extraction
//! - **`parser`**: `parse_markup()` entry point
//!
//! ## Close semantics
//!
//! A closing tag removes every open frame with the same name, not just the
//! innermost one. Input is never rejected; malformed markup degrades to
//! plain or truncated text.

pub mod attrs;
pub mod cursor;
pub mod frames;
pub mod kinds;
pub mod parser;

pub use attrs::extract_attribute;
pub use parser::parse_markup;
