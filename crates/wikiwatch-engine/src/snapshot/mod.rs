//! # Snapshot Testing Support
//!
//! Helpers for pinning parser output in tests.
//!
//! - **`invariants`**: panicking checks every run sequence must satisfy
//! - **`render`**: a stable one-line-per-run dump for `insta` snapshots

pub mod invariants;
pub mod render;

pub use invariants::check;
pub use render::render;
