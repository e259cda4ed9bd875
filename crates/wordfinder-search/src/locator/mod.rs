//! Occurrence locator -- find a literal query in a document's visible text.
//!
//! Matching is case-insensitive and non-overlapping. Each hit keeps a live
//! anchor into its text node alongside a frozen page position.

mod context;
mod engine;
mod types;

pub use context::context_window;
pub use engine::*;
pub use types::*;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
