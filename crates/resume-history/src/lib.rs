//! Bounded mutation history over canonical documents.
//!
//! Whole-document snapshots, a cursor, and a fixed capacity. Every edit in
//! the system flows through [`MutationHistory::commit`]; the session layer
//! that owns the history is the single writer of document state.

pub mod history;
pub mod save_state;

pub use history::{HISTORY_CAPACITY, MutationHistory};
pub use save_state::{SaveState, SaveTracker};
