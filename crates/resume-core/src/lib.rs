//! The editing session layer: reducer-equivalent actions, the single
//! serialization point for mutations, the top-level import wrapper, and
//! the named-summary registry.

pub mod action;
pub mod error;
pub mod import;
pub mod session;
pub mod summaries;

pub use action::{BasicsPatch, EditAction, LocationPatch, apply_action};
pub use error::EditError;
pub use import::import_document;
pub use session::EditorSession;
pub use summaries::SummaryStore;
