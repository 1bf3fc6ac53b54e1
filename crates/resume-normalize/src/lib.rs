//! Canonical document normalization.
//!
//! The engine turns arbitrary JSON object input into a structurally
//! complete [`resume_model::ResumeDocument`]: sections are always arrays,
//! visibility markers are explicit, nested entry arrays are sanitized, and
//! known legacy shapes are migrated. Input that is not an object at the
//! root is the one rejected case; everything else is repaired.

pub mod error;
mod migrate;
pub mod normalize;
pub mod sanitize;

pub use error::{NormalizeError, Result, json_type_name};
pub use normalize::normalize;
pub use sanitize::{clean_array, sanitize_array_item};
