//! Structural validation gate for external resume payloads.

pub mod gate;
pub mod report;

pub use gate::validate;
pub use report::{ValidationIssue, ValidationReport};
