//! Third-party tabular export bundle import.
//!
//! One-directional: a ZIP of comma-delimited files in, a canonical
//! document plus a per-file report out. Nothing in this crate writes
//! document state anywhere; the caller decides whether the assembled
//! document is committed.

pub mod bundle;
pub mod dates;
pub mod error;
pub mod proficiency;
mod tables;

pub use bundle::{BundleFile, BundleImportReport, FileError, import_bundle, import_bundle_path};
pub use dates::normalize_date;
pub use error::{IngestError, Result};
pub use proficiency::tier_for_endorsements;
