//! Translators between the canonical document and external schemas.
//!
//! Four formats, one parser each, selected by the explicit discriminator
//! in [`detect`]:
//!
//! - [`portable`]: the public interchange schema (lossy: visibility);
//! - [`alternate`]: the industry person/employment nesting (lossy:
//!   documented field asymmetries);
//! - [`backup`]: the versioned lossless envelope;
//! - the tabular bundle importer lives in its own crate (`resume-ingest`)
//!   because it reads archives, not JSON.

pub mod alternate;
pub mod backup;
pub mod detect;
pub mod error;
pub mod portable;

pub use alternate::{AlternatePayload, export_alternate, import_alternate};
pub use backup::{
    BACKUP_FORMAT, BACKUP_SCHEMA_VERSION, BackupEnvelope, ItemVisibility, VisibilityExtension,
    export_backup, import_backup,
};
pub use detect::{PayloadKind, detect_payload};
pub use error::{Result, SchemaError};
pub use portable::{export_portable, import_portable};
