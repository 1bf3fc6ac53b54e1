//! The top-level JSON import wrapper.
//!
//! One discriminator pass, one parser. This function and the bundle
//! importer are the only layers that surface import failures to the user;
//! nothing here touches session state.

use serde_json::Value;
use tracing::info;

use resume_model::ResumeDocument;
use resume_schema::{
    PayloadKind, SchemaError, detect_payload, import_alternate, import_backup, import_portable,
};

/// Parse any supported JSON payload into a canonical document.
///
/// # Errors
///
/// [`SchemaError::Unrecognized`] when the payload matches no known format;
/// otherwise whatever the selected parser reports.
pub fn import_document(raw: &Value) -> Result<ResumeDocument, SchemaError> {
    let kind = detect_payload(raw);
    info!(?kind, "importing document payload");
    match kind {
        PayloadKind::Backup => import_backup(raw),
        PayloadKind::Alternate => import_alternate(raw),
        PayloadKind::Portable => import_portable(raw),
        PayloadKind::Unrecognized => Err(SchemaError::Unrecognized),
    }
}
