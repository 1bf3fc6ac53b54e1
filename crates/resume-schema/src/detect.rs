//! First-pass payload discrimination.
//!
//! Exactly one parser runs per payload, selected here by a single explicit
//! rule instead of field sniffing at call sites. The rule, in order:
//!
//! 1. `format == "extended"`: backup envelope;
//! 2. `person` together with `employment` or `education`: alternate
//!    schema;
//! 3. `basics` or any fixed section key: portable schema;
//! 4. anything else is unrecognized.

use serde_json::Value;

use resume_model::SectionKey;

/// The external format a payload was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Portable,
    Alternate,
    Backup,
    Unrecognized,
}

/// Classify a raw payload. Never fails; unknown shapes classify as
/// [`PayloadKind::Unrecognized`].
pub fn detect_payload(raw: &Value) -> PayloadKind {
    let Some(root) = raw.as_object() else {
        return PayloadKind::Unrecognized;
    };

    if root.get("format").and_then(Value::as_str) == Some(crate::backup::BACKUP_FORMAT) {
        return PayloadKind::Backup;
    }

    if root.contains_key("person")
        && (root.contains_key("employment") || root.contains_key("education"))
    {
        return PayloadKind::Alternate;
    }

    if root.contains_key("basics")
        || SectionKey::ALL
            .iter()
            .any(|key| root.contains_key(key.as_str()))
    {
        return PayloadKind::Portable;
    }

    PayloadKind::Unrecognized
}
