//! The public portable schema.
//!
//! The portable file is the interchange format other tools read: `basics`,
//! the eleven sections, and `meta`, with no visibility markers and no
//! editor-internal fields. Hiding affects rendering, not export payload
//! composition, so hidden items stay in the arrays and only their markers
//! are stripped. The marker is the single lossy part of this round trip:
//! importing a portable file makes everything visible again.

use serde_json::{Map, Value};
use tracing::debug;

use resume_model::{ResumeDocument, SectionKey};
use resume_normalize::normalize;
use resume_validate::validate;

use crate::error::{Result, SchemaError};

/// Serialize a canonical document as a portable-schema payload.
///
/// # Errors
///
/// Only on serialization failure, which a well-formed document cannot
/// produce.
pub fn export_portable(document: &ResumeDocument) -> Result<Value> {
    let mut root = Map::new();

    let mut basics = serde_json::to_value(&document.basics)?;
    if let Some(object) = basics.as_object_mut() {
        object.remove("imageSize");
    }
    strip_visible(&mut basics);
    root.insert("basics".to_string(), basics);

    for key in SectionKey::ALL {
        let mut items = section_to_value(document, key)?;
        strip_visible(&mut items);
        root.insert(key.as_str().to_string(), items);
    }

    if let Some(meta) = &document.meta {
        root.insert("meta".to_string(), meta.clone());
    }

    debug!("exported portable payload");
    Ok(Value::Object(root))
}

/// Import a portable-schema payload.
///
/// The payload is gated, then normalized; items without markers come out
/// visible and `sectionVisibility` is read if present, else all-true.
///
/// # Errors
///
/// [`SchemaError::Validation`] when the gate rejects the payload. The
/// normalizer cannot fail afterwards: the gate already guaranteed an
/// object root.
pub fn import_portable(raw: &Value) -> Result<ResumeDocument> {
    let report = validate(raw);
    if !report.is_valid() {
        return Err(SchemaError::Validation {
            errors: report.messages(),
        });
    }
    Ok(normalize(raw)?)
}

fn section_to_value(document: &ResumeDocument, key: SectionKey) -> Result<Value> {
    let value = match key {
        SectionKey::Work => serde_json::to_value(&document.work)?,
        SectionKey::Volunteer => serde_json::to_value(&document.volunteer)?,
        SectionKey::Education => serde_json::to_value(&document.education)?,
        SectionKey::Skills => serde_json::to_value(&document.skills)?,
        SectionKey::Projects => serde_json::to_value(&document.projects)?,
        SectionKey::Awards => serde_json::to_value(&document.awards)?,
        SectionKey::Certificates => serde_json::to_value(&document.certificates)?,
        SectionKey::Publications => serde_json::to_value(&document.publications)?,
        SectionKey::Languages => serde_json::to_value(&document.languages)?,
        SectionKey::Interests => serde_json::to_value(&document.interests)?,
        SectionKey::References => serde_json::to_value(&document.references)?,
    };
    Ok(value)
}

/// Remove every `visible` key in a subtree.
///
/// Applied to basics and section payloads only; an opaque `meta` subtree
/// is never walked.
fn strip_visible(value: &mut Value) {
    match value {
        Value::Object(object) => {
            object.remove("visible");
            for child in object.values_mut() {
                strip_visible(child);
            }
        }
        Value::Array(items) => {
            for child in items.iter_mut() {
                strip_visible(child);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_model::{ListEntry, Skill, WorkExperience};
    use serde_json::json;

    fn contains_visible_key(value: &Value) -> bool {
        match value {
            Value::Object(object) => {
                object.contains_key("visible")
                    || object.values().any(contains_visible_key)
            }
            Value::Array(items) => items.iter().any(contains_visible_key),
            _ => false,
        }
    }

    fn sample_document() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.basics.name = "Ada Lovelace".into();
        doc.work.push(WorkExperience {
            name: "Engine Works".into(),
            visible: false,
            highlights: vec![ListEntry::text("built it"), ListEntry::named("tuned it")],
            ..WorkExperience::default()
        });
        doc.skills.push(Skill {
            name: "Analysis".into(),
            ..Skill::default()
        });
        doc
    }

    #[test]
    fn export_strips_every_visible_marker() {
        let payload = export_portable(&sample_document()).unwrap();
        assert!(!contains_visible_key(&payload));
    }

    #[test]
    fn export_keeps_hidden_items_in_the_array() {
        let payload = export_portable(&sample_document()).unwrap();
        assert_eq!(payload["work"].as_array().unwrap().len(), 1);
        assert_eq!(payload["work"][0]["name"], json!("Engine Works"));
    }

    #[test]
    fn export_omits_editor_internal_fields() {
        let payload = export_portable(&sample_document()).unwrap();
        assert!(payload.get("sectionVisibility").is_none());
        assert!(payload.get("nonConformingData").is_none());
        assert!(payload["basics"].get("imageSize").is_none());
    }

    #[test]
    fn meta_survives_export_untouched() {
        let mut doc = sample_document();
        doc.meta = Some(json!({"visible": false, "theme": "onyx"}));
        let payload = export_portable(&doc).unwrap();
        // meta is opaque: even a key named "visible" inside it survives.
        assert_eq!(payload["meta"]["visible"], json!(false));
    }

    #[test]
    fn round_trip_resets_visibility_to_true() {
        let doc = sample_document();
        let payload = export_portable(&doc).unwrap();
        let round = import_portable(&payload).unwrap();
        assert!(round.work[0].visible);
        assert_eq!(round.work[0].name, doc.work[0].name);
        assert_eq!(round.skills, doc.skills);
    }

    #[test]
    fn import_rejects_gate_failures() {
        let error = import_portable(&json!({"work": "nope"})).unwrap_err();
        match error {
            SchemaError::Validation { errors } => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].starts_with("work"));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }
}
