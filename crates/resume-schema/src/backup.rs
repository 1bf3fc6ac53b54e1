//! The lossless internal backup envelope.
//!
//! A backup carries the full canonical document (every visibility marker,
//! `meta`, `nonConformingData`) wrapped in version/format metadata plus a
//! visibility extension that positionally mirrors each section's item and
//! nested-entry visibility. The payload alone is sufficient to restore the
//! document; the extension is the file-format contract for readers that
//! only care about visibility.
//!
//! `import(export(doc))` equals `doc` for canonical documents, modulo the
//! volatile `exportedAt` stamp.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use resume_model::{ListEntry, NamedEntry, ResumeDocument, SectionKey};
use resume_normalize::normalize;
use resume_validate::validate;

use crate::error::{Result, SchemaError};

/// Version written into new envelopes.
pub const BACKUP_SCHEMA_VERSION: &str = "1.2.0";
/// Format discriminator; the payload discriminator keys off this value.
pub const BACKUP_FORMAT: &str = "extended";

const SUPPORTED_MAJOR: u64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupEnvelope {
    pub schema_version: String,
    pub format: String,
    /// Volatile export timestamp, RFC 3339.
    pub exported_at: String,
    pub visibility_extension: VisibilityExtension,
    pub payload: Value,
}

/// Positional mirror of the document's visibility state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisibilityExtension {
    pub profiles: Vec<bool>,
    pub sections: BTreeMap<String, Vec<ItemVisibility>>,
}

/// Visibility of one list item plus its nested entry arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemVisibility {
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<bool>>,
}

impl Default for ItemVisibility {
    fn default() -> Self {
        Self {
            visible: true,
            highlights: None,
            keywords: None,
            courses: None,
            roles: None,
        }
    }
}

/// Wrap a document in a fresh envelope.
///
/// # Errors
///
/// Only on serialization failure, which a well-formed document cannot
/// produce.
pub fn export_backup(document: &ResumeDocument) -> Result<BackupEnvelope> {
    Ok(BackupEnvelope {
        schema_version: BACKUP_SCHEMA_VERSION.to_string(),
        format: BACKUP_FORMAT.to_string(),
        exported_at: Utc::now().to_rfc3339(),
        visibility_extension: mirror_document(document),
        payload: serde_json::to_value(document)?,
    })
}

/// Restore a document from a backup envelope.
///
/// The payload is gated, then run through the normalization engine (the
/// identity for canonical content); finally the visibility extension is
/// overlaid where it differs from the payload.
///
/// # Errors
///
/// - [`SchemaError::Unrecognized`] when the format marker is absent;
/// - [`SchemaError::UnsupportedVersion`] when the semver major does not
///   match the supported generation;
/// - [`SchemaError::MalformedEnvelope`] when the payload is missing;
/// - [`SchemaError::Validation`] when the payload fails the structural
///   gate.
pub fn import_backup(raw: &Value) -> Result<ResumeDocument> {
    let Some(root) = raw.as_object() else {
        return Err(SchemaError::Unrecognized);
    };
    if root.get("format").and_then(Value::as_str) != Some(BACKUP_FORMAT) {
        return Err(SchemaError::Unrecognized);
    }

    let version = root
        .get("schemaVersion")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if semver_major(version) != Some(SUPPORTED_MAJOR) {
        return Err(SchemaError::UnsupportedVersion {
            found: version.to_string(),
            supported: SUPPORTED_MAJOR,
        });
    }

    let payload = root
        .get("payload")
        .ok_or(SchemaError::MalformedEnvelope("missing payload"))?;
    let report = validate(payload);
    if !report.is_valid() {
        return Err(SchemaError::Validation {
            errors: report.messages(),
        });
    }
    let mut document = normalize(payload)?;

    // A malformed extension degrades to "no overlay" rather than failing
    // the import; the payload already restored the markers.
    let extension: VisibilityExtension = root
        .get("visibilityExtension")
        .map(|value| serde_json::from_value(value.clone()).unwrap_or_default())
        .unwrap_or_default();
    overlay_extension(&mut document, &extension);

    debug!(version, "imported backup envelope");
    Ok(document)
}

fn semver_major(version: &str) -> Option<u64> {
    version.split('.').next()?.trim().parse().ok()
}

fn mirror_document(document: &ResumeDocument) -> VisibilityExtension {
    let mut sections = BTreeMap::new();
    for key in SectionKey::ALL {
        sections.insert(key.as_str().to_string(), mirror_section(document, key));
    }
    VisibilityExtension {
        profiles: document
            .basics
            .profiles
            .iter()
            .map(|profile| profile.visible)
            .collect(),
        sections,
    }
}

fn mirror_section(document: &ResumeDocument, key: SectionKey) -> Vec<ItemVisibility> {
    match key {
        SectionKey::Work => document
            .work
            .iter()
            .map(|item| ItemVisibility {
                visible: item.visible,
                highlights: mirror_entries(&item.highlights),
                ..ItemVisibility::default()
            })
            .collect(),
        SectionKey::Volunteer => document
            .volunteer
            .iter()
            .map(|item| ItemVisibility {
                visible: item.visible,
                highlights: mirror_entries(&item.highlights),
                ..ItemVisibility::default()
            })
            .collect(),
        SectionKey::Education => document
            .education
            .iter()
            .map(|item| ItemVisibility {
                visible: item.visible,
                courses: mirror_entries(&item.courses),
                ..ItemVisibility::default()
            })
            .collect(),
        SectionKey::Skills => document
            .skills
            .iter()
            .map(|item| ItemVisibility {
                visible: item.visible,
                keywords: mirror_entries(&item.keywords),
                ..ItemVisibility::default()
            })
            .collect(),
        SectionKey::Projects => document
            .projects
            .iter()
            .map(|item| ItemVisibility {
                visible: item.visible,
                highlights: mirror_entries(&item.highlights),
                keywords: mirror_entries(&item.keywords),
                roles: mirror_entries(&item.roles),
                ..ItemVisibility::default()
            })
            .collect(),
        SectionKey::Awards => mirror_flat(document.awards.iter().map(|item| item.visible)),
        SectionKey::Certificates => {
            mirror_flat(document.certificates.iter().map(|item| item.visible))
        }
        SectionKey::Publications => {
            mirror_flat(document.publications.iter().map(|item| item.visible))
        }
        SectionKey::Languages => mirror_flat(document.languages.iter().map(|item| item.visible)),
        SectionKey::Interests => document
            .interests
            .iter()
            .map(|item| ItemVisibility {
                visible: item.visible,
                keywords: mirror_entries(&item.keywords),
                ..ItemVisibility::default()
            })
            .collect(),
        SectionKey::References => mirror_flat(document.references.iter().map(|item| item.visible)),
    }
}

fn mirror_flat(flags: impl Iterator<Item = bool>) -> Vec<ItemVisibility> {
    flags
        .map(|visible| ItemVisibility {
            visible,
            ..ItemVisibility::default()
        })
        .collect()
}

fn mirror_entries(entries: &[ListEntry]) -> Option<Vec<bool>> {
    if entries.is_empty() {
        None
    } else {
        Some(entries.iter().map(ListEntry::is_visible).collect())
    }
}

/// Overlay extension flags onto the document where they differ.
///
/// Positions beyond the document's own arrays are ignored; a plain-text
/// entry cannot carry a marker and is left alone.
fn overlay_extension(document: &mut ResumeDocument, extension: &VisibilityExtension) {
    for (index, flag) in extension.profiles.iter().enumerate() {
        if let Some(profile) = document.basics.profiles.get_mut(index) {
            profile.visible = *flag;
        }
    }
    for key in SectionKey::ALL {
        if let Some(items) = extension.sections.get(key.as_str()) {
            overlay_section(document, key, items);
        }
    }
}

fn overlay_section(document: &mut ResumeDocument, key: SectionKey, items: &[ItemVisibility]) {
    for (index, item_visibility) in items.iter().enumerate() {
        document.set_item_visible(key, index, item_visibility.visible);
        match key {
            SectionKey::Work => {
                if let Some(item) = document.work.get_mut(index) {
                    overlay_entries(&mut item.highlights, item_visibility.highlights.as_deref());
                }
            }
            SectionKey::Volunteer => {
                if let Some(item) = document.volunteer.get_mut(index) {
                    overlay_entries(&mut item.highlights, item_visibility.highlights.as_deref());
                }
            }
            SectionKey::Education => {
                if let Some(item) = document.education.get_mut(index) {
                    overlay_entries(&mut item.courses, item_visibility.courses.as_deref());
                }
            }
            SectionKey::Skills => {
                if let Some(item) = document.skills.get_mut(index) {
                    overlay_entries(&mut item.keywords, item_visibility.keywords.as_deref());
                }
            }
            SectionKey::Projects => {
                if let Some(item) = document.projects.get_mut(index) {
                    overlay_entries(&mut item.highlights, item_visibility.highlights.as_deref());
                    overlay_entries(&mut item.keywords, item_visibility.keywords.as_deref());
                    overlay_entries(&mut item.roles, item_visibility.roles.as_deref());
                }
            }
            SectionKey::Interests => {
                if let Some(item) = document.interests.get_mut(index) {
                    overlay_entries(&mut item.keywords, item_visibility.keywords.as_deref());
                }
            }
            SectionKey::Awards
            | SectionKey::Certificates
            | SectionKey::Publications
            | SectionKey::Languages
            | SectionKey::References => {}
        }
    }
}

fn overlay_entries(entries: &mut [ListEntry], flags: Option<&[bool]>) {
    let Some(flags) = flags else {
        return;
    };
    for (entry, flag) in entries.iter_mut().zip(flags) {
        if entry.is_visible() == *flag {
            continue;
        }
        if let ListEntry::Entry(NamedEntry { visible, .. }) = entry {
            *visible = Some(*flag);
        }
    }
}
