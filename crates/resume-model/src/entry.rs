//! The two-case tagged union for nested list content.
//!
//! `highlights`, `keywords`, `courses`, and `roles` arrays mix plain text
//! with tagged entries that carry their own visibility marker. Modeling the
//! two shapes as one untagged enum keeps every use site free of runtime
//! type inspection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One element of a nested string-or-tagged-entry array.
///
/// No coercion ever happens between the two shapes: a plain string stays a
/// plain string, a tagged entry stays an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListEntry {
    /// Plain text content. Always rendered; carries no visibility marker.
    Text(String),
    /// A tagged entry with an optional name and visibility marker.
    Entry(NamedEntry),
}

/// The object shape of a [`ListEntry`].
///
/// Properties other than `name` and `visible` are preserved verbatim in
/// `extra` so that backup round-trips stay lossless.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ListEntry {
    /// Convenience constructor for plain text.
    pub fn text(value: impl Into<String>) -> Self {
        ListEntry::Text(value.into())
    }

    /// Convenience constructor for a named tagged entry.
    pub fn named(name: impl Into<String>) -> Self {
        ListEntry::Entry(NamedEntry {
            name: Some(name.into()),
            ..NamedEntry::default()
        })
    }

    /// Whether this element should be rendered.
    ///
    /// Plain text is always visible; a tagged entry is hidden only by an
    /// explicit `visible: false`.
    pub fn is_visible(&self) -> bool {
        match self {
            ListEntry::Text(_) => true,
            ListEntry::Entry(entry) => entry.visible != Some(false),
        }
    }

    /// The display name: the text itself, or the tagged entry's `name`.
    pub fn display_name(&self) -> &str {
        match self {
            ListEntry::Text(text) => text,
            ListEntry::Entry(entry) => entry.name.as_deref().unwrap_or(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_deserializes_as_text() {
        let entry: ListEntry = serde_json::from_value(json!("shipped v2")).unwrap();
        assert_eq!(entry, ListEntry::text("shipped v2"));
        assert!(entry.is_visible());
    }

    #[test]
    fn object_deserializes_as_entry() {
        let entry: ListEntry =
            serde_json::from_value(json!({"name": "Rust", "visible": false})).unwrap();
        match &entry {
            ListEntry::Entry(named) => {
                assert_eq!(named.name.as_deref(), Some("Rust"));
                assert_eq!(named.visible, Some(false));
            }
            ListEntry::Text(_) => panic!("expected tagged entry"),
        }
        assert!(!entry.is_visible());
    }

    #[test]
    fn extra_properties_round_trip() {
        let raw = json!({"name": "Rust", "years": 5});
        let entry: ListEntry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn entry_without_visible_is_visible() {
        assert!(ListEntry::named("Rust").is_visible());
    }
}
