//! Array sanitation for string-or-tagged-entry lists.
//!
//! Input arrives as arbitrary JSON. Elements are classified one at a time:
//! text survives when non-blank (and is trimmed), tagged entries survive
//! when they carry a usable name or any other meaningful property.
//! Everything else is dropped. Order is preserved and shapes are never
//! coerced into each other.

use serde_json::{Map, Value};

use resume_model::{ListEntry, NamedEntry};

/// Classify one raw array element.
///
/// Returns `None` to signal removal:
/// - `null` and non-text, non-object values;
/// - empty or whitespace-only strings;
/// - empty objects;
/// - objects whose `name` is a string that trims to empty;
/// - objects with no usable `name` and no property that is non-null, not a
///   blank string, and not `false`.
///
/// Surviving text is trimmed. Surviving entries keep a trimmed `name`, the
/// `visible` boolean when one was given, and all other properties verbatim.
pub fn sanitize_array_item(value: &Value) -> Option<ListEntry> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(ListEntry::Text(trimmed.to_string()))
            }
        }
        Value::Object(object) => sanitize_entry_object(object),
        _ => None,
    }
}

/// Sanitize a whole array, preserving the order of survivors.
pub fn clean_array(values: &[Value]) -> Vec<ListEntry> {
    values.iter().filter_map(sanitize_array_item).collect()
}

fn sanitize_entry_object(object: &Map<String, Value>) -> Option<ListEntry> {
    if object.is_empty() {
        return None;
    }

    // A name that is present but blank marks the entry as deliberately
    // emptied; it is removed rather than kept nameless.
    let name = match object.get("name") {
        Some(Value::String(name)) => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(trimmed.to_string())
        }
        _ => None,
    };

    let visible = match object.get("visible") {
        Some(Value::Bool(flag)) => Some(*flag),
        _ => None,
    };

    let extra: Map<String, Value> = object
        .iter()
        .filter(|(key, _)| key.as_str() != "name" && key.as_str() != "visible")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let retained =
        name.is_some() || visible == Some(true) || extra.values().any(value_has_content);
    if !retained {
        return None;
    }

    Some(ListEntry::Entry(NamedEntry {
        name,
        visible,
        extra,
    }))
}

/// A property value counts toward retention when it is non-null, not a
/// blank string, and not `false`.
pub(crate) fn value_has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::String(text) => !text.trim().is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drops_nulls_and_blank_strings() {
        assert_eq!(sanitize_array_item(&Value::Null), None);
        assert_eq!(sanitize_array_item(&json!("")), None);
        assert_eq!(sanitize_array_item(&json!("   \t ")), None);
    }

    #[test]
    fn trims_surviving_text() {
        assert_eq!(
            sanitize_array_item(&json!("  shipped v2  ")),
            Some(ListEntry::text("shipped v2"))
        );
    }

    #[test]
    fn drops_empty_and_blank_named_objects() {
        assert_eq!(sanitize_array_item(&json!({})), None);
        assert_eq!(sanitize_array_item(&json!({"name": ""})), None);
        assert_eq!(sanitize_array_item(&json!({"name": "   "})), None);
    }

    #[test]
    fn nameless_object_needs_one_meaningful_property() {
        assert_eq!(sanitize_array_item(&json!({"count": null})), None);
        assert_eq!(sanitize_array_item(&json!({"note": "  "})), None);
        assert_eq!(sanitize_array_item(&json!({"starred": false})), None);
        assert!(sanitize_array_item(&json!({"starred": true})).is_some());
        assert!(sanitize_array_item(&json!({"count": 3})).is_some());
        assert!(sanitize_array_item(&json!({"note": "x"})).is_some());
    }

    #[test]
    fn drops_numbers_booleans_and_nested_arrays() {
        assert_eq!(sanitize_array_item(&json!(7)), None);
        assert_eq!(sanitize_array_item(&json!(true)), None);
        assert_eq!(sanitize_array_item(&json!(["x"])), None);
    }

    #[test]
    fn entry_keeps_visible_and_extra_properties() {
        let entry = sanitize_array_item(&json!({
            "name": "  Rust  ",
            "visible": false,
            "years": 5
        }))
        .unwrap();
        match entry {
            ListEntry::Entry(named) => {
                assert_eq!(named.name.as_deref(), Some("Rust"));
                assert_eq!(named.visible, Some(false));
                assert_eq!(named.extra.get("years"), Some(&json!(5)));
            }
            ListEntry::Text(_) => panic!("expected tagged entry"),
        }
    }

    #[test]
    fn non_string_name_does_not_count_as_name() {
        // The unusable name is dropped; retention falls back to the other
        // properties.
        assert_eq!(sanitize_array_item(&json!({"name": 5})), None);
        let kept = sanitize_array_item(&json!({"name": 5, "note": "x"})).unwrap();
        match kept {
            ListEntry::Entry(named) => assert_eq!(named.name, None),
            ListEntry::Text(_) => panic!("expected tagged entry"),
        }
    }

    #[test]
    fn clean_array_preserves_order() {
        let values = vec![
            json!("ok"),
            json!(""),
            json!({}),
            json!({"name": "keep"}),
            Value::Null,
            json!("  last  "),
        ];
        let cleaned = clean_array(&values);
        assert_eq!(
            cleaned,
            vec![
                ListEntry::text("ok"),
                ListEntry::named("keep"),
                ListEntry::text("last"),
            ]
        );
    }
}
