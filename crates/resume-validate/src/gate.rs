//! The structural precheck applied to every external document.
//!
//! The gate is deliberately cheap: it checks aggregate types only (the
//! root, `basics`, and each fixed list-section key). Element-level
//! malformation is the normalization engine's job to repair, never a
//! reason to reject. This is the only layer permitted to reject an
//! external document outright; the normalizer is never invoked on input
//! that failed here.

use serde_json::Value;

use resume_model::SectionKey;

use crate::report::ValidationReport;

/// Gate one external payload before it is trusted.
pub fn validate(raw: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(root) = raw.as_object() else {
        report.push("document", "root must be a JSON object");
        return report;
    };

    if let Some(basics) = root.get("basics")
        && !basics.is_object()
    {
        report.push("basics", "must be an object when present");
    }

    for key in SectionKey::ALL {
        if let Some(section) = root.get(key.as_str())
            && !section.is_array()
        {
            report.push(key.as_str(), "must be an array when present");
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_empty_object() {
        assert!(validate(&json!({})).is_valid());
    }

    #[test]
    fn rejects_non_object_roots() {
        for raw in [json!(null), json!("x"), json!(3), json!([1])] {
            let report = validate(&raw);
            assert!(!report.is_valid());
            assert_eq!(report.issues[0].field, "document");
        }
    }

    #[test]
    fn rejects_non_object_basics() {
        let report = validate(&json!({"basics": []}));
        assert!(!report.is_valid());
        assert_eq!(report.issues[0].field, "basics");
    }

    #[test]
    fn rejects_non_array_sections() {
        let report = validate(&json!({"work": {}, "skills": "x", "education": []}));
        let fields: Vec<&str> = report
            .issues
            .iter()
            .map(|issue| issue.field.as_str())
            .collect();
        assert_eq!(fields, vec!["work", "skills"]);
    }

    #[test]
    fn element_level_malformation_passes_the_gate() {
        // Broken items are the normalizer's job, not a rejection.
        let raw = json!({"work": [null, "junk", {"highlights": 5}]});
        assert!(validate(&raw).is_valid());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert!(validate(&json!({"somethingElse": 5})).is_valid());
    }
}
