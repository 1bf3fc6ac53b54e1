//! Saved professional-summary variants.

use serde::{Deserialize, Serialize};

/// A target-keyed saved variant of the professional summary.
///
/// `target` names the audience the summary was written for (a company, a
/// role family). At most one variant exists per case-insensitive target;
/// the registry enforcing that invariant lives in the session layer.
/// Timestamps are RFC 3339 strings and are volatile for comparison
/// purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedSummary {
    pub id: String,
    pub target: String,
    pub summary: String,
    pub created_at: String,
    pub last_used: String,
}

impl NamedSummary {
    /// Case-insensitive target comparison, the registry's identity rule.
    pub fn matches_target(&self, target: &str) -> bool {
        self.target.eq_ignore_ascii_case(target.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_match_ignores_case_and_padding() {
        let summary = NamedSummary {
            id: "abc".into(),
            target: "Acme Corp".into(),
            summary: "draft".into(),
            created_at: "2026-01-01T00:00:00Z".into(),
            last_used: "2026-01-01T00:00:00Z".into(),
        };
        assert!(summary.matches_target("acme corp"));
        assert!(summary.matches_target("  ACME CORP  "));
        assert!(!summary.matches_target("Other"));
    }
}
