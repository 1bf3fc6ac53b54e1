//! The named-summary registry.
//!
//! Saved summary variants are keyed by target. The invariant: at most one
//! entry per case-insensitive target; collisions resolve to the newest
//! `lastUsed`.

use chrono::Utc;
use sha2::Digest;
use tracing::debug;

use resume_model::NamedSummary;

#[derive(Debug, Clone, Default)]
pub struct SummaryStore {
    entries: Vec<NamedSummary>,
}

impl SummaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[NamedSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up by case-insensitive target.
    pub fn find(&self, target: &str) -> Option<&NamedSummary> {
        self.entries
            .iter()
            .find(|entry| entry.matches_target(target))
    }

    /// Save or update the variant for a target.
    ///
    /// An existing entry keeps its `createdAt` and identifier; its text,
    /// target spelling, and `lastUsed` take the new values.
    pub fn upsert(&mut self, target: &str, summary: &str) -> &NamedSummary {
        let target = target.trim();
        let now = Utc::now().to_rfc3339();
        match self
            .entries
            .iter()
            .position(|entry| entry.matches_target(target))
        {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.target = target.to_string();
                entry.summary = summary.to_string();
                entry.last_used = now;
                &self.entries[index]
            }
            None => {
                debug!(target, "saving new summary variant");
                self.entries.push(NamedSummary {
                    id: summary_id(target),
                    target: target.to_string(),
                    summary: summary.to_string(),
                    created_at: now.clone(),
                    last_used: now,
                });
                // Just pushed, so the last element exists.
                &self.entries[self.entries.len() - 1]
            }
        }
    }

    /// Refresh `lastUsed` for a target. Returns false when absent.
    pub fn touch(&mut self, target: &str) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.matches_target(target))
        {
            Some(entry) => {
                entry.last_used = Utc::now().to_rfc3339();
                true
            }
            None => false,
        }
    }

    /// Delete the variant for a target.
    pub fn remove(&mut self, target: &str) -> Option<NamedSummary> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.matches_target(target))?;
        Some(self.entries.remove(index))
    }

    /// Fold another store in, resolving target collisions to the entry
    /// with the newest `lastUsed`.
    pub fn merge(&mut self, other: SummaryStore) {
        for entry in other.entries {
            self.merge_entry(entry);
        }
    }

    fn merge_entry(&mut self, entry: NamedSummary) {
        match self
            .entries
            .iter()
            .position(|existing| existing.matches_target(&entry.target))
        {
            Some(index) => {
                // RFC 3339 UTC stamps compare lexicographically.
                if entry.last_used > self.entries[index].last_used {
                    self.entries[index] = entry;
                }
            }
            None => self.entries.push(entry),
        }
    }
}

/// Deterministic identifier: hex of the first 16 bytes of SHA-256 over the
/// lowercased target.
fn summary_id(target: &str) -> String {
    let mut hasher = sha2::Sha256::new();
    hasher.update(target.trim().to_lowercase().as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(target: &str, last_used: &str, summary: &str) -> NamedSummary {
        NamedSummary {
            id: summary_id(target),
            target: target.to_string(),
            summary: summary.to_string(),
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
            last_used: last_used.to_string(),
        }
    }

    #[test]
    fn upsert_is_unique_per_case_insensitive_target() {
        let mut store = SummaryStore::new();
        store.upsert("Acme Corp", "first draft");
        let created_at = store.find("acme corp").unwrap().created_at.clone();
        let id = store.find("acme corp").unwrap().id.clone();

        store.upsert("ACME CORP", "second draft");
        assert_eq!(store.len(), 1);
        let entry = store.find("acme corp").unwrap();
        assert_eq!(entry.summary, "second draft");
        assert_eq!(entry.target, "ACME CORP");
        assert_eq!(entry.created_at, created_at);
        assert_eq!(entry.id, id);
    }

    #[test]
    fn ids_are_deterministic_and_case_insensitive() {
        assert_eq!(summary_id("Acme"), summary_id("  acme "));
        assert_ne!(summary_id("Acme"), summary_id("Other"));
        assert_eq!(summary_id("Acme").len(), 32);
    }

    #[test]
    fn merge_keeps_the_newest_last_used() {
        let mut store = SummaryStore::new();
        store.merge_entry(entry("Acme", "2026-02-01T00:00:00+00:00", "newer"));

        let mut other = SummaryStore::new();
        other.merge_entry(entry("acme", "2026-01-15T00:00:00+00:00", "older"));
        other.merge_entry(entry("Globex", "2026-03-01T00:00:00+00:00", "only"));

        store.merge(other);
        assert_eq!(store.len(), 2);
        assert_eq!(store.find("ACME").unwrap().summary, "newer");
        assert_eq!(store.find("globex").unwrap().summary, "only");
    }

    #[test]
    fn merge_replaces_older_entries() {
        let mut store = SummaryStore::new();
        store.merge_entry(entry("Acme", "2026-01-01T00:00:00+00:00", "older"));

        let mut other = SummaryStore::new();
        other.merge_entry(entry("ACME", "2026-04-01T00:00:00+00:00", "newer"));
        store.merge(other);

        assert_eq!(store.len(), 1);
        assert_eq!(store.find("acme").unwrap().summary, "newer");
    }

    #[test]
    fn remove_and_touch() {
        let mut store = SummaryStore::new();
        store.upsert("Acme", "draft");
        assert!(store.touch("ACME"));
        assert!(!store.touch("missing"));
        assert!(store.remove("acme").is_some());
        assert!(store.is_empty());
        assert!(store.remove("acme").is_none());
    }
}
