//! The bounded snapshot log.

use std::collections::VecDeque;

use resume_model::ResumeDocument;

/// Default number of snapshots retained.
pub const HISTORY_CAPACITY: usize = 50;

/// An ordered list of immutable document snapshots with a cursor.
///
/// The cursor points at the current document. A commit discards everything
/// beyond the cursor (a redo tail cannot survive a new edit), appends, and
/// evicts the oldest snapshot once the log exceeds capacity. Undo and redo
/// only move the cursor; they never change the log.
#[derive(Debug, Clone)]
pub struct MutationHistory {
    snapshots: VecDeque<ResumeDocument>,
    cursor: usize,
    capacity: usize,
}

impl MutationHistory {
    /// Start a history seeded with the initial document.
    pub fn new(initial: ResumeDocument) -> Self {
        Self::with_capacity(initial, HISTORY_CAPACITY)
    }

    /// Start a history with an explicit capacity (at least one snapshot).
    pub fn with_capacity(initial: ResumeDocument, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut snapshots = VecDeque::with_capacity(capacity);
        snapshots.push_back(initial);
        Self {
            snapshots,
            cursor: 0,
            capacity,
        }
    }

    /// The snapshot the cursor points at.
    pub fn current(&self) -> &ResumeDocument {
        // The log always holds at least the seed snapshot.
        &self.snapshots[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Record a new current document.
    pub fn commit(&mut self, document: ResumeDocument) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(document);
        if self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot. No-op at the oldest retained snapshot.
    pub fn undo(&mut self) -> Option<&ResumeDocument> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one snapshot. No-op at the newest snapshot.
    pub fn redo(&mut self) -> Option<&ResumeDocument> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> ResumeDocument {
        let mut document = ResumeDocument::default();
        document.basics.name = name.to_string();
        document
    }

    #[test]
    fn undo_walks_back_to_the_initial_document() {
        let mut history = MutationHistory::new(doc("initial"));
        for index in 0..5 {
            history.commit(doc(&format!("edit {index}")));
        }
        for _ in 0..5 {
            history.undo();
        }
        assert_eq!(history.current().basics.name, "initial");
        // At the first index undo is a no-op.
        assert!(history.undo().is_none());
        assert_eq!(history.current().basics.name, "initial");
    }

    #[test]
    fn redo_restores_the_most_recent_commit() {
        let mut history = MutationHistory::new(doc("initial"));
        history.commit(doc("edit"));
        assert_eq!(history.undo().unwrap().basics.name, "initial");
        assert_eq!(history.redo().unwrap().basics.name, "edit");
        assert!(history.redo().is_none());
    }

    #[test]
    fn commit_after_undo_discards_the_redo_tail() {
        let mut history = MutationHistory::new(doc("initial"));
        history.commit(doc("a"));
        history.commit(doc("b"));
        history.undo();
        history.undo();
        history.commit(doc("c"));
        assert_eq!(history.current().basics.name, "c");
        assert!(history.redo().is_none());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn capacity_evicts_the_oldest_snapshot() {
        let mut history = MutationHistory::with_capacity(doc("initial"), 50);
        for index in 0..60 {
            history.commit(doc(&format!("edit {index}")));
        }
        assert_eq!(history.len(), 50);
        assert_eq!(history.current().basics.name, "edit 59");

        // 49 moves reach the oldest retained snapshot; the 50th is a no-op.
        for _ in 0..50 {
            history.undo();
        }
        assert!(!history.can_undo());
        // The original seed was evicted; the oldest retained is a later edit.
        assert_eq!(history.current().basics.name, "edit 10");
    }

    #[test]
    fn eviction_keeps_the_cursor_on_the_newest() {
        let mut history = MutationHistory::with_capacity(doc("initial"), 3);
        history.commit(doc("a"));
        history.commit(doc("b"));
        history.commit(doc("c"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().basics.name, "c");
        assert_eq!(history.undo().unwrap().basics.name, "b");
        assert_eq!(history.undo().unwrap().basics.name, "a");
        assert!(history.undo().is_none());
    }
}
