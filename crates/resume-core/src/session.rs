//! The editing session: single owner of the current document.
//!
//! All mutation goes through [`EditorSession`], which routes every change
//! through the history's `commit`. The `&mut self` receivers are the
//! critical-section mechanism: while an import or edit is in flight no
//! other commit can interleave, and a failed operation returns before any
//! state is touched.

use serde_json::Value;
use tracing::debug;

use resume_history::{MutationHistory, SaveTracker};
use resume_model::ResumeDocument;
use resume_schema::SchemaError;

use crate::action::{EditAction, apply_action};
use crate::error::EditError;
use crate::import::import_document;

#[derive(Debug)]
pub struct EditorSession {
    history: MutationHistory,
    save: SaveTracker,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(ResumeDocument::default())
    }
}

impl EditorSession {
    /// Open a session on an initial document (template or imported file).
    pub fn new(initial: ResumeDocument) -> Self {
        Self {
            history: MutationHistory::new(initial),
            save: SaveTracker::new(),
        }
    }

    /// Open a session with an explicit history capacity.
    pub fn with_history_capacity(initial: ResumeDocument, capacity: usize) -> Self {
        Self {
            history: MutationHistory::with_capacity(initial, capacity),
            save: SaveTracker::new(),
        }
    }

    /// The current canonical document. Read-only: renderers and exporters
    /// consume this and never mutate.
    pub fn document(&self) -> &ResumeDocument {
        self.history.current()
    }

    pub fn is_dirty(&self) -> bool {
        self.save.is_dirty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Record an explicit, successful save.
    pub fn mark_saved(&mut self) {
        self.save.mark_saved();
    }

    /// Apply one edit action and commit the result.
    ///
    /// # Errors
    ///
    /// The action's own rejection; the document and history are untouched.
    pub fn apply(&mut self, action: &EditAction) -> Result<&ResumeDocument, EditError> {
        let next = apply_action(self.history.current(), action)?;
        self.commit(next);
        Ok(self.document())
    }

    /// Replace the whole document in exactly one commit. This is the
    /// landing point for successful imports.
    pub fn replace(&mut self, document: ResumeDocument) -> &ResumeDocument {
        self.commit(document);
        self.document()
    }

    /// Reset to the default template. A reset is itself a commit, so it is
    /// undoable like any other edit.
    pub fn reset(&mut self) -> &ResumeDocument {
        self.commit(ResumeDocument::default());
        self.document()
    }

    /// Parse a JSON payload and, on success, commit it as the new
    /// document.
    ///
    /// # Errors
    ///
    /// Whatever the import wrapper reports. A failed import never
    /// partially applies: no commit happens and the current document is
    /// unchanged.
    pub fn import_value(&mut self, raw: &Value) -> Result<&ResumeDocument, SchemaError> {
        let document = import_document(raw)?;
        self.commit(document);
        Ok(self.document())
    }

    /// Step back one snapshot. Leaves the document dirty whenever the
    /// cursor moved, byte-identical snapshots included.
    pub fn undo(&mut self) -> Option<&ResumeDocument> {
        if self.history.undo().is_some() {
            self.save.mark_dirty();
            Some(self.history.current())
        } else {
            None
        }
    }

    /// Step forward one snapshot. Same dirty semantics as [`Self::undo`].
    pub fn redo(&mut self) -> Option<&ResumeDocument> {
        if self.history.redo().is_some() {
            self.save.mark_dirty();
            Some(self.history.current())
        } else {
            None
        }
    }

    fn commit(&mut self, document: ResumeDocument) {
        self.history.commit(document);
        self.save.mark_dirty();
        debug!(snapshots = self.history.len(), "committed document snapshot");
    }
}
