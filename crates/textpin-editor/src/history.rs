//! Snapshot-based undo/redo history.
//!
//! Every committed mutation stores a full copy of the document — no diffs,
//! no inverse operations. The undo stack always ends with the live state,
//! so `undo` pops first and then reads the new top; undoing the only
//! snapshot clears the canvas. Callers rely on that exact sequence.

use std::collections::VecDeque;
use textpin_core::model::Document;

/// Linear undo/redo stacks of full document snapshots.
///
/// Depth is unbounded; snapshots live until the session ends.
pub struct History {
    /// Past states, most recent last. Ends with the live state after a
    /// commit.
    undo_stack: Vec<Document>,
    /// Future states, most recent first.
    redo_stack: VecDeque<Document>,
    /// The live document.
    live: Document,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: VecDeque::new(),
            live: Document::new(),
        }
    }

    /// The live document.
    pub fn current(&self) -> &Document {
        &self.live
    }

    /// Commit a post-mutation snapshot and clear the redo stack.
    pub fn commit(&mut self, new_doc: Document) {
        self.undo_stack.push(new_doc.clone());
        self.live = new_doc;
        self.redo_stack.clear();
        log::debug!(
            "commit: {} snapshots, {} items live",
            self.undo_stack.len(),
            self.live.len()
        );
    }

    /// Step back one snapshot. Returns `false` if there is nothing to undo.
    ///
    /// The popped snapshot is the state being left; the new top of the
    /// undo stack (or the empty document) becomes live.
    pub fn undo(&mut self) -> bool {
        let Some(popped) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push_front(popped);
        self.live = self.undo_stack.last().cloned().unwrap_or_default();
        log::debug!("undo: {} snapshots remain", self.undo_stack.len());
        true
    }

    /// Step forward one snapshot. Returns `false` if there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop_front() else {
            return false;
        };
        self.live = next.clone();
        self.undo_stack.push(next);
        log::debug!("redo: {} snapshots", self.undo_stack.len());
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack.
    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }
}
