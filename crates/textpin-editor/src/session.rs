//! The session engine — owner of all mutable editor state.
//!
//! A `Session` holds the live document (through its history), the active
//! style toggles, the draft text, and the canvas geometry. Every mutating
//! operation commits a full snapshot; there is no coalescing, so each drag
//! move is individually undoable.

use crate::history::History;
use crate::shortcuts::ShortcutAction;
use textpin_core::id::ItemId;
use textpin_core::layout::{CanvasOrigin, Viewport, clamp_to_viewport};
use textpin_core::measure::{FONT_FAMILY, TextMeasure};
use textpin_core::model::{Document, StyleState, TextItem};

/// Where newly added text lands before the user drags it.
pub const INITIAL_POSITION: (f32, f32) = (150.0, 150.0);

/// Authoritative editor state: document history, style toggles, draft
/// text, and canvas geometry.
pub struct Session {
    history: History,
    style: StyleState,
    draft: String,
    viewport: Viewport,
    origin: CanvasOrigin,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Viewport::default(), CanvasOrigin::default())
    }
}

impl Session {
    #[must_use]
    pub fn new(viewport: Viewport, origin: CanvasOrigin) -> Self {
        Self {
            history: History::new(),
            style: StyleState::default(),
            draft: String::new(),
            viewport,
            origin,
        }
    }

    // ─── Accessors ──────────────────────────────────────────────────────

    pub fn document(&self) -> &Document {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ─── Draft text ─────────────────────────────────────────────────────

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Add the draft to the canvas. The draft is cleared only when the
    /// add succeeds; a whitespace-only draft stays in the field.
    pub fn submit_draft(&mut self) -> Option<ItemId> {
        let draft = self.draft.clone();
        let id = self.add_text(&draft)?;
        self.draft.clear();
        Some(id)
    }

    // ─── Mutations ──────────────────────────────────────────────────────

    /// Place `content` at the initial position with the active style.
    /// Whitespace-only content is a silent no-op.
    pub fn add_text(&mut self, content: &str) -> Option<ItemId> {
        if content.trim().is_empty() {
            return None;
        }
        let item = TextItem {
            id: ItemId::next(),
            text: content.to_string(),
            x: INITIAL_POSITION.0,
            y: INITIAL_POSITION.1,
            font_size_px: self.style.font_size_px,
            bold: self.style.bold,
            italic: self.style.italic,
            underline: self.style.underline,
        };
        let id = item.id;
        let mut doc = self.history.current().clone();
        doc.push(item);
        self.history.commit(doc);
        Some(id)
    }

    /// Move an item to the pointer position, clamped into the viewport.
    ///
    /// `raw_x`/`raw_y` are host (client) coordinates; the canvas origin
    /// is subtracted before clamping. Unknown ids are a silent no-op.
    /// Every call commits its own history step.
    pub fn move_text(
        &mut self,
        id: ItemId,
        raw_x: f32,
        raw_y: f32,
        measure: &dyn TextMeasure,
    ) -> bool {
        let candidate_x = raw_x - self.origin.left;
        let candidate_y = raw_y - self.origin.top;

        let Some(item) = self.history.current().get(id) else {
            log::trace!("move {id}: no such item");
            return false;
        };
        let width = measure.measure(
            &item.text,
            item.font_weight(),
            item.font_size_px as f32,
            FONT_FAMILY,
        );
        let (x, y) =
            clamp_to_viewport(candidate_x, candidate_y, width, item.font_size_px, self.viewport);

        let mut doc = self.history.current().clone();
        if let Some(item) = doc.get_mut(id) {
            item.x = x;
            item.y = y;
        }
        self.history.commit(doc);
        true
    }

    // ─── History ────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ─── Style toggles ──────────────────────────────────────────────────

    pub fn toggle_bold(&mut self) {
        self.style.toggle_bold();
    }

    pub fn toggle_italic(&mut self) {
        self.style.toggle_italic();
    }

    pub fn toggle_underline(&mut self) {
        self.style.toggle_underline();
    }

    pub fn increase_font_size(&mut self) {
        self.style.increase_font_size();
    }

    pub fn decrease_font_size(&mut self) {
        self.style.decrease_font_size();
    }

    // ─── Shortcut dispatch ──────────────────────────────────────────────

    /// Dispatch a resolved keyboard action onto the operations above.
    pub fn apply(&mut self, action: ShortcutAction) {
        match action {
            ShortcutAction::Undo => {
                self.undo();
            }
            ShortcutAction::Redo => {
                self.redo();
            }
            ShortcutAction::ToggleBold => self.toggle_bold(),
            ShortcutAction::ToggleItalic => self.toggle_italic(),
            ShortcutAction::ToggleUnderline => self.toggle_underline(),
            ShortcutAction::FontSizeUp => self.increase_font_size(),
            ShortcutAction::FontSizeDown => self.decrease_font_size(),
            ShortcutAction::AddText => {
                self.submit_draft();
            }
        }
    }
}
