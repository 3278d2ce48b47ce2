//! Core data model for TextPin documents.
//!
//! A document is an ordered list of placed text items. Order is insertion
//! order; the id is the stable identity across moves. `StyleState` holds the
//! toggles applied to the *next* added item — changing it never touches
//! items already on the canvas.

use crate::id::ItemId;
use serde::{Deserialize, Serialize};

// ─── Text items ──────────────────────────────────────────────────────────

/// A single piece of text placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    /// Stable identity across moves.
    pub id: ItemId,
    /// The annotation text. Non-empty after trimming at creation; stored
    /// exactly as typed, surrounding whitespace included.
    pub text: String,
    /// Canvas-local position. Clamped into the viewport on every move.
    pub x: f32,
    pub y: f32,
    /// Font size in CSS pixels. Always >= 1.
    pub font_size_px: u32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextItem {
    /// CSS font weight for measurement: 700 when bold, 400 otherwise.
    pub fn font_weight(&self) -> u16 {
        if self.bold { 700 } else { 400 }
    }
}

// ─── Document ────────────────────────────────────────────────────────────

/// The complete TextPin document — placed items in insertion (paint) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    items: Vec<TextItem>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item at the end of the paint order.
    pub fn push(&mut self, item: TextItem) {
        self.items.push(item);
    }

    /// Look up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&TextItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up an item mutably by id.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut TextItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order. Reverse to walk topmost-first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TextItem> {
        self.items.iter()
    }
}

// ─── Style state ─────────────────────────────────────────────────────────

/// Minimum font size; decrements clamp here.
pub const MIN_FONT_SIZE_PX: u32 = 1;

/// The style toggles and font size applied to newly added text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub font_size_px: u32,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            font_size_px: 16,
        }
    }
}

impl StyleState {
    pub fn toggle_bold(&mut self) {
        self.bold = !self.bold;
    }

    pub fn toggle_italic(&mut self) {
        self.italic = !self.italic;
    }

    pub fn toggle_underline(&mut self) {
        self.underline = !self.underline;
    }

    /// Grow by one pixel. No ceiling.
    pub fn increase_font_size(&mut self) {
        self.font_size_px += 1;
    }

    /// Shrink by one pixel, clamping at `MIN_FONT_SIZE_PX`.
    pub fn decrease_font_size(&mut self) {
        self.font_size_px = self.font_size_px.saturating_sub(1).max(MIN_FONT_SIZE_PX);
    }
}
