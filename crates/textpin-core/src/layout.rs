//! Viewport geometry and boundary clamping.
//!
//! Positions are canvas-local. A move clamps x into
//! `[0, viewport.width - text_width]` and y into
//! `[0, viewport.height - font_size]`. The floor is applied after the
//! ceiling, so when the text is wider than the canvas the coordinate pins
//! to 0 and the item hangs off the right edge.

use crate::measure::{FONT_FAMILY, TextMeasure};
use crate::model::TextItem;

/// The canvas (viewport) dimensions.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Offset of the canvas within the host window. Raw pointer coordinates
/// are translated by this before clamping.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasOrigin {
    pub left: f32,
    pub top: f32,
}

/// Clamp a candidate position into the viewport.
///
/// `max` runs after `min`: a negative upper bound yields 0, never an
/// off-canvas negative coordinate.
pub fn clamp_to_viewport(
    x: f32,
    y: f32,
    text_width: f32,
    font_size_px: u32,
    viewport: Viewport,
) -> (f32, f32) {
    let cx = x.min(viewport.width - text_width).max(0.0);
    let cy = y.min(viewport.height - font_size_px as f32).max(0.0);
    (cx, cy)
}

/// Axis-aligned bounds of a rendered item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ItemBounds {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Bounds of an item as rendered: measured width by font-size height.
pub fn item_bounds(item: &TextItem, measure: &dyn TextMeasure) -> ItemBounds {
    let width = measure.measure(
        &item.text,
        item.font_weight(),
        item.font_size_px as f32,
        FONT_FAMILY,
    );
    ItemBounds {
        x: item.x,
        y: item.y,
        width,
        height: item.font_size_px as f32,
    }
}
