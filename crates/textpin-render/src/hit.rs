//! Hit testing: point → item lookup.
//!
//! Walks items front-to-back (reverse insertion order, last painted is
//! topmost) and returns the first whose rendered bounds contain the point.

use textpin_core::id::ItemId;
use textpin_core::layout::item_bounds;
use textpin_core::measure::TextMeasure;
use textpin_core::model::Document;

/// Find the topmost item at canvas-local position (px, py).
/// Returns `None` if the point hits the background.
pub fn hit_test(
    document: &Document,
    px: f32,
    py: f32,
    measure: &dyn TextMeasure,
) -> Option<ItemId> {
    for item in document.iter().rev() {
        if item_bounds(item, measure).contains(px, py) {
            log::trace!("hit {} at ({px}, {py})", item.id);
            return Some(item.id);
        }
    }
    None
}
