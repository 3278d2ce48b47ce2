//! Render view model.
//!
//! Flattens the document into host-consumable items carrying the CSS
//! vocabulary (`font-weight`, `font-style`, `text-decoration`) so webview
//! hosts can apply styles without re-deriving them from flags.

use serde::Serialize;
use textpin_core::id::ItemId;
use textpin_core::model::{Document, TextItem};

/// One positioned, styled text element ready for the host surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem {
    pub id: ItemId,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size_px: u32,
    /// `"bold"` or `"normal"`.
    pub font_weight: &'static str,
    /// `"italic"` or `"normal"`.
    pub font_style: &'static str,
    /// `"underline"` or `"none"`.
    pub text_decoration: &'static str,
}

impl RenderItem {
    fn from_item(item: &TextItem) -> Self {
        Self {
            id: item.id,
            text: item.text.clone(),
            x: item.x,
            y: item.y,
            font_size_px: item.font_size_px,
            font_weight: if item.bold { "bold" } else { "normal" },
            font_style: if item.italic { "italic" } else { "normal" },
            text_decoration: if item.underline { "underline" } else { "none" },
        }
    }
}

/// The document in paint order as render items.
#[must_use]
pub fn render_document(document: &Document) -> Vec<RenderItem> {
    document.iter().map(RenderItem::from_item).collect()
}

/// The render list serialized as JSON for webview hosts.
#[must_use]
pub fn render_json(document: &Document) -> String {
    serde_json::to_string(&render_document(document)).unwrap_or_default()
}
