pub mod id;
pub mod layout;
pub mod measure;
pub mod model;

pub use id::ItemId;
pub use layout::{CanvasOrigin, ItemBounds, Viewport, clamp_to_viewport, item_bounds};
pub use measure::{FONT_FAMILY, FixedAdvanceMeasure, TextMeasure};
pub use model::*;
