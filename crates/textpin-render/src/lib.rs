pub mod hit;
pub mod view;

pub use hit::hit_test;
pub use view::{RenderItem, render_document, render_json};
