pub mod drag;
pub mod history;
pub mod input;
pub mod session;
pub mod shortcuts;

pub use drag::{DragController, DragEffect, DragEffects, DragState};
pub use history::History;
pub use input::{InputEvent, PointerSource};
pub use session::{INITIAL_POSITION, Session};
pub use shortcuts::{ShortcutAction, ShortcutMap};
