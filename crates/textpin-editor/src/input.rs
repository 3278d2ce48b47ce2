//! Input abstraction layer.
//!
//! Normalizes mouse and touch events into a unified `InputEvent` enum
//! consumed by the drag controller. Coordinates are raw client
//! coordinates; the session subtracts the canvas origin.

/// Which device produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A normalized input event from any pointing device.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown {
        x: f32,
        y: f32,
        source: PointerSource,
    },

    /// Pointer moved (mouse move, touch move).
    PointerMove {
        x: f32,
        y: f32,
        source: PointerSource,
    },

    /// Pointer released (mouse up, touch end). Touch end carries no
    /// coordinates, so none are recorded for either device.
    PointerUp { source: PointerSource },

    /// Keyboard input.
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    },
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32, source: PointerSource) -> Self {
        Self::PointerDown { x, y, source }
    }

    pub fn from_pointer_move(x: f32, y: f32, source: PointerSource) -> Self {
        Self::PointerMove { x, y, source }
    }

    pub fn from_pointer_up(source: PointerSource) -> Self {
        Self::PointerUp { source }
    }

    /// Extract position if this event carries one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y, .. } | Self::PointerMove { x, y, .. } => Some((*x, *y)),
            _ => None,
        }
    }
}
