//! Drag controller: pointer events → committed position updates.
//!
//! An explicit state machine replaces per-gesture listener juggling. The
//! host performs the actual listener (de)registration in response to the
//! returned effects; the controller guarantees one release for every
//! acquire, on every exit path including `cancel`.

use crate::input::{InputEvent, PointerSource};
use crate::session::Session;
use smallvec::{SmallVec, smallvec};
use textpin_core::id::ItemId;
use textpin_core::measure::TextMeasure;

/// Effects for the host to apply after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    /// Register move/up listeners for this pointer source.
    AcquireMoveListeners(PointerSource),
    /// Deregister them. Emitted on pointer-up and on `cancel`.
    ReleaseMoveListeners(PointerSource),
    /// The item moved; one history step was committed.
    Moved(ItemId),
}

/// Effects emitted for a single input event.
pub type DragEffects = SmallVec<[DragEffect; 2]>;

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A drag is in progress on `item`, driven by `source`.
    Dragging {
        item: ItemId,
        source: PointerSource,
    },
}

/// Per-gesture drag state machine.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feed one input event. `hit` is the item under the pointer at
    /// pointer-down (hosts compute it via hit testing); it is ignored for
    /// every other event kind.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        hit: Option<ItemId>,
        session: &mut Session,
        measure: &dyn TextMeasure,
    ) -> DragEffects {
        match event {
            InputEvent::PointerDown { source, .. } => {
                if self.is_dragging() {
                    return smallvec![];
                }
                let Some(item) = hit else {
                    return smallvec![];
                };
                self.state = DragState::Dragging {
                    item,
                    source: *source,
                };
                log::trace!("drag start on {item}");
                smallvec![DragEffect::AcquireMoveListeners(*source)]
            }

            InputEvent::PointerMove { x, y, source } => {
                let DragState::Dragging {
                    item,
                    source: drag_source,
                } = self.state
                else {
                    return smallvec![];
                };
                // Only the device that started the gesture has listeners.
                if *source != drag_source {
                    return smallvec![];
                }
                if session.move_text(item, *x, *y, measure) {
                    smallvec![DragEffect::Moved(item)]
                } else {
                    smallvec![]
                }
            }

            InputEvent::PointerUp { source } => {
                let DragState::Dragging {
                    source: drag_source,
                    ..
                } = self.state
                else {
                    return smallvec![];
                };
                if *source != drag_source {
                    return smallvec![];
                }
                self.state = DragState::Idle;
                log::trace!("drag end");
                smallvec![DragEffect::ReleaseMoveListeners(drag_source)]
            }

            InputEvent::Key { .. } => smallvec![],
        }
    }

    /// Abort any active gesture, releasing held listeners. For abnormal
    /// exits (focus loss, element removal) where no pointer-up arrives.
    pub fn cancel(&mut self) -> DragEffects {
        match std::mem::take(&mut self.state) {
            DragState::Idle => smallvec![],
            DragState::Dragging { source, .. } => {
                log::trace!("drag cancelled");
                smallvec![DragEffect::ReleaseMoveListeners(source)]
            }
        }
    }
}
