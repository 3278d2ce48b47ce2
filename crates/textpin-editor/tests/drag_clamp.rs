//! Integration tests: drag gestures and boundary clamping.
//!
//! Drives the DragController with normalized pointer events and verifies
//! clamped positions, listener acquire/release pairing, and the
//! one-commit-per-move history contract.

use textpin_core::layout::{CanvasOrigin, Viewport};
use textpin_core::measure::TextMeasure;
use textpin_editor::drag::{DragController, DragEffect};
use textpin_editor::input::{InputEvent, PointerSource};
use textpin_editor::session::Session;

const CANVAS: Viewport = Viewport {
    width: 300.0,
    height: 200.0,
};

/// Every string measures to the same fixed width.
struct FixedWidth(f32);

impl TextMeasure for FixedWidth {
    fn measure(&self, _text: &str, _weight: u16, _size_px: f32, _family: &str) -> f32 {
        self.0
    }
}

fn make_session() -> Session {
    Session::new(CANVAS, CanvasOrigin::default())
}

// ─── Clamping ───────────────────────────────────────────────────────────

#[test]
fn far_pointer_clamps_to_bottom_right() {
    let mut session = make_session();
    let id = session.add_text("note").unwrap();

    // width 50, font 16 on a 300x200 canvas
    assert!(session.move_text(id, 1000.0, 1000.0, &FixedWidth(50.0)));

    let item = session.document().get(id).unwrap();
    assert_eq!((item.x, item.y), (250.0, 184.0));
}

#[test]
fn oversized_text_pins_to_the_left_edge() {
    let mut session = make_session();
    let id = session.add_text("a very long annotation").unwrap();

    // upper bound is 300 - 400 = -100; the floor wins
    session.move_text(id, 120.0, 50.0, &FixedWidth(400.0));

    let item = session.document().get(id).unwrap();
    assert_eq!(item.x, 0.0, "negative upper bound pins x to 0");
    assert_eq!(item.y, 50.0);
}

#[test]
fn canvas_origin_is_subtracted_from_raw_coordinates() {
    let mut session = Session::new(CANVAS, CanvasOrigin { left: 10.0, top: 20.0 });
    let id = session.add_text("note").unwrap();

    session.move_text(id, 110.0, 120.0, &FixedWidth(50.0));

    let item = session.document().get(id).unwrap();
    assert_eq!((item.x, item.y), (100.0, 100.0));
}

#[test]
fn move_on_unknown_id_is_a_noop() {
    let mut session = make_session();
    session.add_text("note");
    let depth = session.history().depth();

    let stray = textpin_core::ItemId::next();
    assert!(!session.move_text(stray, 10.0, 10.0, &FixedWidth(50.0)));
    assert_eq!(
        session.history().depth(),
        depth,
        "a rejected move must not commit"
    );
}

// ─── Gesture lifecycle ──────────────────────────────────────────────────

#[test]
fn gesture_acquires_then_releases_listeners() {
    let mut session = make_session();
    let id = session.add_text("note").unwrap();
    let mut drag = DragController::new();
    let measure = FixedWidth(50.0);

    let down = InputEvent::from_pointer_down(150.0, 150.0, PointerSource::Mouse);
    let effects = drag.handle(&down, Some(id), &mut session, &measure);
    assert_eq!(
        effects.as_slice(),
        [DragEffect::AcquireMoveListeners(PointerSource::Mouse)]
    );
    assert!(drag.is_dragging());

    let mv = InputEvent::from_pointer_move(40.0, 60.0, PointerSource::Mouse);
    let effects = drag.handle(&mv, None, &mut session, &measure);
    assert_eq!(effects.as_slice(), [DragEffect::Moved(id)]);
    let item = session.document().get(id).unwrap();
    assert_eq!((item.x, item.y), (40.0, 60.0));

    let up = InputEvent::from_pointer_up(PointerSource::Mouse);
    let effects = drag.handle(&up, None, &mut session, &measure);
    assert_eq!(
        effects.as_slice(),
        [DragEffect::ReleaseMoveListeners(PointerSource::Mouse)]
    );
    assert!(!drag.is_dragging());
}

#[test]
fn down_on_empty_canvas_starts_nothing() {
    let mut session = make_session();
    session.add_text("note");
    let mut drag = DragController::new();
    let measure = FixedWidth(50.0);

    let down = InputEvent::from_pointer_down(5.0, 5.0, PointerSource::Touch);
    let effects = drag.handle(&down, None, &mut session, &measure);
    assert!(effects.is_empty());
    assert!(!drag.is_dragging());
}

#[test]
fn moves_are_ignored_while_idle() {
    let mut session = make_session();
    let id = session.add_text("note").unwrap();
    let mut drag = DragController::new();
    let depth = session.history().depth();

    let mv = InputEvent::from_pointer_move(40.0, 60.0, PointerSource::Mouse);
    let effects = drag.handle(&mv, Some(id), &mut session, &FixedWidth(50.0));
    assert!(effects.is_empty());
    assert_eq!(session.history().depth(), depth, "idle move must not commit");
}

#[test]
fn moves_from_the_other_source_are_ignored() {
    let mut session = make_session();
    let id = session.add_text("note").unwrap();
    let mut drag = DragController::new();
    let measure = FixedWidth(50.0);

    let down = InputEvent::from_pointer_down(150.0, 150.0, PointerSource::Touch);
    drag.handle(&down, Some(id), &mut session, &measure);

    // A touch gesture has no mouse listeners registered.
    let mv = InputEvent::from_pointer_move(40.0, 60.0, PointerSource::Mouse);
    let effects = drag.handle(&mv, None, &mut session, &measure);
    assert!(effects.is_empty());

    let up = InputEvent::from_pointer_up(PointerSource::Mouse);
    let effects = drag.handle(&up, None, &mut session, &measure);
    assert!(effects.is_empty());
    assert!(drag.is_dragging(), "mouse up must not end a touch gesture");
}

#[test]
fn cancel_releases_held_listeners() {
    let mut session = make_session();
    let id = session.add_text("note").unwrap();
    let mut drag = DragController::new();
    let measure = FixedWidth(50.0);

    let down = InputEvent::from_pointer_down(150.0, 150.0, PointerSource::Touch);
    drag.handle(&down, Some(id), &mut session, &measure);

    let effects = drag.cancel();
    assert_eq!(
        effects.as_slice(),
        [DragEffect::ReleaseMoveListeners(PointerSource::Touch)]
    );
    assert!(!drag.is_dragging());

    // Cancelling again is a no-op.
    assert!(drag.cancel().is_empty());
}

// ─── History granularity ────────────────────────────────────────────────

#[test]
fn each_move_commits_its_own_history_step() {
    let mut session = make_session();
    let id = session.add_text("note").unwrap();
    let mut drag = DragController::new();
    let measure = FixedWidth(50.0);

    let down = InputEvent::from_pointer_down(150.0, 150.0, PointerSource::Mouse);
    drag.handle(&down, Some(id), &mut session, &measure);

    let depth_before = session.history().depth();
    for (x, y) in [(10.0, 10.0), (20.0, 30.0), (30.0, 50.0)] {
        let mv = InputEvent::from_pointer_move(x, y, PointerSource::Mouse);
        drag.handle(&mv, None, &mut session, &measure);
    }
    assert_eq!(
        session.history().depth(),
        depth_before + 3,
        "moves must not be coalesced into one undo step"
    );

    // Undo walks back through the gesture one move at a time.
    session.undo();
    let item = session.document().get(id).unwrap();
    assert_eq!((item.x, item.y), (20.0, 30.0));
    session.undo();
    let item = session.document().get(id).unwrap();
    assert_eq!((item.x, item.y), (10.0, 10.0));
}
