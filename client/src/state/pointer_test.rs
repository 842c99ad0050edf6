use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::test_helpers::ManualPointerSource;

fn tracked(source: &ManualPointerSource) -> (PointerTracker, Rc<Cell<PointerPosition>>) {
    let position = Rc::new(Cell::new(PointerPosition::default()));
    let sink = Rc::clone(&position);
    let tracker = PointerTracker::mount(source, move |p| {
        let mut current = sink.get();
        current.on_pointer_move(p.x, p.y);
        sink.set(current);
    });
    (tracker, position)
}

// =============================================================
// PointerPosition
// =============================================================

#[test]
fn position_starts_at_origin() {
    assert_eq!(PointerPosition::default(), PointerPosition::new(0.0, 0.0));
}

#[test]
fn on_pointer_move_replaces_unvalidated() {
    let mut position = PointerPosition::default();
    position.on_pointer_move(-5.0, 10_000.0);
    assert_eq!(position, PointerPosition::new(-5.0, 10_000.0));
    position.on_pointer_move(0.0, 0.0);
    assert_eq!(position, PointerPosition::default());
}

#[test]
fn glow_anchor_offsets_by_radius() {
    let anchor = PointerPosition::new(150.0, 300.0).glow_anchor();
    assert_eq!(anchor, GlowAnchor { left: -42.0, top: 108.0 });
}

#[test]
fn glow_anchor_style_uses_pixels() {
    let anchor = PointerPosition::new(150.0, 300.0).glow_anchor();
    assert_eq!(anchor.to_style(), "left: -42px; top: 108px;");
}

#[test]
fn glow_anchor_at_origin() {
    let anchor = PointerPosition::default().glow_anchor();
    assert_eq!(anchor, GlowAnchor { left: -GLOW_RADIUS_PX, top: -GLOW_RADIUS_PX });
}

// =============================================================
// PointerTracker
// =============================================================

#[test]
fn tracker_keeps_last_move() {
    let source = ManualPointerSource::default();
    let (_tracker, position) = tracked(&source);

    source.emit(10.0, 20.0);
    source.emit(640.0, 12.5);
    source.emit(150.0, 300.0);

    assert_eq!(position.get(), PointerPosition::new(150.0, 300.0));
}

#[test]
fn tracker_last_write_wins_over_many_moves() {
    let source = ManualPointerSource::default();
    let (_tracker, position) = tracked(&source);

    for i in 0..500_u32 {
        source.emit(f64::from(i), f64::from(i * 2));
    }
    assert_eq!(position.get(), PointerPosition::new(499.0, 998.0));
}

#[test]
fn unmount_stops_further_updates() {
    let source = ManualPointerSource::default();
    let (mut tracker, position) = tracked(&source);

    source.emit(150.0, 300.0);
    tracker.unmount();
    source.emit(1.0, 1.0);

    assert!(!tracker.is_mounted());
    assert_eq!(source.listener_count(), 0);
    assert_eq!(position.get(), PointerPosition::new(150.0, 300.0));
}

#[test]
fn double_unmount_detaches_once() {
    let source = ManualPointerSource::default();
    let (mut tracker, _position) = tracked(&source);

    tracker.unmount();
    tracker.unmount();
    drop(tracker);

    assert_eq!(source.detach_calls(), 1);
}

#[test]
fn dropping_tracker_detaches_listener() {
    let source = ManualPointerSource::default();
    let (tracker, position) = tracked(&source);
    assert_eq!(source.listener_count(), 1);

    drop(tracker);
    source.emit(9.0, 9.0);

    assert_eq!(source.listener_count(), 0);
    assert_eq!(position.get(), PointerPosition::default());
}
