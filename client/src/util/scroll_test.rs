use super::*;
use std::cell::Cell;

/// In-memory viewport that records how often it was scrolled.
#[derive(Debug, Default)]
struct FakeViewport {
    position: Cell<ScrollPosition>,
    scrolls: Cell<usize>,
}

impl Viewport for FakeViewport {
    fn scroll_to(&self, position: ScrollPosition) {
        self.position.set(position);
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn position(&self) -> ScrollPosition {
        self.position.get()
    }
}

#[test]
fn origin_is_top_left_zero() {
    assert_eq!(ScrollPosition::ORIGIN, ScrollPosition { top: 0.0, left: 0.0 });
    assert_eq!(ScrollPosition::default(), ScrollPosition::ORIGIN);
    assert!(ScrollPosition::ORIGIN.is_origin());
    assert!(!ScrollPosition { top: 1.0, left: 0.0 }.is_origin());
}

#[test]
fn reset_moves_scrolled_viewport_to_origin() {
    let viewport = FakeViewport::default();
    viewport.scroll_to(ScrollPosition { top: 640.0, left: 12.5 });

    reset(&viewport);

    assert_eq!(viewport.position(), ScrollPosition::ORIGIN);
    assert_eq!(viewport.scrolls.get(), 2);
}

#[test]
fn reset_scrolls_even_when_already_at_origin() {
    let viewport = FakeViewport::default();
    reset(&viewport);
    assert_eq!(viewport.scrolls.get(), 1);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn window_viewport_is_noop_outside_browser() {
    let viewport = WindowViewport;
    viewport.scroll_to(ScrollPosition { top: 50.0, left: 50.0 });
    assert_eq!(viewport.position(), ScrollPosition::ORIGIN);
    reset(&viewport);
}

#[test]
fn scroll_position_serializes_top_and_left() {
    let json = serde_json::to_value(ScrollPosition { top: 3.0, left: 4.0 }).unwrap();
    assert_eq!(json, serde_json::json!({ "top": 3.0, "left": 4.0 }));
}
