//! Brush gesture tests for heatview
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{build, grid_3x3, values};
use heatview::{BrushTracker, Dimensions, DragArea, PixelRect, Point, ShapeViewModel};

fn square() -> Dimensions {
    Dimensions::new(0.0, 0.0, 300.0, 300.0)
}

#[test]
fn drag_previews_then_reports_the_area() {
    let model = build(&grid_3x3(), square());
    let mut brush = BrushTracker::new();

    brush.begin(Point::new(50.0, 50.0));
    brush.update(Point::new(150.0, 250.0));
    assert_eq!(
        brush.preview(&model),
        Some(PixelRect {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 300.0
        })
    );

    let mut events: Vec<DragArea> = Vec::new();
    let area = brush
        .finish(&model, Point::new(150.0, 250.0), |area| events.push(area.clone()))
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0], area);
    assert_eq!(area.cells.len(), 6);
    assert_eq!(area.x, values(&["a", "b"]));
    assert!(!brush.is_dragging());
    assert!(brush.preview(&model).is_none());
}

#[test]
fn finish_without_begin_is_ignored() {
    let model = build(&grid_3x3(), square());
    let mut brush = BrushTracker::new();
    let mut called = false;
    assert!(brush
        .finish(&model, Point::new(10.0, 10.0), |_| called = true)
        .is_none());
    assert!(!called);
}

#[test]
fn gesture_finishes_against_the_generation_it_is_given() {
    let old = build(&grid_3x3(), square());
    let mut brush = BrushTracker::new();
    brush.begin(Point::new(10.0, 10.0));

    // A rebuild mid-gesture: the caller keeps passing the old generation.
    let _new = ShapeViewModel::empty();
    let area = brush.finish(&old, Point::new(290.0, 290.0), |_| {}).unwrap();
    assert_eq!(area.cells.len(), 9);
}

#[test]
fn cancel_drops_the_gesture() {
    let model = build(&grid_3x3(), square());
    let mut brush = BrushTracker::new();
    brush.begin(Point::new(10.0, 10.0));
    brush.cancel();
    assert!(brush
        .finish(&model, Point::new(200.0, 200.0), |_| {})
        .is_none());
}
