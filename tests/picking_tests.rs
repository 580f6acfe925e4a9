//! Picking tests for heatview
//!
//! Point picks, drag areas, drag shapes and highlighted areas against built
//! view models, in canvas pixels.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{build, grid_3x3, temporal_strip, values};
use heatview::{Dimensions, DomainValue, PickedShapes, PixelRect, Point};

fn square() -> Dimensions {
    Dimensions::new(0.0, 0.0, 300.0, 300.0)
}

#[test]
fn drag_over_two_columns_selects_six_cells() {
    let model = build(&grid_3x3(), square());
    let area = model.pick_drag_area([Point::new(50.0, 50.0), Point::new(150.0, 250.0)]);
    assert_eq!(area.cells.len(), 6);
    assert_eq!(area.x, values(&["a", "b"]));
    assert_eq!(area.y, values(&["ya", "yb", "yc"]));

    // x outer, y inner
    let keys: Vec<(String, String)> = area
        .cells
        .iter()
        .map(|c| (c.datum.x.to_string(), c.datum.y.to_string()))
        .collect();
    assert_eq!(keys[0], ("a".to_string(), "ya".to_string()));
    assert_eq!(keys[1], ("a".to_string(), "yb".to_string()));
    assert_eq!(keys[3], ("b".to_string(), "ya".to_string()));
}

#[test]
fn drag_corners_can_come_in_any_order() {
    let model = build(&grid_3x3(), square());
    let forward = model.pick_drag_area([Point::new(50.0, 50.0), Point::new(150.0, 250.0)]);
    let backward = model.pick_drag_area([Point::new(150.0, 250.0), Point::new(50.0, 50.0)]);
    let crossed = model.pick_drag_area([Point::new(150.0, 50.0), Point::new(50.0, 250.0)]);
    assert_eq!(forward, backward);
    assert_eq!(forward, crossed);
}

#[test]
fn drag_beyond_viewport_equals_drag_to_edges() {
    let model = build(&grid_3x3(), square());
    let outside = model.pick_drag_area([Point::new(-100.0, -100.0), Point::new(1000.0, 1000.0)]);
    let edges = model.pick_drag_area([Point::new(0.0, 0.0), Point::new(300.0, 300.0)]);
    assert_eq!(outside, edges);
    assert_eq!(outside.cells.len(), 9);
}

#[test]
fn drag_shape_covers_the_dragged_bands() {
    let model = build(&grid_3x3(), square());
    let shape = model.pick_drag_shape([Point::new(50.0, 50.0), Point::new(150.0, 250.0)]);
    assert_eq!(
        shape,
        Some(PixelRect {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 300.0
        })
    );
}

#[test]
fn highlighted_area_extends_one_cell_past_the_right_column() {
    let model = build(&grid_3x3(), square());
    let rect = model
        .pick_highlighted_area(&values(&["a", "b"]), &values(&["ya"]))
        .unwrap();
    let forward_a = 0.0;
    let forward_b = 100.0;
    let cell_width = model.picking().cell_width();
    assert_eq!(rect.x, 0.0);
    assert_eq!(rect.width, forward_b - forward_a + cell_width);
    assert_eq!(rect.height, 100.0);
}

#[test]
fn highlighted_area_is_offset_by_margins() {
    let model = build(&grid_3x3(), Dimensions::new(40.0, 10.0, 300.0, 300.0));
    let rect = model
        .pick_highlighted_area(&values(&["c", "b", "zz"]), &values(&["yb", "yc"]))
        .unwrap();
    assert_eq!(
        rect,
        PixelRect {
            x: 140.0,
            y: 110.0,
            width: 200.0,
            height: 200.0
        }
    );
}

#[test]
fn highlighted_area_needs_both_axes() {
    let model = build(&grid_3x3(), square());
    assert!(model
        .pick_highlighted_area(&values(&["zz"]), &values(&["ya"]))
        .is_none());
    assert!(model
        .pick_highlighted_area(&values(&["a"]), &values(&["nope"]))
        .is_none());
    assert!(model.pick_highlighted_area(&[], &[]).is_none());
}

#[test]
fn point_pick_finds_the_cell_under_the_pointer() {
    let model = build(&grid_3x3(), square());
    let picked = model.pick_quads(Point::new(150.0, 150.0));
    let cells = picked.cells();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].datum.x, DomainValue::from("b"));
    assert_eq!(cells[0].datum.y, DomainValue::from("yb"));
    assert_eq!(cells[0].value, 4.0);
}

#[test]
fn point_pick_outside_the_grid_misses() {
    let model = build(&grid_3x3(), Dimensions::new(50.0, 20.0, 300.0, 300.0));
    assert!(model.pick_quads(Point::new(400.0, 100.0)).is_empty());
    assert!(model.pick_quads(Point::new(100.0, 5.0)).is_empty());
    assert!(model.pick_quads(Point::new(100.0, 400.0)).is_empty());
    assert!(model.pick_quads(Point::new(f64::NAN, 100.0)).is_empty());
}

#[test]
fn point_pick_in_the_left_margin_finds_row_labels() {
    let model = build(&grid_3x3(), Dimensions::new(50.0, 20.0, 300.0, 300.0));
    match model.pick_quads(Point::new(25.0, 70.0)) {
        PickedShapes::RowLabel(label) => {
            assert_eq!(label.value, DomainValue::from("ya"));
            assert_eq!(label.text, "ya");
        }
        other => panic!("expected a row label, got {other:?}"),
    }
    match model.pick_quads(Point::new(25.0, 290.0)) {
        PickedShapes::RowLabel(label) => assert_eq!(label.value, DomainValue::from("yc")),
        other => panic!("expected a row label, got {other:?}"),
    }
}

#[test]
fn holes_in_the_table_are_skipped() {
    let mut table = grid_3x3();
    table.table.retain(|d| d.x != DomainValue::from("b"));
    let model = build(&table, square());
    assert!(model.pick_quads(Point::new(150.0, 150.0)).is_empty());
    let area = model.pick_drag_area([Point::new(0.0, 0.0), Point::new(299.0, 299.0)]);
    assert_eq!(area.cells.len(), 6);
    assert_eq!(area.x.len(), 3);
}

#[test]
fn temporal_drag_walks_every_tick() {
    // ticks 0, 1m, ..., 5m over 600px: 100px per bucket
    let model = build(
        &temporal_strip(0.0, 300_000.0, 60_000.0),
        Dimensions::new(0.0, 0.0, 600.0, 100.0),
    );
    let area = model.pick_drag_area([Point::new(150.0, 10.0), Point::new(350.0, 90.0)]);
    assert_eq!(
        area.x,
        vec![
            DomainValue::from(60_000.0),
            DomainValue::from(120_000.0),
            DomainValue::from(180_000.0)
        ]
    );
    assert_eq!(area.cells.len(), 3);

    let shape = model
        .pick_drag_shape([Point::new(150.0, 10.0), Point::new(350.0, 90.0)])
        .unwrap();
    assert_eq!(
        shape,
        PixelRect {
            x: 100.0,
            y: 0.0,
            width: 300.0,
            height: 100.0
        }
    );
}

#[test]
fn temporal_highlight_snaps_to_ticks() {
    let model = build(
        &temporal_strip(0.0, 300_000.0, 60_000.0),
        Dimensions::new(0.0, 0.0, 600.0, 100.0),
    );
    let rect = model
        .pick_highlighted_area(
            &[DomainValue::from(1e12), DomainValue::from(70_000.0)],
            &[DomainValue::from("host")],
        )
        .unwrap();
    // 70s snaps to the 2m tick, the far end clamps to the last tick
    assert_eq!(rect.x, 200.0);
    assert_eq!(rect.width, 400.0);
}

#[test]
fn picks_are_repeatable() {
    let model = build(&grid_3x3(), square());
    let bound = [Point::new(10.0, 120.0), Point::new(210.0, 130.0)];
    assert_eq!(model.pick_drag_area(bound), model.pick_drag_area(bound));
    assert_eq!(
        model.pick_quads(Point::new(10.0, 10.0)),
        model.pick_quads(Point::new(10.0, 10.0))
    );
}
