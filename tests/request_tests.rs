//! JSON request tests for heatview
//!
//! Builds view models from the wire format hosts send.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use heatview::{HeatviewError, Point, Rgba, ViewModelRequest};
use serde_json::json;

fn request_json() -> serde_json::Value {
    json!({
        "table": {
            "table": [
                {"x": "mon", "y": "host-a", "value": 1, "originalIndex": 0},
                {"x": "tue", "y": "host-a", "value": 12, "originalIndex": 1},
                {"x": "mon", "y": "host-b", "value": 30, "originalIndex": 2},
                {"x": "tue", "y": "host-b", "value": 7, "originalIndex": 3}
            ],
            "yValues": ["host-a", "host-b"],
            "xDomain": {"kind": "categorical", "values": ["mon", "tue"]}
        },
        "theme": {"grid": {"stroke": {"color": "#000000", "width": 2}}},
        "config": {"grid": {"stroke": {"width": 0}}, "valueFormatter": {"kind": "fixed", "decimals": 1}},
        "dimensions": {"top": 0, "left": 0, "width": 200, "height": 100},
        "colorBands": [
            {"start": 0, "end": 10, "color": "#0000FF"},
            {"start": 10, "end": 20, "color": "#00FF00"},
            {"start": 20, "color": "#FF0000"}
        ],
        "hiddenBands": [1],
        "filterRanges": [[25, null]]
    })
}

#[test]
fn request_builds_a_complete_model() {
    let request: ViewModelRequest = serde_json::from_value(request_json()).unwrap();
    let model = request.build().unwrap();
    let heatmap = model.heatmap();

    assert_eq!(heatmap.cells.len(), 4);
    assert_eq!(heatmap.page_size, 2);
    assert_eq!(heatmap.grid_lines.stroke.color, Rgba::opaque(0, 0, 0));
    assert_eq!(heatmap.grid_lines.stroke.width, 0.0);

    let cell = &heatmap.cells[0];
    assert_eq!((cell.x, cell.y, cell.width, cell.height), (0.0, 0.0, 100.0, 50.0));
    assert_eq!(cell.fill.color, Rgba::opaque(0, 0, 255));
    assert_eq!(cell.formatted, "1.0");

    let visible: Vec<bool> = heatmap.cells.iter().map(|c| c.visible).collect();
    assert_eq!(visible, vec![true, false, false, true]);

    let picked = model.pick_quads(Point::new(150.0, 75.0));
    assert_eq!(picked.cells()[0].value, 7.0);
}

#[test]
fn explicit_grid_height_wins_over_fitting() {
    let mut value = request_json();
    value["gridHeight"] = json!({"height": 400, "pageSize": 1});
    let request: ViewModelRequest = serde_json::from_value(value).unwrap();
    let heatmap = request.build().unwrap().into_heatmap();
    assert_eq!(heatmap.page_size, 1);
    assert_eq!(heatmap.cells[2].y, 200.0);
}

#[test]
fn request_round_trips_through_json_text() {
    let text = request_json().to_string();
    let request = ViewModelRequest::from_json(&text).unwrap();
    assert_eq!(request.hidden_bands, vec![1]);
    assert_eq!(request.color_bands.bands().len(), 3);
}

#[test]
fn bad_config_surfaces_as_config_error() {
    let mut value = request_json();
    value["config"] = json!({"cell": {"maxWidth": "wide"}});
    let request: ViewModelRequest = serde_json::from_value(value).unwrap();
    assert!(matches!(request.build(), Err(HeatviewError::Config(_))));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(
        ViewModelRequest::from_json("{not json"),
        Err(HeatviewError::Json(_))
    ));
}
