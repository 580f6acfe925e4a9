//! Browser tests for the JavaScript binding.
//!
//! Run with: wasm-pack test --headless --chrome
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use heatview::HeatmapView;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const REQUEST: &str = r#"{
    "table": {
        "table": [
            {"x": "a", "y": "y1", "value": 1},
            {"x": "b", "y": "y1", "value": 2}
        ],
        "yValues": ["y1"],
        "xDomain": {"kind": "categorical", "values": ["a", "b"]}
    },
    "dimensions": {"top": 0, "left": 0, "width": 200, "height": 100}
}"#;

#[wasm_bindgen_test]
fn view_builds_from_json_and_picks() {
    let view = HeatmapView::from_json(REQUEST).unwrap();
    assert!(view.view_model().unwrap().is_object());
    assert!(view.pick_quads(150.0, 50.0).unwrap().is_object());
    assert!(view.pick_drag_shape(10.0, 10.0, 190.0, 90.0).unwrap().is_object());
}

#[wasm_bindgen_test]
fn empty_view_answers_with_misses() {
    let view = HeatmapView::empty();
    let shape = view.pick_drag_shape(0.0, 0.0, 10.0, 10.0).unwrap();
    assert!(shape.is_null() || shape.is_undefined());
}

#[wasm_bindgen_test]
fn malformed_request_is_an_error() {
    assert!(HeatmapView::from_json("{}").is_err());
}
