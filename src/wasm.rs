//! JavaScript binding for one view-model generation.

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::brush::BrushTracker;
use crate::request::ViewModelRequest;
use crate::types::{DomainValue, Point};
use crate::view_model::ShapeViewModel;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn domain_values(value: JsValue) -> Result<Vec<DomainValue>, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Expected an array of numbers or strings: {e}")))
}

/// A built heatmap plus the brush gesture running against it.
#[wasm_bindgen]
pub struct HeatmapView {
    model: ShapeViewModel,
    brush: BrushTracker,
    brush_callback: Option<Function>,
}

#[wasm_bindgen]
impl HeatmapView {
    /// Build from a request object (`table`, `config`, `dimensions`, ...).
    ///
    /// # Errors
    /// Returns an error if the request is malformed or the build fails.
    #[wasm_bindgen(constructor)]
    pub fn new(request: JsValue) -> Result<HeatmapView, JsValue> {
        console_error_panic_hook::set_once();
        let request: ViewModelRequest = serde_wasm_bindgen::from_value(request)
            .map_err(|e| JsValue::from_str(&format!("Invalid request: {e}")))?;
        Self::from_request(&request)
    }

    /// Build from a JSON-encoded request.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or the build fails.
    #[wasm_bindgen(js_name = "fromJson")]
    pub fn from_json(json: &str) -> Result<HeatmapView, JsValue> {
        console_error_panic_hook::set_once();
        let request = ViewModelRequest::from_json(json).map_err(JsValue::from)?;
        Self::from_request(&request)
    }

    /// A view with nothing to draw.
    #[wasm_bindgen]
    pub fn empty() -> HeatmapView {
        Self::with_model(ShapeViewModel::empty())
    }

    /// Render-ready geometry.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "viewModel")]
    pub fn view_model(&self) -> Result<JsValue, JsValue> {
        to_js(self.model.heatmap())
    }

    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "pickQuads")]
    pub fn pick_quads(&self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        to_js(&self.model.pick_quads(Point::new(x, y)))
    }

    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "pickDragArea")]
    pub fn pick_drag_area(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<JsValue, JsValue> {
        to_js(&self.model.pick_drag_area([Point::new(x1, y1), Point::new(x2, y2)]))
    }

    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "pickDragShape")]
    pub fn pick_drag_shape(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<JsValue, JsValue> {
        to_js(&self.model.pick_drag_shape([Point::new(x1, y1), Point::new(x2, y2)]))
    }

    /// # Errors
    /// Returns an error if `x` or `y` is not an array of domain values.
    #[wasm_bindgen(js_name = "pickHighlightedArea")]
    pub fn pick_highlighted_area(&self, x: JsValue, y: JsValue) -> Result<JsValue, JsValue> {
        let x = domain_values(x)?;
        let y = domain_values(y)?;
        to_js(&self.model.pick_highlighted_area(&x, &y))
    }

    /// Complete a drag from `(x1, y1)` to `(x2, y2)` and pass the brushed area
    /// to `callback`.
    ///
    /// # Errors
    /// Returns an error if serialization fails or the callback throws.
    #[wasm_bindgen(js_name = "brushEnd")]
    pub fn brush_end(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        callback: &Function,
    ) -> Result<(), JsValue> {
        self.brush.begin(Point::new(x1, y1));
        self.finish_brush(Point::new(x2, y2), Some(callback))
    }

    /// Callback invoked when a pointer-driven brush completes.
    #[wasm_bindgen(js_name = "setBrushCallback")]
    pub fn set_brush_callback(&mut self, callback: Option<Function>) {
        self.brush_callback = callback;
    }

    #[wasm_bindgen]
    pub fn on_mouse_down(&mut self, x: f64, y: f64) {
        self.brush.begin(Point::new(x, y));
    }

    /// Returns the preview rectangle of the brush in progress.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen]
    pub fn on_mouse_move(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        self.brush.update(Point::new(x, y));
        to_js(&self.brush.preview(&self.model))
    }

    /// # Errors
    /// Returns an error if serialization fails or the callback throws.
    #[wasm_bindgen]
    pub fn on_mouse_up(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let callback = self.brush_callback.clone();
        self.finish_brush(Point::new(x, y), callback.as_ref())
    }
}

impl HeatmapView {
    fn with_model(model: ShapeViewModel) -> Self {
        Self {
            model,
            brush: BrushTracker::new(),
            brush_callback: None,
        }
    }

    fn from_request(request: &ViewModelRequest) -> Result<Self, JsValue> {
        let model = request.build().map_err(JsValue::from)?;
        Ok(Self::with_model(model))
    }

    fn finish_brush(&mut self, point: Point, callback: Option<&Function>) -> Result<(), JsValue> {
        let mut event = None;
        self.brush
            .finish(&self.model, point, |area| event = Some(to_js(area)));
        match (event, callback) {
            (Some(event), Some(callback)) => callback.call1(&JsValue::NULL, &event?).map(|_| ()),
            _ => Ok(()),
        }
    }
}
