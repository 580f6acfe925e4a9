//! heatview - heatmap layout and picking for the web
//!
//! Turns an already-bucketed table into render-ready heatmap geometry and
//! answers pointer queries against it:
//! - Band scales for categorical, continuous and temporal column domains
//! - Cells, axis labels and grid lines in canvas pixels
//! - Point, drag-rectangle and highlight picking that agree pixel for pixel
//! - Brush gestures with a completion callback
//!
//! # Usage (Rust)
//!
//! ```
//! use heatview::{
//!     shape_view_model, Config, Dimensions, EstimatedTextMeasure, GridHeightParams,
//!     HeatmapCellDatum, HeatmapInputs, HeatmapTable, Point, ScaleKind,
//! };
//!
//! let table = HeatmapTable::from_rows(
//!     vec![HeatmapCellDatum::new("mon", "host-a", 3.0, 0)],
//!     ScaleKind::Categorical,
//!     None,
//! );
//! let color = |v: f64| if v > 1.0 { "#E7664C" } else { "#54B399" }.to_string();
//! let model = shape_view_model(&HeatmapInputs {
//!     table: &table,
//!     config: &Config::default(),
//!     dimensions: Dimensions::new(0.0, 0.0, 100.0, 100.0),
//!     grid_height: GridHeightParams::new(100.0, 1),
//!     color_scale: &color,
//!     filter_ranges: &[],
//!     text_measure: &EstimatedTextMeasure::default(),
//! })?;
//! assert_eq!(model.pick_quads(Point::new(50.0, 50.0)).cells().len(), 1);
//! # Ok::<(), heatview::HeatviewError>(())
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { HeatmapView } from 'heatview';
//! await init();
//! const view = new HeatmapView({ table, config, dimensions });
//! draw(view.viewModel());
//! canvas.onmousemove = (e) => view.pickQuads(e.offsetX, e.offsetY);
//! ```

pub mod brush;
pub mod color;
pub mod color_scale;
pub mod error;
pub mod format;
pub mod layout;
pub mod picking;
pub mod request;
pub mod scale;
pub mod text;
pub mod types;
pub mod view_model;
pub mod wasm;

use wasm_bindgen::prelude::*;

pub use brush::BrushTracker;
pub use color::Rgba;
pub use color_scale::{BandedColorScale, ColorBand, ColorScale};
pub use error::{HeatviewError, Result};
pub use format::Formatter;
pub use layout::GridHeightParams;
pub use picking::{
    pick_drag_area, pick_drag_shape, pick_highlighted_area, pick_quads, DragArea, PickedShapes,
    PickingContext,
};
pub use request::ViewModelRequest;
pub use text::{EstimatedTextMeasure, TextMeasure};
pub use types::*;
pub use view_model::{shape_view_model, HeatmapInputs, ShapeViewModel};
pub use wasm::HeatmapView;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
