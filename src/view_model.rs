//! View-model assembly.
//!
//! [`shape_view_model`] turns one set of inputs into an immutable
//! [`ShapeViewModel`]: the render-ready geometry plus the picking context
//! bound to it. Any input change means building a new one.

use tracing::debug;

use crate::color_scale::ColorScale;
use crate::error::Result;
use crate::layout::{
    build_cells, build_grid_lines, column_labels, row_labels, CellLayout, GridHeightParams,
};
use crate::picking::{self, DragArea, PickedShapes, PickingContext};
use crate::scale::{build_column_scale, build_row_scale, resolve_cell_width};
use crate::text::TextMeasure;
use crate::types::{
    Config, Dimensions, DomainValue, FilterRange, HeatmapTable, HeatmapViewModel, PixelRect, Point,
};

/// Inputs of one build.
pub struct HeatmapInputs<'a> {
    pub table: &'a HeatmapTable,
    pub config: &'a Config,
    /// Plotting rectangle inside the canvas.
    pub dimensions: Dimensions,
    pub grid_height: GridHeightParams,
    pub color_scale: &'a dyn ColorScale,
    /// Value buckets hidden through the legend.
    pub filter_ranges: &'a [FilterRange],
    pub text_measure: &'a dyn TextMeasure,
}

/// Geometry of one build plus the picking operations bound to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeViewModel {
    heatmap: HeatmapViewModel,
    picking: PickingContext,
}

impl ShapeViewModel {
    /// A zero-size view model that answers every pick with a miss.
    pub fn empty() -> Self {
        Self {
            heatmap: HeatmapViewModel::default(),
            picking: PickingContext::empty(),
        }
    }

    /// Empty view model whose grid origin and picking bounds follow `dims`.
    fn anchored(dims: Dimensions) -> Self {
        let mut model = Self::empty();
        model.heatmap.grid_origin = Point::new(dims.left, dims.top);
        model.picking.dims = dims;
        model
    }

    pub fn heatmap(&self) -> &HeatmapViewModel {
        &self.heatmap
    }

    pub fn picking(&self) -> &PickingContext {
        &self.picking
    }

    pub fn into_heatmap(self) -> HeatmapViewModel {
        self.heatmap
    }

    pub fn pick_quads(&self, point: Point) -> PickedShapes {
        picking::pick_quads(&self.picking, point)
    }

    pub fn pick_drag_area(&self, bound: [Point; 2]) -> DragArea {
        picking::pick_drag_area(&self.picking, bound)
    }

    pub fn pick_drag_shape(&self, bound: [Point; 2]) -> Option<PixelRect> {
        picking::pick_drag_shape(&self.picking, bound)
    }

    pub fn pick_highlighted_area(&self, x: &[DomainValue], y: &[DomainValue]) -> Option<PixelRect> {
        picking::pick_highlighted_area(&self.picking, x, y)
    }
}

impl Default for ShapeViewModel {
    fn default() -> Self {
        Self::empty()
    }
}

/// Build the view model for one generation of inputs.
///
/// # Errors
/// Fails on invalid dimensions, an unexpandable temporal domain, or cells
/// that the border gap would turn negative.
pub fn shape_view_model(inputs: &HeatmapInputs<'_>) -> Result<ShapeViewModel> {
    let HeatmapInputs {
        table,
        config,
        dimensions: dims,
        grid_height,
        ..
    } = *inputs;
    dims.validate(!table.is_empty())?;
    if table.is_empty() {
        debug!("empty table, nothing to lay out");
        return Ok(ShapeViewModel::anchored(dims));
    }

    let stroke_width = config.grid_stroke_width();
    let rows = build_row_scale(&table.y_values, grid_height.height);
    let columns = build_column_scale(&table.x_domain, dims.width)?;
    let page_size = grid_height.page_size.min(rows.len());

    let cell_width = resolve_cell_width(columns.band().bandwidth(), config.cell.max_width);
    let cell_height = rows.bandwidth();

    let cells = build_cells(
        &CellLayout {
            columns: &columns,
            rows: &rows,
            cell_width,
            cell_height,
            stroke_width,
            config,
            color_scale: inputs.color_scale,
            filter_ranges: inputs.filter_ranges,
        },
        &table.table,
    )?;
    let x_values = column_labels(
        &columns,
        &dims,
        cell_height,
        page_size,
        config,
        inputs.text_measure,
    );
    let y_values = row_labels(&rows, &dims, config);
    let grid_lines = build_grid_lines(
        columns.band().len(),
        &dims,
        columns.band().step(),
        cell_height,
        page_size,
        config,
    );

    debug!(
        cells = cells.len(),
        columns = columns.band().len(),
        rows = rows.len(),
        page_size,
        "assembled heatmap view model"
    );

    let heatmap = HeatmapViewModel {
        grid_origin: Point::new(dims.left, dims.top),
        grid_lines,
        cells: cells.cells().to_vec(),
        x_values,
        y_values: y_values.clone(),
        page_size,
    };
    let picking = PickingContext {
        dims,
        columns,
        rows,
        cell_width,
        cell_height,
        cells,
        row_labels: y_values,
    };
    Ok(ShapeViewModel { heatmap, picking })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::error::HeatviewError;
    use crate::text::EstimatedTextMeasure;
    use crate::types::{HeatmapCellDatum, ScaleKind};

    fn gray(_: f64) -> String {
        "#808080".to_string()
    }

    fn build(table: &HeatmapTable, dims: Dimensions, page: GridHeightParams) -> Result<ShapeViewModel> {
        shape_view_model(&HeatmapInputs {
            table,
            config: &Config::default(),
            dimensions: dims,
            grid_height: page,
            color_scale: &gray,
            filter_ranges: &[],
            text_measure: &EstimatedTextMeasure::default(),
        })
    }

    #[test]
    fn page_size_is_clamped_to_row_count() {
        let table = HeatmapTable::from_rows(
            vec![HeatmapCellDatum::new("a", "y", 1.0, 0)],
            ScaleKind::Categorical,
            None,
        );
        let model = build(
            &table,
            Dimensions::new(0.0, 0.0, 100.0, 100.0),
            GridHeightParams::new(100.0, 10),
        )
        .unwrap();
        assert_eq!(model.heatmap().page_size, 1);
        assert_eq!(model.heatmap().grid_lines.y.len(), 2);
    }

    #[test]
    fn zero_area_with_data_is_rejected() {
        let table = HeatmapTable::from_rows(
            vec![HeatmapCellDatum::new("a", "y", 1.0, 0)],
            ScaleKind::Categorical,
            None,
        );
        let err = build(&table, Dimensions::default(), GridHeightParams::default()).unwrap_err();
        assert!(matches!(err, HeatviewError::InvalidDimensions(_)));
    }

    #[test]
    fn empty_factory_returns_fresh_instances() {
        let a = ShapeViewModel::empty();
        let b = ShapeViewModel::default();
        assert_eq!(a, b);
        assert!(a.heatmap().cells.is_empty());
        assert!(a.pick_quads(Point::new(1.0, 1.0)).is_empty());
    }
}
