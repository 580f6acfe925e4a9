//! Shared fixtures for the integration tests.
//!
//! Builds tables and view models the same way a host would, with a fixed
//! two-color scale and estimated text widths.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_precision_loss
)]

use heatview::{
    shape_view_model, Config, Dimensions, DomainValue, EstimatedTextMeasure, FilterRange,
    GridHeightParams, HeatmapCellDatum, HeatmapInputs, HeatmapTable, ScaleKind, ShapeViewModel,
    XDomain,
};

pub const LOW: &str = "#54B399";
pub const HIGH: &str = "#E7664C";

pub fn two_tone(value: f64) -> String {
    if value >= 5.0 { HIGH } else { LOW }.to_string()
}

pub fn values(items: &[&str]) -> Vec<DomainValue> {
    items.iter().map(|s| DomainValue::from(*s)).collect()
}

/// Full `x` by `y` categorical grid; the value of each cell is its row-major
/// position.
pub fn categorical_grid(x: &[&str], y: &[&str]) -> HeatmapTable {
    let mut rows = Vec::new();
    for yv in y {
        for xv in x {
            let index = rows.len();
            rows.push(HeatmapCellDatum::new(*xv, *yv, index as f64, index));
        }
    }
    HeatmapTable::new(rows, values(y), XDomain::categorical(x.iter().copied()))
}

/// The 3x3 grid `{a, b, c}` by `{ya, yb, yc}`.
pub fn grid_3x3() -> HeatmapTable {
    categorical_grid(&["a", "b", "c"], &["ya", "yb", "yc"])
}

/// One row category with a cell at every tick of `[start, end]`.
pub fn temporal_strip(start: f64, end: f64, interval: f64) -> HeatmapTable {
    let mut rows = Vec::new();
    let mut i = 0usize;
    loop {
        let t = start + i as f64 * interval;
        if t > end {
            break;
        }
        rows.push(HeatmapCellDatum::new(t, "host", i as f64, i));
        i += 1;
    }
    HeatmapTable::from_rows(rows, ScaleKind::Temporal, Some(interval))
}

pub fn build_with(
    table: &HeatmapTable,
    config: &Config,
    dims: Dimensions,
    filter_ranges: &[FilterRange],
) -> ShapeViewModel {
    let grid_height = GridHeightParams::fit(dims.height, table.y_values.len(), &config.cell);
    shape_view_model(&HeatmapInputs {
        table,
        config,
        dimensions: dims,
        grid_height,
        color_scale: &two_tone,
        filter_ranges,
        text_measure: &EstimatedTextMeasure::default(),
    })
    .expect("view model builds")
}

/// Default config, all rows on one page.
pub fn build(table: &HeatmapTable, dims: Dimensions) -> ShapeViewModel {
    build_with(table, &Config::default(), dims, &[])
}
