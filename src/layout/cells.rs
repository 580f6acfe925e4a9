//! Cell rectangles for the heatmap grid.
//!
//! Every table row that resolves on both axes becomes one [`Cell`], indexed by
//! its [`CellKey`] for constant-time picking.

use std::collections::HashMap;

use tracing::debug;

use super::ColorResolver;
use crate::color_scale::ColorScale;
use crate::error::{HeatviewError, Result};
use crate::format::offset_from_minutes;
use crate::scale::{BandScale, ColumnScale};
use crate::types::{
    is_in_filtered_range, Cell, CellKey, Config, Fill, FilterRange, HeatmapCellDatum, Stroke,
};

/// Cells in insertion order plus a key index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellMap {
    cells: Vec<Cell>,
    index: HashMap<CellKey, usize>,
}

impl CellMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell; an existing key is replaced in place and keeps its
    /// position in the ordered list.
    pub fn insert(&mut self, key: CellKey, cell: Cell) {
        match self.index.get(&key) {
            Some(&i) => {
                if let Some(slot) = self.cells.get_mut(i) {
                    *slot = cell;
                }
            }
            None => {
                self.index.insert(key, self.cells.len());
                self.cells.push(cell);
            }
        }
    }

    pub fn get(&self, key: &CellKey) -> Option<&Cell> {
        self.cells.get(*self.index.get(key)?)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Inputs shared by every cell of one build.
pub struct CellLayout<'a> {
    pub columns: &'a ColumnScale,
    pub rows: &'a BandScale,
    /// Cell width before the border gap is removed.
    pub cell_width: f64,
    /// Cell height before the border gap is removed.
    pub cell_height: f64,
    /// Grid stroke width; the gap left on each side of a cell.
    pub stroke_width: f64,
    pub config: &'a Config,
    pub color_scale: &'a dyn ColorScale,
    pub filter_ranges: &'a [FilterRange],
}

/// Lay out one cell per resolvable row.
///
/// Rows whose `x` or `y` is not in the domain are dropped. Fails when the
/// border gap leaves a negative cell size and there is data to draw.
pub fn build_cells(layout: &CellLayout<'_>, table: &[HeatmapCellDatum]) -> Result<CellMap> {
    let stroke = layout.stroke_width;
    let width = layout.cell_width - 2.0 * stroke;
    let height = layout.cell_height - 2.0 * stroke;
    if !table.is_empty() && (width < 0.0 || height < 0.0) {
        return Err(HeatviewError::DegenerateCell(format!(
            "{}x{} band leaves {width}x{height} after a {stroke}px border gap",
            layout.cell_width, layout.cell_height
        )));
    }

    let band = layout.columns.band();
    let center_offset = (band.bandwidth() - layout.cell_width) / 2.0;
    let offset = offset_from_minutes(layout.config.time_zone_offset_minutes);
    let border = &layout.config.cell.border;

    let mut colors = ColorResolver::default();
    let border_stroke = Stroke {
        color: colors.resolve(&border.stroke),
        width: border.stroke_width,
    };

    let mut map = CellMap::new();
    let mut dropped = 0usize;
    for datum in table {
        let (Some(x), Some(y_index)) = (band.forward(&datum.x), layout.rows.index_of(&datum.y))
        else {
            dropped += 1;
            continue;
        };
        let Some(y) = layout.rows.forward_index(y_index) else {
            dropped += 1;
            continue;
        };
        let cell = Cell {
            x: x + center_offset + stroke,
            y: y + stroke,
            y_index,
            width,
            height,
            fill: Fill {
                color: colors.resolve(&layout.color_scale.color_for(datum.value)),
            },
            stroke: border_stroke,
            value: datum.value,
            formatted: layout.config.value_formatter.format_number(datum.value, offset),
            visible: !is_in_filtered_range(datum.value, layout.filter_ranges),
            datum: datum.clone(),
        };
        map.insert(datum.key(), cell);
    }

    colors.report("cells");
    debug!(
        cells = map.len(),
        dropped,
        rows = table.len(),
        "built heatmap cells"
    );
    Ok(map)
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
    use crate::color::Rgba;
    use crate::scale::{build_column_scale, build_row_scale};
    use crate::types::{CellSize, DomainValue, XDomain};

    fn red(_: f64) -> String {
        "#FF0000".to_string()
    }

    fn scales() -> (ColumnScale, BandScale) {
        let columns = build_column_scale(&XDomain::categorical(["a", "b"]), 200.0).unwrap();
        let rows = build_row_scale(&[DomainValue::from("y1"), "y2".into()], 100.0);
        (columns, rows)
    }

    #[test]
    fn cells_sit_inside_their_bands() {
        let (columns, rows) = scales();
        let config = Config::default();
        let layout = CellLayout {
            columns: &columns,
            rows: &rows,
            cell_width: 100.0,
            cell_height: 50.0,
            stroke_width: 1.0,
            config: &config,
            color_scale: &red,
            filter_ranges: &[],
        };
        let table = vec![HeatmapCellDatum::new("b", "y2", 3.0, 0)];
        let map = build_cells(&layout, &table).unwrap();
        let cell = map.get(&CellKey::new("b".into(), "y2".into())).unwrap();
        assert_eq!((cell.x, cell.y), (101.0, 51.0));
        assert_eq!((cell.width, cell.height), (98.0, 48.0));
        assert_eq!(cell.y_index, 1);
        assert_eq!(cell.fill.color, Rgba::opaque(255, 0, 0));
        assert_eq!(cell.formatted, "3");
        assert!(cell.visible);
    }

    #[test]
    fn capped_width_is_recentered() {
        let (columns, rows) = scales();
        let mut config = Config::default();
        config.cell.max_width = CellSize::Max(40.0);
        let layout = CellLayout {
            columns: &columns,
            rows: &rows,
            cell_width: 40.0,
            cell_height: 50.0,
            stroke_width: 1.0,
            config: &config,
            color_scale: &red,
            filter_ranges: &[],
        };
        let map = build_cells(&layout, &[HeatmapCellDatum::new("a", "y1", 1.0, 0)]).unwrap();
        assert_eq!(map.cells()[0].x, 31.0);
        assert_eq!(map.cells()[0].width, 38.0);
    }

    #[test]
    fn off_domain_rows_are_dropped_and_duplicates_replace() {
        let (columns, rows) = scales();
        let config = Config::default();
        let filters = [FilterRange::new(5.0, None)];
        let layout = CellLayout {
            columns: &columns,
            rows: &rows,
            cell_width: 100.0,
            cell_height: 50.0,
            stroke_width: 1.0,
            config: &config,
            color_scale: &red,
            filter_ranges: &filters,
        };
        let table = vec![
            HeatmapCellDatum::new("a", "y1", 1.0, 0),
            HeatmapCellDatum::new("zz", "y1", 1.0, 1),
            HeatmapCellDatum::new("b", "y1", 2.0, 2),
            HeatmapCellDatum::new("a", "y1", 9.0, 3),
        ];
        let map = build_cells(&layout, &table).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.cells()[0].value, 9.0);
        assert!(!map.cells()[0].visible);
        assert_eq!(map.cells()[0].datum.original_index, 3);
    }

    #[test]
    fn unknown_colors_become_transparent() {
        let (columns, rows) = scales();
        let config = Config::default();
        let bogus = |_: f64| "chartreuse-ish".to_string();
        let layout = CellLayout {
            columns: &columns,
            rows: &rows,
            cell_width: 100.0,
            cell_height: 50.0,
            stroke_width: 1.0,
            config: &config,
            color_scale: &bogus,
            filter_ranges: &[],
        };
        let map = build_cells(&layout, &[HeatmapCellDatum::new("a", "y1", 1.0, 0)]).unwrap();
        assert_eq!(map.cells()[0].fill.color, Rgba::TRANSPARENT);
    }

    #[test]
    fn border_gap_larger_than_cell_fails() {
        let (columns, rows) = scales();
        let config = Config::default();
        let layout = CellLayout {
            columns: &columns,
            rows: &rows,
            cell_width: 1.0,
            cell_height: 50.0,
            stroke_width: 1.0,
            config: &config,
            color_scale: &red,
            filter_ranges: &[],
        };
        let table = [HeatmapCellDatum::new("a", "y1", 1.0, 0)];
        assert!(matches!(
            build_cells(&layout, &table),
            Err(HeatviewError::DegenerateCell(_))
        ));
        assert!(build_cells(&layout, &[]).unwrap().is_empty());
    }
}
