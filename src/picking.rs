//! Pointer and drag hit-testing against one view-model generation.
//!
//! All operations take canvas pixel coordinates and never fail: a miss is an
//! empty collection or `None`.

use serde::Serialize;
use tracing::trace;

use crate::layout::CellMap;
use crate::scale::{BandScale, ColumnScale};
use crate::types::{Cell, CellKey, Dimensions, DomainValue, PixelRect, Point, TextBox};

/// Everything the picking operations need from one build.
#[derive(Debug, Clone, PartialEq)]
pub struct PickingContext {
    pub(crate) dims: Dimensions,
    pub(crate) columns: ColumnScale,
    pub(crate) rows: BandScale,
    pub(crate) cell_width: f64,
    pub(crate) cell_height: f64,
    pub(crate) cells: CellMap,
    pub(crate) row_labels: Vec<TextBox>,
}

impl PickingContext {
    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    pub fn columns(&self) -> &ColumnScale {
        &self.columns
    }

    pub fn rows(&self) -> &BandScale {
        &self.rows
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    pub fn cells(&self) -> &CellMap {
        &self.cells
    }

    /// Context that matches nothing.
    pub fn empty() -> Self {
        Self {
            dims: Dimensions::default(),
            columns: ColumnScale::empty(),
            rows: BandScale::new(&[], (0.0, 0.0)),
            cell_width: 0.0,
            cell_height: 0.0,
            cells: CellMap::new(),
            row_labels: Vec::new(),
        }
    }
}

/// Result of a point pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "shape", rename_all = "camelCase")]
pub enum PickedShapes {
    /// Zero or one cell under the pointer.
    Cells(Vec<Cell>),
    /// A row label in the left margin.
    RowLabel(TextBox),
}

impl PickedShapes {
    pub fn none() -> Self {
        Self::Cells(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Cells(cells) if cells.is_empty())
    }

    /// Picked cells; empty for a row label.
    pub fn cells(&self) -> &[Cell] {
        match self {
            Self::Cells(cells) => cells,
            Self::RowLabel(_) => &[],
        }
    }
}

impl Default for PickedShapes {
    fn default() -> Self {
        Self::none()
    }
}

/// Cells and domain ranges covered by a drag rectangle.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DragArea {
    pub cells: Vec<Cell>,
    /// Column values from the left edge to the right edge, inclusive.
    pub x: Vec<DomainValue>,
    /// Row values from the top edge to the bottom edge, inclusive.
    pub y: Vec<DomainValue>,
}

/// Cell or row label under `point`.
///
/// The left margin strip is checked for a row label first; anything else
/// outside the plotting rectangle misses.
pub fn pick_quads(ctx: &PickingContext, point: Point) -> PickedShapes {
    trace!(x = point.x, y = point.y, "pick_quads");
    let dims = &ctx.dims;
    let in_label_strip =
        point.x > 0.0 && point.x < dims.left && point.y > dims.top && point.y < dims.bottom();
    if in_label_strip {
        let label = ctx
            .rows
            .invert(point.y - dims.top)
            .and_then(|value| ctx.row_labels.iter().find(|label| &label.value == value));
        if let Some(label) = label {
            return PickedShapes::RowLabel(label.clone());
        }
    }

    if !dims.contains(point) {
        return PickedShapes::none();
    }
    let x = ctx.columns.band().invert(point.x - dims.left);
    let y = ctx.rows.invert(point.y - dims.top);
    let (Some(x), Some(y)) = (x, y) else {
        return PickedShapes::none();
    };
    ctx.cells
        .get(&CellKey::new(x.clone(), y.clone()))
        .map_or_else(PickedShapes::none, |cell| PickedShapes::Cells(vec![cell.clone()]))
}

/// Cells and domain ranges under the rectangle spanned by two points.
///
/// Points outside the plotting rectangle are clamped onto its edges.
pub fn pick_drag_area(ctx: &PickingContext, bound: [Point; 2]) -> DragArea {
    trace!(?bound, "pick_drag_area");
    let [p1, p2] = bound;
    let dims = &ctx.dims;
    let start = dims.clamp(Point::new(p1.x.min(p2.x), p1.y.min(p2.y)));
    let end = dims.clamp(Point::new(p1.x.max(p2.x), p1.y.max(p2.y)));

    // Temporal domains are already expanded, so walking by index visits
    // exactly the tick values.
    let x = slice_between(ctx.columns.band(), start.x - dims.left, end.x - dims.left);
    let y = slice_between(&ctx.rows, start.y - dims.top, end.y - dims.top);

    let cells = x
        .iter()
        .flat_map(|xv| {
            y.iter()
                .filter_map(move |yv| ctx.cells.get(&CellKey::new(xv.clone(), yv.clone())))
        })
        .cloned()
        .collect();

    DragArea {
        cells,
        x: x.to_vec(),
        y: y.to_vec(),
    }
}

fn slice_between(scale: &BandScale, from: f64, to: f64) -> &[DomainValue] {
    match (scale.invert_index(from), scale.invert_index(to)) {
        (Some(i), Some(j)) => scale.domain().get(i.min(j)..=i.max(j)).unwrap_or(&[]),
        _ => &[],
    }
}

/// Pixel rectangle covering the drag rectangle spanned by two points.
pub fn pick_drag_shape(ctx: &PickingContext, bound: [Point; 2]) -> Option<PixelRect> {
    let area = pick_drag_area(ctx, bound);
    if area.x.is_empty() {
        return None;
    }
    pick_highlighted_area(ctx, &area.x, &area.y)
}

/// Pixel rectangle covering the given column and row values.
///
/// Numeric columns snap the smallest and largest given number onto the tick
/// list; categorical columns use the leftmost and rightmost known value. The
/// rectangle always extends one cell past its rightmost column.
#[allow(clippy::cast_precision_loss)]
pub fn pick_highlighted_area(
    ctx: &PickingContext,
    x: &[DomainValue],
    y: &[DomainValue],
) -> Option<PixelRect> {
    trace!(x = x.len(), y = y.len(), "pick_highlighted_area");
    let (left, right) = column_span(&ctx.columns, x)?;
    let band = ctx.columns.band();
    let start = band.forward_index(left)?;
    let end = band.forward_index(right)?;

    let mut matched = y.iter().filter_map(|value| ctx.rows.forward(value));
    let first = matched.next()?;
    let count = 1 + matched.count();

    Some(PixelRect {
        x: ctx.dims.left + start,
        y: ctx.dims.top + first,
        width: end - start + ctx.cell_width,
        height: count as f64 * ctx.cell_height,
    })
}

fn column_span(columns: &ColumnScale, x: &[DomainValue]) -> Option<(usize, usize)> {
    let band = columns.band();
    if columns.is_numeric() {
        let last = band.len().checked_sub(1)?;
        let (min, max) = x
            .iter()
            .filter_map(DomainValue::as_number)
            .filter(|n| n.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, n| match acc {
                None => Some((n, n)),
                Some((lo, hi)) => Some((lo.min(n), hi.max(n))),
            })?;
        Some((
            columns.bisect_left(min).min(last),
            columns.bisect_left(max).min(last),
        ))
    } else {
        let mut indices = x.iter().filter_map(|value| band.index_of(value));
        let first = indices.next()?;
        Some(indices.fold((first, first), |(lo, hi), i| (lo.min(i), hi.max(i))))
    }
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

    #[test]
    fn empty_context_misses_everything() {
        let ctx = PickingContext::empty();
        assert!(pick_quads(&ctx, Point::new(0.0, 0.0)).is_empty());
        let area = pick_drag_area(&ctx, [Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        assert_eq!(area, DragArea::default());
        assert!(pick_drag_shape(&ctx, [Point::new(0.0, 0.0), Point::new(10.0, 10.0)]).is_none());
        assert!(pick_highlighted_area(&ctx, &["a".into()], &["y".into()]).is_none());
    }

    #[test]
    fn picked_row_label_has_no_cells() {
        let label = TextBox {
            text: "y".to_string(),
            value: "y".into(),
            x: 0.0,
            y: 0.0,
            font_size: 12.0,
            font_family: "sans-serif".to_string(),
        };
        let picked = PickedShapes::RowLabel(label);
        assert!(!picked.is_empty());
        assert!(picked.cells().is_empty());
    }
}
