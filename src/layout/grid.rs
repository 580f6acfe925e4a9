//! Grid separators.

use super::ColorResolver;
use crate::types::{Config, Dimensions, GridLineSet, Line, Stroke};

/// Vertical lines at every column boundary and horizontal lines at every
/// boundary of the current page of rows.
///
/// `column_step` is the band step, not the drawn cell width: capped cells sit
/// centered inside their band and the lines stay on the band edges.
#[allow(clippy::cast_precision_loss)]
pub fn build_grid_lines(
    column_count: usize,
    dims: &Dimensions,
    column_step: f64,
    cell_height: f64,
    page_size: usize,
    config: &Config,
) -> GridLineSet {
    let bottom = cell_height * page_size as f64;
    let x = (0..=column_count)
        .map(|i| {
            let x = dims.left + i as f64 * column_step;
            Line {
                x1: x,
                y1: dims.top,
                x2: x,
                y2: bottom,
            }
        })
        .collect();
    let y = (0..=page_size)
        .map(|i| {
            let y = i as f64 * cell_height;
            Line {
                x1: dims.left,
                y1: y,
                x2: dims.right(),
                y2: y,
            }
        })
        .collect();

    let mut colors = ColorResolver::default();
    let stroke = Stroke {
        color: colors.resolve(&config.grid.stroke.color),
        width: config.grid_stroke_width(),
    };
    colors.report("grid");
    GridLineSet { x, y, stroke }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn line_counts_follow_columns_and_page() {
        let dims = Dimensions::new(20.0, 5.0, 300.0, 200.0);
        let grid = build_grid_lines(3, &dims, 100.0, 25.0, 4, &Config::default());
        assert_eq!(grid.x.len(), 4);
        assert_eq!(grid.y.len(), 5);
        assert_eq!(
            grid.x[3],
            Line {
                x1: 320.0,
                y1: 5.0,
                x2: 320.0,
                y2: 100.0
            }
        );
        assert_eq!(grid.y[4].y1, 100.0);
        assert_eq!(grid.y[0].x2, 320.0);
        assert_eq!(grid.stroke.width, 1.0);
        assert_eq!(grid.stroke.color, Rgba::opaque(0xD3, 0xDA, 0xE6));
    }

    #[test]
    fn empty_page_still_has_outer_lines() {
        let grid = build_grid_lines(0, &Dimensions::default(), 0.0, 0.0, 0, &Config::default());
        assert_eq!(grid.x.len(), 1);
        assert_eq!(grid.y.len(), 1);
    }
}
