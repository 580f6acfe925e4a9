//! Row height and paging.

use serde::{Deserialize, Serialize};

use crate::types::{CellConfig, CellSize};

/// Vertical extent of the full row scale and how many rows fit on a page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridHeightParams {
    /// Height of the whole row scale, including rows beyond the page.
    pub height: f64,
    pub page_size: usize,
}

impl GridHeightParams {
    pub const fn new(height: f64, page_size: usize) -> Self {
        Self { height, page_size }
    }

    /// Fit `row_count` rows into `available` pixels.
    ///
    /// With `maxHeight: "fill"` every row shares the space and all rows are on
    /// the page. With a pixel cap each row gets exactly that height and the
    /// page holds as many rows as fit.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn fit(available: f64, row_count: usize, cell: &CellConfig) -> Self {
        if row_count == 0 || !available.is_finite() || available <= 0.0 {
            return Self::default();
        }
        match cell.max_height {
            CellSize::Fill => Self::new(available, row_count),
            CellSize::Max(row_height) if row_height > 0.0 => {
                let fits = (available / row_height).floor() as usize;
                Self::new(row_height * row_count as f64, fits.min(row_count))
            }
            CellSize::Max(_) => Self::default(),
        }
    }

    /// Height of one row.
    #[allow(clippy::cast_precision_loss)]
    pub fn row_height(&self, row_count: usize) -> f64 {
        if row_count == 0 {
            0.0
        } else {
            self.height / row_count as f64
        }
    }
}
