//! Layout builders for the heatmap grid.
//!
//! This module handles:
//! - Cell rectangles, fills and visibility keyed by `(x, y)`
//! - Column and row label placement, including temporal tick thinning
//! - Grid separators for the current page of rows
//! - Fitting row height and page size into the available height

mod cells;
mod grid;
mod labels;
mod page;

pub use cells::{build_cells, CellLayout, CellMap};
pub use grid::build_grid_lines;
pub use labels::{column_labels, row_labels};
pub use page::GridHeightParams;

use tracing::warn;

use crate::color::Rgba;

/// Parses color tokens for one build, remembering the ones that failed so
/// they are reported once instead of per cell.
#[derive(Debug, Default)]
pub(crate) struct ColorResolver {
    rejected: Vec<String>,
}

impl ColorResolver {
    /// Parsed color, or transparent for an unknown token.
    pub(crate) fn resolve(&mut self, token: &str) -> Rgba {
        if let Some(color) = Rgba::parse(token) {
            return color;
        }
        if !self.rejected.iter().any(|t| t == token) {
            self.rejected.push(token.to_string());
        }
        Rgba::TRANSPARENT
    }

    pub(crate) fn report(&self, context: &str) {
        if !self.rejected.is_empty() {
            warn!(
                context,
                tokens = ?self.rejected,
                "unparsable color tokens resolved to transparent"
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn resolver_dedupes_rejected_tokens() {
        let mut resolver = ColorResolver::default();
        assert_eq!(resolver.resolve("#FF0000"), Rgba::opaque(255, 0, 0));
        assert_eq!(resolver.resolve("nope"), Rgba::TRANSPARENT);
        assert_eq!(resolver.resolve("nope"), Rgba::TRANSPARENT);
        assert_eq!(resolver.rejected, vec!["nope".to_string()]);
    }
}
