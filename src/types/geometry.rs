//! Pixel-space primitives.

use serde::{Deserialize, Serialize};

use crate::error::{HeatviewError, Result};

/// A point in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Placement of the plotting rectangle inside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Offset from the canvas top edge.
    pub top: f64,
    /// Offset from the canvas left edge (room for row labels).
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Right edge in canvas pixels.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge in canvas pixels.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Clamp a point into the plotting rectangle.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(self.left, self.right().max(self.left)),
            point.y.clamp(self.top, self.bottom().max(self.top)),
        )
    }

    /// Inclusive containment test against the plotting rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Reject non-finite or negative extents; a zero-size area is only valid
    /// when there is nothing to lay out.
    pub fn validate(&self, has_data: bool) -> Result<()> {
        let finite = [self.top, self.left, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(HeatviewError::InvalidDimensions(format!(
                "non-finite value in {self:?}"
            )));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(HeatviewError::InvalidDimensions(format!(
                "negative size {}x{}",
                self.width, self.height
            )));
        }
        if has_data && (self.width <= 0.0 || self.height <= 0.0) {
            return Err(HeatviewError::InvalidDimensions(format!(
                "zero-size plotting area {}x{} with data",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// An axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
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
    fn clamp_pulls_points_onto_edges() {
        let dims = Dimensions::new(10.0, 5.0, 100.0, 50.0);
        assert_eq!(dims.clamp(Point::new(-40.0, 500.0)), Point::new(10.0, 55.0));
        assert_eq!(dims.clamp(Point::new(60.0, 20.0)), Point::new(60.0, 20.0));
    }

    #[test]
    fn validate_rejects_degenerate_areas_only_with_data() {
        let zero = Dimensions::new(0.0, 0.0, 0.0, 0.0);
        assert!(zero.validate(false).is_ok());
        assert!(matches!(
            zero.validate(true),
            Err(HeatviewError::InvalidDimensions(_))
        ));
        assert!(Dimensions::new(0.0, 0.0, f64::NAN, 1.0).validate(false).is_err());
        assert!(Dimensions::new(0.0, 0.0, -1.0, 1.0).validate(false).is_err());
    }
}
