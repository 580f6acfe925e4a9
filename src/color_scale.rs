//! Value-to-color lookup and legend bucket filtering.

use serde::{Deserialize, Serialize};

use crate::color::palette;
use crate::types::FilterRange;

/// Maps a cell value to a color token.
pub trait ColorScale {
    fn color_for(&self, value: f64) -> String;
}

impl<F> ColorScale for F
where
    F: Fn(f64) -> String,
{
    fn color_for(&self, value: f64) -> String {
        self(value)
    }
}

/// One legend bucket: `start <= value < end`, open-ended when `end` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    pub start: f64,
    #[serde(default)]
    pub end: Option<f64>,
    pub color: String,
}

impl ColorBand {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && self.end.map_or(true, |end| value < end)
    }
}

/// Threshold color scale built from ordered legend buckets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandedColorScale {
    bands: Vec<ColorBand>,
}

impl BandedColorScale {
    pub fn new(bands: Vec<ColorBand>) -> Self {
        Self { bands }
    }

    /// Buckets from ascending boundaries and one color per boundary; the last
    /// bucket is open-ended. Extra colors or boundaries are ignored.
    pub fn from_boundaries(boundaries: &[f64], colors: &[&str]) -> Self {
        let bands = boundaries
            .iter()
            .zip(colors)
            .enumerate()
            .map(|(i, (&start, color))| ColorBand {
                start,
                end: boundaries.get(i + 1).copied(),
                color: (*color).to_string(),
            })
            .collect();
        Self { bands }
    }

    pub fn bands(&self) -> &[ColorBand] {
        &self.bands
    }

    /// Ordered bucket boundaries (band starts).
    pub fn boundaries(&self) -> Vec<f64> {
        self.bands.iter().map(|b| b.start).collect()
    }

    /// Filter ranges for the legend buckets the user deselected.
    /// Unknown indices are ignored.
    pub fn filter_ranges(&self, hidden: &[usize]) -> Vec<FilterRange> {
        hidden
            .iter()
            .filter_map(|&i| self.bands.get(i))
            .map(|band| FilterRange::new(band.start, band.end))
            .collect()
    }
}

impl ColorScale for BandedColorScale {
    fn color_for(&self, value: f64) -> String {
        self.bands
            .iter()
            .find(|band| band.contains(value))
            .map_or_else(|| palette::TRANSPARENT.to_string(), |band| band.color.clone())
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

    fn scale() -> BandedColorScale {
        BandedColorScale::from_boundaries(&[0.0, 10.0, 50.0], &["#0000FF", "#00FF00", "#FF0000"])
    }

    #[test]
    fn bands_are_half_open() {
        let scale = scale();
        assert_eq!(scale.color_for(0.0), "#0000FF");
        assert_eq!(scale.color_for(9.99), "#0000FF");
        assert_eq!(scale.color_for(10.0), "#00FF00");
        assert_eq!(scale.color_for(1e6), "#FF0000");
        assert_eq!(scale.color_for(-1.0), "transparent");
    }

    #[test]
    fn hidden_buckets_become_filter_ranges() {
        let scale = scale();
        assert_eq!(scale.boundaries(), vec![0.0, 10.0, 50.0]);
        assert_eq!(
            scale.filter_ranges(&[1, 2, 7]),
            vec![FilterRange::new(10.0, Some(50.0)), FilterRange::new(50.0, None)]
        );
    }

    #[test]
    fn closures_are_color_scales() {
        let lookup = |v: f64| if v > 0.5 { "#FFFFFF" } else { "#000000" }.to_string();
        assert_eq!(lookup.color_for(0.7), "#FFFFFF");
    }

    #[test]
    fn bands_deserialize_from_list() {
        let scale: BandedColorScale = serde_json::from_str(
            r##"[{"start": 0, "end": 5, "color": "#000000"}, {"start": 5, "color": "#FFFFFF"}]"##,
        )
        .unwrap();
        assert_eq!(scale.color_for(7.0), "#FFFFFF");
    }
}
