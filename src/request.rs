//! Serializable bundle of every view-model input.
//!
//! Hosts that talk JSON (the wasm binding, fixtures) describe a build as one
//! [`ViewModelRequest`] instead of assembling [`HeatmapInputs`] by hand.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color_scale::BandedColorScale;
use crate::error::Result;
use crate::layout::GridHeightParams;
use crate::text::EstimatedTextMeasure;
use crate::types::{Config, Dimensions, FilterRange, HeatmapTable};
use crate::view_model::{shape_view_model, HeatmapInputs, ShapeViewModel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModelRequest {
    pub table: HeatmapTable,
    /// Theme layer, merged under `config`.
    #[serde(default)]
    pub theme: Value,
    /// Partial config merged over the theme and the defaults.
    #[serde(default)]
    pub config: Value,
    pub dimensions: Dimensions,
    /// Fitted from `dimensions.height` and `cell.maxHeight` when absent.
    #[serde(default)]
    pub grid_height: Option<GridHeightParams>,
    #[serde(default)]
    pub color_bands: BandedColorScale,
    /// Indices of legend buckets the user deselected.
    #[serde(default)]
    pub hidden_bands: Vec<usize>,
    #[serde(default)]
    pub filter_ranges: Vec<FilterRange>,
}

impl ViewModelRequest {
    pub fn new(table: HeatmapTable, dimensions: Dimensions) -> Self {
        Self {
            table,
            theme: Value::Null,
            config: Value::Null,
            dimensions,
            grid_height: None,
            color_bands: BandedColorScale::default(),
            hidden_bands: Vec::new(),
            filter_ranges: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults, then theme, then config.
    pub fn resolved_config(&self) -> Result<Config> {
        Config::merged(&self.theme, &self.config)
    }

    /// Hidden legend buckets followed by the explicit ranges.
    pub fn effective_filter_ranges(&self) -> Vec<FilterRange> {
        let mut ranges = self.color_bands.filter_ranges(&self.hidden_bands);
        ranges.extend_from_slice(&self.filter_ranges);
        ranges
    }

    /// Build the view model using estimated text widths.
    pub fn build(&self) -> Result<ShapeViewModel> {
        let config = self.resolved_config()?;
        let grid_height = self.grid_height.unwrap_or_else(|| {
            GridHeightParams::fit(
                self.dimensions.height,
                self.table.y_values.len(),
                &config.cell,
            )
        });
        let filter_ranges = self.effective_filter_ranges();
        shape_view_model(&HeatmapInputs {
            table: &self.table,
            config: &config,
            dimensions: self.dimensions,
            grid_height,
            color_scale: &self.color_bands,
            filter_ranges: &filter_ranges,
            text_measure: &EstimatedTextMeasure::default(),
        })
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
    use crate::color_scale::ColorBand;

    #[test]
    fn minimal_request_parses_with_defaults() {
        let request = ViewModelRequest::from_json(
            r#"{
                "table": {"table": [], "yValues": [], "xDomain": {"kind": "categorical", "values": []}},
                "dimensions": {"top": 0, "left": 0, "width": 0, "height": 0}
            }"#,
        )
        .unwrap();
        assert!(request.grid_height.is_none());
        assert_eq!(request.resolved_config().unwrap(), Config::default());
        let model = request.build().unwrap();
        assert_eq!(model.heatmap().page_size, 0);
    }

    #[test]
    fn hidden_bands_join_explicit_ranges() {
        let mut request = ViewModelRequest::new(HeatmapTable::empty(), Dimensions::default());
        request.color_bands = BandedColorScale::new(vec![
            ColorBand {
                start: 0.0,
                end: Some(10.0),
                color: "#000000".to_string(),
            },
            ColorBand {
                start: 10.0,
                end: None,
                color: "#FFFFFF".to_string(),
            },
        ]);
        request.hidden_bands = vec![1];
        request.filter_ranges = vec![FilterRange::new(-5.0, Some(0.0))];
        assert_eq!(
            request.effective_filter_ranges(),
            vec![FilterRange::new(10.0, None), FilterRange::new(-5.0, Some(0.0))]
        );
    }
}
