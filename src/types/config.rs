//! Heatmap configuration.
//!
//! Every field has a theme default, so a partial JSON object deserializes into
//! a complete `Config`. [`Config::merged`] layers a theme and user overrides
//! over those defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::palette;
use crate::error::{HeatviewError, Result};
use crate::format::Formatter;

/// Upper bound for a cell dimension: a pixel cap, or the full band.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "CellSizeRepr", into = "CellSizeRepr")]
pub enum CellSize {
    /// Use the whole band.
    #[default]
    Fill,
    /// Never exceed this many pixels.
    Max(f64),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CellSizeRepr {
    Pixels(f64),
    Keyword(String),
}

impl TryFrom<CellSizeRepr> for CellSize {
    type Error = String;

    fn try_from(repr: CellSizeRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            CellSizeRepr::Pixels(px) => Ok(Self::Max(px)),
            CellSizeRepr::Keyword(k) if k == "fill" => Ok(Self::Fill),
            CellSizeRepr::Keyword(k) => Err(format!("expected \"fill\" or a number, got {k:?}")),
        }
    }
}

impl From<CellSize> for CellSizeRepr {
    fn from(size: CellSize) -> Self {
        match size {
            CellSize::Fill => Self::Keyword("fill".to_string()),
            CellSize::Max(px) => Self::Pixels(px),
        }
    }
}

/// Label padding: a single number or per-side values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "PaddingRepr")]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const fn uniform(p: f64) -> Self {
        Self {
            top: p,
            right: p,
            bottom: p,
            left: p,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaddingRepr {
    Uniform(f64),
    Sides {
        #[serde(default)]
        top: f64,
        #[serde(default)]
        right: f64,
        #[serde(default)]
        bottom: f64,
        #[serde(default)]
        left: f64,
    },
}

impl From<PaddingRepr> for Padding {
    fn from(repr: PaddingRepr) -> Self {
        match repr {
            PaddingRepr::Uniform(p) => Self::uniform(p),
            PaddingRepr::Sides {
                top,
                right,
                bottom,
                left,
            } => Self {
                top,
                right,
                bottom,
                left,
            },
        }
    }
}

/// Stroke as configured (color token + optional width).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrokeConfig {
    pub color: String,
    /// Falls back to 1 when unset.
    pub width: Option<f64>,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: palette::GRID_LINE.to_string(),
            width: Some(1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub stroke: StrokeConfig,
}

/// Border drawn around each cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BorderConfig {
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            stroke: palette::TRANSPARENT.to_string(),
            stroke_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CellConfig {
    pub max_width: CellSize,
    pub max_height: CellSize,
    pub border: BorderConfig,
}

/// Axis label appearance and formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisLabelConfig {
    pub visible: bool,
    pub font_size: f64,
    pub font_family: String,
    pub text_color: String,
    pub padding: Padding,
    pub formatter: Formatter,
}

impl Default for AxisLabelConfig {
    fn default() -> Self {
        Self {
            visible: true,
            font_size: 12.0,
            font_family: "sans-serif".to_string(),
            text_color: palette::LABEL_TEXT.to_string(),
            padding: Padding::uniform(6.0),
            formatter: Formatter::Default,
        }
    }
}

/// Column label config: axis label plus the temporal tick-density heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XAxisLabelConfig {
    #[serde(flatten)]
    pub label: AxisLabelConfig,
    /// Divides the number of labels that would fit side by side. Tunable:
    /// 2 keeps temporal axes readable, 1 packs labels edge to edge.
    pub tick_divisor: f64,
}

impl Default for XAxisLabelConfig {
    fn default() -> Self {
        Self {
            label: AxisLabelConfig::default(),
            tick_divisor: 2.0,
        }
    }
}

/// Visuals for the drag-selection overlay, consumed by the overlay component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrushAreaConfig {
    pub visible: bool,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for BrushAreaConfig {
    fn default() -> Self {
        Self {
            visible: true,
            fill: palette::BRUSH_AREA_FILL.to_string(),
            stroke: palette::BRUSH_AREA_STROKE.to_string(),
            stroke_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrushMaskConfig {
    pub visible: bool,
    pub fill: String,
}

impl Default for BrushMaskConfig {
    fn default() -> Self {
        Self {
            visible: true,
            fill: palette::BRUSH_MASK_FILL.to_string(),
        }
    }
}

/// Complete heatmap configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub grid: GridConfig,
    pub cell: CellConfig,
    pub x_axis_label: XAxisLabelConfig,
    pub y_axis_label: AxisLabelConfig,
    pub brush_area: BrushAreaConfig,
    pub brush_mask: BrushMaskConfig,
    /// Minutes east of UTC used for timestamp labels.
    pub time_zone_offset_minutes: i32,
    pub value_formatter: Formatter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            cell: CellConfig::default(),
            x_axis_label: XAxisLabelConfig::default(),
            y_axis_label: AxisLabelConfig::default(),
            brush_area: BrushAreaConfig::default(),
            brush_mask: BrushMaskConfig::default(),
            time_zone_offset_minutes: 0,
            value_formatter: Formatter::Default,
        }
    }
}

impl Config {
    /// Grid stroke width, defaulting to 1.
    pub fn grid_stroke_width(&self) -> f64 {
        self.grid.stroke.width.unwrap_or(1.0)
    }

    /// Layer `theme` and then `overrides` over the defaults.
    ///
    /// Objects merge key by key; any other value replaces what is below it.
    /// `null` overrides are ignored.
    pub fn merged(theme: &Value, overrides: &Value) -> Result<Self> {
        let mut base = serde_json::to_value(Self::default())?;
        merge_json(&mut base, theme);
        merge_json(&mut base, overrides);
        serde_json::from_value(base).map_err(|e| HeatviewError::Config(e.to_string()))
    }
}

/// Deep-merge `patch` into `target`.
pub fn merge_json(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        if !value.is_null() {
                            target.insert(key.clone(), value.clone());
                        }
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (target, patch) => *target = patch.clone(),
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
    use serde_json::json;

    #[test]
    fn empty_object_yields_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.grid_stroke_width(), 1.0);
        assert_eq!(config.x_axis_label.tick_divisor, 2.0);
    }

    #[test]
    fn cell_size_accepts_fill_or_pixels() {
        let cell: CellConfig =
            serde_json::from_value(json!({"maxWidth": 30, "maxHeight": "fill"})).unwrap();
        assert_eq!(cell.max_width, CellSize::Max(30.0));
        assert_eq!(cell.max_height, CellSize::Fill);
        assert!(serde_json::from_value::<CellConfig>(json!({"maxWidth": "auto"})).is_err());
    }

    #[test]
    fn padding_accepts_number_or_sides() {
        let label: AxisLabelConfig =
            serde_json::from_value(json!({"padding": {"right": 8}})).unwrap();
        assert_eq!(label.padding.right, 8.0);
        assert_eq!(label.padding.left, 0.0);

        let label: AxisLabelConfig = serde_json::from_value(json!({"padding": 4})).unwrap();
        assert_eq!(label.padding, Padding::uniform(4.0));
    }

    #[test]
    fn merged_layers_theme_then_overrides() {
        let theme = json!({"grid": {"stroke": {"color": "#111111", "width": 3}}});
        let overrides = json!({
            "grid": {"stroke": {"width": 2}},
            "xAxisLabel": {"fontSize": 10, "tickDivisor": 1},
            "timeZoneOffsetMinutes": null
        });
        let config = Config::merged(&theme, &overrides).unwrap();
        assert_eq!(config.grid.stroke.color, "#111111");
        assert_eq!(config.grid_stroke_width(), 2.0);
        assert_eq!(config.x_axis_label.label.font_size, 10.0);
        assert_eq!(config.x_axis_label.tick_divisor, 1.0);
        assert_eq!(config.time_zone_offset_minutes, 0);
    }

    #[test]
    fn merged_reports_bad_values() {
        let err = Config::merged(&json!({}), &json!({"cell": {"maxWidth": "wide"}})).unwrap_err();
        assert!(matches!(err, HeatviewError::Config(_)));
    }
}
