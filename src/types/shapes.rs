//! Render-ready shapes produced by the layout builders.

use serde::{Deserialize, Serialize};

use super::datum::{DomainValue, HeatmapCellDatum};
use super::geometry::{Line, Point};
use crate::color::Rgba;

/// Cell fill.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fill {
    pub color: Rgba,
}

/// Stroke color and width.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

/// One rendered heatmap cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Left edge, relative to the grid origin.
    pub x: f64,
    /// Top edge, relative to the grid origin.
    pub y: f64,
    /// Position of the cell's row category.
    pub y_index: usize,
    pub width: f64,
    pub height: f64,
    pub fill: Fill,
    pub stroke: Stroke,
    pub value: f64,
    pub formatted: String,
    /// False when the value falls in a bucket hidden through the legend.
    pub visible: bool,
    pub datum: HeatmapCellDatum,
}

/// A positioned axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBox {
    pub text: String,
    /// Domain value the label stands for.
    pub value: DomainValue,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub font_family: String,
}

/// Separators bounding the current page of rows and all columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridLineSet {
    /// Vertical lines, one per column boundary.
    pub x: Vec<Line>,
    /// Horizontal lines, one per page-row boundary.
    pub y: Vec<Line>,
    pub stroke: Stroke,
}

/// Everything the drawing backend needs for one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapViewModel {
    pub grid_origin: Point,
    pub grid_lines: GridLineSet,
    pub cells: Vec<Cell>,
    /// Column labels.
    pub x_values: Vec<TextBox>,
    /// Row labels.
    pub y_values: Vec<TextBox>,
    pub page_size: usize,
}
