//! Input table types: domain values, rows, column domain descriptor, filters.

use std::collections::HashSet;
use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A single value on either axis.
///
/// Numbers (including epoch-millisecond timestamps) are totally ordered so
/// that values can be hashed and used in composite keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainValue {
    Number(OrderedFloat<f64>),
    Text(String),
}

impl DomainValue {
    /// Numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n.into_inner()),
            Self::Text(_) => None,
        }
    }

    /// Text payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl From<f64> for DomainValue {
    fn from(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }
}

impl From<i64> for DomainValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(OrderedFloat(value as f64))
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DomainValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for DomainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n.into_inner()),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One row of the bucketed input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCellDatum {
    pub x: DomainValue,
    pub y: DomainValue,
    pub value: f64,
    /// Position of the row in the caller's original dataset.
    #[serde(default)]
    pub original_index: usize,
}

impl HeatmapCellDatum {
    pub fn new(
        x: impl Into<DomainValue>,
        y: impl Into<DomainValue>,
        value: f64,
        original_index: usize,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            value,
            original_index,
        }
    }

    /// Composite identity of the cell this row produces.
    pub fn key(&self) -> CellKey {
        CellKey::new(self.x.clone(), self.y.clone())
    }
}

/// Composite identity of a cell: the source row's `(x, y)` domain values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    pub x: DomainValue,
    pub y: DomainValue,
}

impl CellKey {
    pub fn new(x: DomainValue, y: DomainValue) -> Self {
        Self { x, y }
    }
}

/// Kind of the column (x) domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleKind {
    /// Discrete categories in the given order.
    #[default]
    Categorical,
    /// Ordered numeric ticks mapped linearly.
    Continuous,
    /// `[start, end]` timestamps expanded by `min_interval`.
    Temporal,
}

/// Column domain descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XDomain {
    pub kind: ScaleKind,
    /// Categories, ordered ticks, or `[start, end]` for temporal domains.
    pub values: Vec<DomainValue>,
    /// Bucket width of a temporal domain, in the same unit as its values.
    #[serde(default)]
    pub min_interval: Option<f64>,
}

impl XDomain {
    pub fn categorical(values: impl IntoIterator<Item = impl Into<DomainValue>>) -> Self {
        Self {
            kind: ScaleKind::Categorical,
            values: values.into_iter().map(Into::into).collect(),
            min_interval: None,
        }
    }

    pub fn continuous(ticks: impl IntoIterator<Item = f64>) -> Self {
        Self {
            kind: ScaleKind::Continuous,
            values: ticks.into_iter().map(DomainValue::from).collect(),
            min_interval: None,
        }
    }

    pub fn temporal(start: f64, end: f64, min_interval: f64) -> Self {
        Self {
            kind: ScaleKind::Temporal,
            values: vec![start.into(), end.into()],
            min_interval: Some(min_interval),
        }
    }
}

/// The already-bucketed dataset consumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapTable {
    pub table: Vec<HeatmapCellDatum>,
    /// Distinct row categories, in display order.
    pub y_values: Vec<DomainValue>,
    pub x_domain: XDomain,
}

impl HeatmapTable {
    pub fn new(table: Vec<HeatmapCellDatum>, y_values: Vec<DomainValue>, x_domain: XDomain) -> Self {
        Self {
            table,
            y_values,
            x_domain,
        }
    }

    /// A table with no rows, no categories, and an empty categorical domain.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), XDomain::categorical(Vec::<DomainValue>::new()))
    }

    /// Derive row categories and the column domain from the rows themselves.
    ///
    /// Categories and continuous ticks keep first-seen order; a temporal
    /// domain spans the smallest to the largest numeric x.
    pub fn from_rows(rows: Vec<HeatmapCellDatum>, kind: ScaleKind, min_interval: Option<f64>) -> Self {
        let y_values = distinct(rows.iter().map(|d| &d.y));
        let x_domain = match kind {
            ScaleKind::Categorical | ScaleKind::Continuous => XDomain {
                kind,
                values: distinct(rows.iter().map(|d| &d.x)),
                min_interval,
            },
            ScaleKind::Temporal => {
                let bounds = rows
                    .iter()
                    .filter_map(|d| d.x.as_number())
                    .fold(None, |acc: Option<(f64, f64)>, t| match acc {
                        None => Some((t, t)),
                        Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
                    });
                XDomain {
                    kind,
                    values: bounds
                        .map(|(lo, hi)| vec![lo.into(), hi.into()])
                        .unwrap_or_default(),
                    min_interval,
                }
            }
        };
        Self::new(rows, y_values, x_domain)
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a DomainValue>) -> Vec<DomainValue> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}

/// A value bucket hidden through the legend: `[min, max]`, or `[min, null]`
/// for everything above the last boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, Option<f64>)", into = "(f64, Option<f64>)")]
pub struct FilterRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl FilterRange {
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Bounds are exclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        match self.max {
            Some(max) => value > self.min && value < max,
            None => value > self.min,
        }
    }
}

impl From<(f64, Option<f64>)> for FilterRange {
    fn from((min, max): (f64, Option<f64>)) -> Self {
        Self::new(min, max)
    }
}

impl From<FilterRange> for (f64, Option<f64>) {
    fn from(range: FilterRange) -> Self {
        (range.min, range.max)
    }
}

/// Whether `value` falls inside any hidden bucket.
pub fn is_in_filtered_range(value: f64, ranges: &[FilterRange]) -> bool {
    ranges.iter().any(|r| r.contains(value))
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
    fn domain_value_deserializes_numbers_and_text() {
        let values: Vec<DomainValue> = serde_json::from_str(r#"[1.5, "a", 3]"#).unwrap();
        assert_eq!(
            values,
            vec![DomainValue::from(1.5), DomainValue::from("a"), DomainValue::from(3.0)]
        );
    }

    #[test]
    fn number_and_text_never_share_a_key() {
        let number = CellKey::new(DomainValue::from(1.0), "y".into());
        let text = CellKey::new(DomainValue::from("1"), "y".into());
        assert_ne!(number, text);
    }

    #[test]
    fn filter_range_bounds_are_exclusive() {
        let closed = FilterRange::new(10.0, Some(20.0));
        assert!(!closed.contains(10.0));
        assert!(closed.contains(15.0));
        assert!(!closed.contains(20.0));

        let open = FilterRange::new(20.0, None);
        assert!(!open.contains(20.0));
        assert!(open.contains(1e9));
    }

    #[test]
    fn filter_range_json_is_a_tuple() {
        let ranges: Vec<FilterRange> = serde_json::from_str("[[0, 10], [50, null]]").unwrap();
        assert_eq!(
            ranges,
            vec![FilterRange::new(0.0, Some(10.0)), FilterRange::new(50.0, None)]
        );
        assert!(is_in_filtered_range(60.0, &ranges));
        assert!(!is_in_filtered_range(30.0, &ranges));
    }

    #[test]
    fn from_rows_keeps_first_seen_order() {
        let table = HeatmapTable::from_rows(
            vec![
                HeatmapCellDatum::new("b", "y2", 1.0, 0),
                HeatmapCellDatum::new("a", "y1", 2.0, 1),
                HeatmapCellDatum::new("b", "y1", 3.0, 2),
            ],
            ScaleKind::Categorical,
            None,
        );
        assert_eq!(table.y_values, vec!["y2".into(), "y1".into()]);
        assert_eq!(table.x_domain.values, vec!["b".into(), "a".into()]);
    }

    #[test]
    fn from_rows_temporal_spans_min_to_max() {
        let table = HeatmapTable::from_rows(
            vec![
                HeatmapCellDatum::new(300.0, "y", 1.0, 0),
                HeatmapCellDatum::new(100.0, "y", 1.0, 1),
                HeatmapCellDatum::new(200.0, "y", 1.0, 2),
            ],
            ScaleKind::Temporal,
            Some(100.0),
        );
        assert_eq!(table.x_domain.values, vec![100.0.into(), 300.0.into()]);
        assert_eq!(table.x_domain.min_interval, Some(100.0));
    }
}
