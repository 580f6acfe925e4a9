//! Forward and inverse scales for the row and column axes.
//!
//! Every axis ends up as a band scale: categories directly, continuous ticks
//! as evenly spaced bands, and temporal `[start, end]` domains after expansion
//! into `min_interval` buckets. The inverse is quantize-style, so any finite
//! pixel offset resolves to a band and out-of-range offsets clamp to the
//! first or last one.

use std::collections::HashMap;

use crate::error::{HeatviewError, Result};
use crate::types::{CellSize, DomainValue, ScaleKind, XDomain};

/// Upper bound on the number of buckets a temporal domain may expand into.
pub const MAX_TEMPORAL_TICKS: usize = 100_000;

/// Equal-width bands over a discrete domain, no padding.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<DomainValue>,
    positions: HashMap<DomainValue, usize>,
    range: (f64, f64),
}

impl BandScale {
    /// Build a scale over `domain` mapped onto `range`. Duplicate values keep
    /// their first position.
    pub fn new(domain: &[DomainValue], range: (f64, f64)) -> Self {
        let mut positions = HashMap::with_capacity(domain.len());
        let mut unique = Vec::with_capacity(domain.len());
        for value in domain {
            if !positions.contains_key(value) {
                positions.insert(value.clone(), unique.len());
                unique.push(value.clone());
            }
        }
        Self {
            domain: unique,
            positions,
            range,
        }
    }

    pub fn domain(&self) -> &[DomainValue] {
        &self.domain
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Distance between band starts; zero for an empty domain.
    #[allow(clippy::cast_precision_loss)]
    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.domain.len() as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.step()
    }

    pub fn index_of(&self, value: &DomainValue) -> Option<usize> {
        self.positions.get(value).copied()
    }

    /// Band start of the value at `index`.
    #[allow(clippy::cast_precision_loss)]
    pub fn forward_index(&self, index: usize) -> Option<f64> {
        (index < self.domain.len()).then(|| self.range.0 + index as f64 * self.step())
    }

    /// Band start of `value`, or `None` when it is not in the domain.
    pub fn forward(&self, value: &DomainValue) -> Option<f64> {
        self.forward_index(self.index_of(value)?)
    }

    /// Index of the band containing `px`, clamped into the domain.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn invert_index(&self, px: f64) -> Option<usize> {
        if self.domain.is_empty() || !px.is_finite() {
            return None;
        }
        let last = self.domain.len() - 1;
        let span = self.range.1 - self.range.0;
        if span <= 0.0 {
            return Some(if px < self.range.0 { 0 } else { last });
        }
        let t = (px - self.range.0) / span * self.domain.len() as f64;
        if t <= 0.0 {
            return Some(0);
        }
        Some((t.floor() as usize).min(last))
    }

    /// Domain value whose band contains `px`.
    pub fn invert(&self, px: f64) -> Option<&DomainValue> {
        self.domain.get(self.invert_index(px)?)
    }
}

/// Column axis scale: a band scale plus the kind of its domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnScale {
    kind: ScaleKind,
    band: BandScale,
    min_interval: Option<f64>,
}

impl ColumnScale {
    /// Categorical scale with no columns.
    pub fn empty() -> Self {
        Self {
            kind: ScaleKind::Categorical,
            band: BandScale::new(&[], (0.0, 0.0)),
            min_interval: None,
        }
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    pub fn band(&self) -> &BandScale {
        &self.band
    }

    pub fn min_interval(&self) -> Option<f64> {
        self.min_interval
    }

    /// Whether positions are ordered numbers (continuous or temporal).
    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, ScaleKind::Continuous | ScaleKind::Temporal)
    }

    /// Insertion index of `value` in the ordered tick list.
    pub fn bisect_left(&self, value: f64) -> usize {
        self.band
            .domain()
            .partition_point(|tick| tick.as_number().is_some_and(|t| t < value))
    }
}

/// Row axis: one band per category over `[0, height]`.
pub fn build_row_scale(y_values: &[DomainValue], height: f64) -> BandScale {
    BandScale::new(y_values, (0.0, height))
}

/// Column axis over `[0, width]` for any domain kind.
pub fn build_column_scale(x_domain: &XDomain, width: f64) -> Result<ColumnScale> {
    if !width.is_finite() {
        return Err(HeatviewError::InvalidDimensions(format!(
            "non-finite column extent {width}"
        )));
    }
    let values = match x_domain.kind {
        ScaleKind::Categorical | ScaleKind::Continuous => x_domain.values.clone(),
        ScaleKind::Temporal => temporal_values(x_domain)?,
    };
    Ok(ColumnScale {
        kind: x_domain.kind,
        band: BandScale::new(&values, (0.0, width)),
        min_interval: x_domain.min_interval,
    })
}

fn temporal_values(x_domain: &XDomain) -> Result<Vec<DomainValue>> {
    let mut bounds = Vec::with_capacity(2);
    for value in &x_domain.values {
        let t = value.as_number().ok_or_else(|| {
            HeatviewError::TemporalDomain(format!("bound {value} is not a timestamp"))
        })?;
        bounds.push(t);
    }
    let (start, end) = match bounds.as_slice() {
        [] => return Ok(Vec::new()),
        [only] => (*only, *only),
        [first, .., last] => (*first, *last),
    };
    let interval = x_domain.min_interval.ok_or_else(|| {
        HeatviewError::TemporalDomain("temporal domain without minInterval".to_string())
    })?;
    Ok(expand_temporal_domain(start, end, interval)?
        .into_iter()
        .map(DomainValue::from)
        .collect())
}

/// Expand `[start, end]` into ticks `start + i * interval` until `end` is
/// reached. A zero-length domain still yields two ticks.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn expand_temporal_domain(start: f64, end: f64, interval: f64) -> Result<Vec<f64>> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(HeatviewError::InvalidInterval(interval));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(HeatviewError::TemporalDomain(format!(
            "non-finite bounds [{start}, {end}]"
        )));
    }
    let (start, end) = (start.min(end), start.max(end));
    let steps = if end > start {
        ((end - start) / interval).ceil()
    } else {
        1.0
    };
    if steps >= MAX_TEMPORAL_TICKS as f64 {
        return Err(HeatviewError::TooManyTicks {
            count: (steps as usize).saturating_add(1),
            limit: MAX_TEMPORAL_TICKS,
        });
    }
    let steps = steps as usize;
    Ok((0..=steps)
        .map(|i| start + i as f64 * interval)
        .collect())
}

/// Cell width inside a band: the band itself, or the configured cap.
pub fn resolve_cell_width(bandwidth: f64, max_width: CellSize) -> f64 {
    match max_width {
        CellSize::Fill => bandwidth,
        CellSize::Max(max) => bandwidth.min(max),
    }
}

/// Number of temporal labels to aim for.
///
/// How many sample labels fit side by side, divided by `divisor`. The
/// divisor is a readability heuristic, 2 by default.
pub fn desired_tick_count(chart_width: f64, label_width: f64, divisor: f64) -> f64 {
    if label_width <= 0.0 || divisor <= 0.0 {
        return f64::INFINITY;
    }
    (chart_width / label_width).floor() / divisor
}

/// Keep every `stride`-th tick so that roughly `desired` labels remain.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn label_stride(tick_count: usize, desired: f64) -> usize {
    if tick_count == 0 || desired >= tick_count as f64 {
        return 1;
    }
    if desired < 1.0 {
        return tick_count;
    }
    ((tick_count as f64 / desired).ceil() as usize).max(1)
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
    use test_case::test_case;

    fn abc() -> Vec<DomainValue> {
        vec!["a".into(), "b".into(), "c".into()]
    }

    #[test]
    fn band_forward_and_bandwidth() {
        let scale = BandScale::new(&abc(), (0.0, 300.0));
        assert_eq!(scale.bandwidth(), 100.0);
        assert_eq!(scale.forward(&"a".into()), Some(0.0));
        assert_eq!(scale.forward(&"c".into()), Some(200.0));
        assert_eq!(scale.forward(&"z".into()), None);
    }

    #[test_case(-50.0 => Some("a".to_string()); "before range clamps to first")]
    #[test_case(0.0 => Some("a".to_string()); "start")]
    #[test_case(99.9 => Some("a".to_string()); "inside first band")]
    #[test_case(100.0 => Some("b".to_string()); "band edge belongs to next band")]
    #[test_case(300.0 => Some("c".to_string()); "end clamps to last")]
    #[test_case(1e9 => Some("c".to_string()); "far right clamps to last")]
    #[test_case(f64::NAN => None; "nan has no band")]
    fn band_invert(px: f64) -> Option<String> {
        let scale = BandScale::new(&abc(), (0.0, 300.0));
        scale.invert(px).map(ToString::to_string)
    }

    #[test]
    fn empty_band_scale_never_matches() {
        let scale = BandScale::new(&[], (0.0, 300.0));
        assert_eq!(scale.bandwidth(), 0.0);
        assert!(scale.invert(10.0).is_none());
        assert!(scale.forward_index(0).is_none());
    }

    #[test]
    fn zero_extent_scale_resolves_to_edges() {
        let scale = BandScale::new(&abc(), (0.0, 0.0));
        assert_eq!(scale.invert(-1.0), Some(&"a".into()));
        assert_eq!(scale.invert(0.0), Some(&"c".into()));
    }

    #[test]
    fn duplicates_keep_first_position() {
        let scale = BandScale::new(&["a".into(), "b".into(), "a".into()], (0.0, 200.0));
        assert_eq!(scale.len(), 2);
        assert_eq!(scale.forward(&"b".into()), Some(100.0));
    }

    #[test]
    fn temporal_expansion_reaches_end() {
        assert_eq!(
            expand_temporal_domain(0.0, 300.0, 100.0).unwrap(),
            vec![0.0, 100.0, 200.0, 300.0]
        );
        assert_eq!(
            expand_temporal_domain(0.0, 250.0, 100.0).unwrap(),
            vec![0.0, 100.0, 200.0, 300.0]
        );
    }

    #[test]
    fn temporal_expansion_of_a_point_has_two_ticks() {
        assert_eq!(
            expand_temporal_domain(500.0, 500.0, 60.0).unwrap(),
            vec![500.0, 560.0]
        );
    }

    #[test]
    fn temporal_expansion_rejects_bad_input() {
        assert!(matches!(
            expand_temporal_domain(0.0, 10.0, 0.0),
            Err(HeatviewError::InvalidInterval(_))
        ));
        assert!(matches!(
            expand_temporal_domain(0.0, 1e12, 1.0),
            Err(HeatviewError::TooManyTicks { .. })
        ));
        assert!(matches!(
            expand_temporal_domain(f64::NAN, 10.0, 1.0),
            Err(HeatviewError::TemporalDomain(_))
        ));
    }

    #[test]
    fn column_scale_temporal_uses_expanded_ticks() {
        let scale = build_column_scale(&XDomain::temporal(1000.0, 1300.0, 100.0), 400.0).unwrap();
        assert_eq!(scale.band().len(), 4);
        assert_eq!(scale.band().bandwidth(), 100.0);
        assert_eq!(scale.bisect_left(1150.0), 2);
        assert_eq!(scale.bisect_left(5000.0), 4);
    }

    #[test]
    fn column_scale_temporal_without_bounds_is_empty() {
        let domain = XDomain {
            kind: ScaleKind::Temporal,
            values: Vec::new(),
            min_interval: Some(10.0),
        };
        assert!(build_column_scale(&domain, 100.0).unwrap().band().is_empty());
    }

    #[test]
    fn column_scale_temporal_rejects_text_bounds() {
        let domain = XDomain {
            kind: ScaleKind::Temporal,
            values: vec!["monday".into()],
            min_interval: Some(10.0),
        };
        assert!(matches!(
            build_column_scale(&domain, 100.0),
            Err(HeatviewError::TemporalDomain(_))
        ));
    }

    #[test]
    fn cell_width_respects_cap() {
        assert_eq!(resolve_cell_width(80.0, CellSize::Fill), 80.0);
        assert_eq!(resolve_cell_width(80.0, CellSize::Max(30.0)), 30.0);
        assert_eq!(resolve_cell_width(20.0, CellSize::Max(30.0)), 20.0);
    }

    #[test_case(100, 200.0 => 1; "everything fits")]
    #[test_case(100, 25.0 => 4; "thin to quarter")]
    #[test_case(100, 30.0 => 4; "round stride up")]
    #[test_case(10, 0.5 => 10; "less than one label keeps the first")]
    #[test_case(0, 3.0 => 1; "no ticks")]
    fn stride(ticks: usize, desired: f64) -> usize {
        label_stride(ticks, desired)
    }

    #[test]
    fn desired_ticks_halve_what_fits() {
        assert_eq!(desired_tick_count(1000.0, 100.0, 2.0), 5.0);
        assert_eq!(desired_tick_count(1000.0, 0.0, 2.0), f64::INFINITY);
    }
}
