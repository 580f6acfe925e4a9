//! Axis label placement.

use crate::format::{offset_from_minutes, Formatter};
use crate::scale::{desired_tick_count, label_stride, BandScale, ColumnScale};
use crate::text::TextMeasure;
use crate::types::{Config, Dimensions, DomainValue, ScaleKind, TextBox};

/// Column labels, centered on their bands below the current page.
///
/// Temporal axes keep every k-th tick so the labels fit the chart width.
pub fn column_labels(
    columns: &ColumnScale,
    dims: &Dimensions,
    cell_height: f64,
    page_size: usize,
    config: &Config,
    measure: &dyn TextMeasure,
) -> Vec<TextBox> {
    let label = &config.x_axis_label.label;
    if !label.visible {
        return Vec::new();
    }
    let band = columns.band();
    let offset = offset_from_minutes(config.time_zone_offset_minutes);
    let formatter = match (&label.formatter, columns.kind()) {
        (Formatter::Default, ScaleKind::Temporal) => Formatter::timestamp(),
        (formatter, _) => formatter.clone(),
    };

    #[allow(clippy::cast_precision_loss)]
    let y = cell_height * page_size as f64 + label.font_size / 2.0 + label.padding.top;
    let half_band = band.bandwidth() / 2.0;

    let stride = match (columns.kind(), band.domain().first()) {
        (ScaleKind::Temporal, Some(first)) => {
            let sample = formatter.format(first, offset);
            let sample_width = measure.width(&sample, label.font_size, &label.font_family);
            let desired = desired_tick_count(dims.width, sample_width, config.x_axis_label.tick_divisor);
            label_stride(band.len(), desired)
        }
        _ => 1,
    };

    band.domain()
        .iter()
        .enumerate()
        .step_by(stride)
        .filter_map(|(i, value)| {
            let x = band.forward_index(i)?;
            Some(TextBox {
                text: formatter.format(value, offset),
                value: value.clone(),
                x: dims.left + x + half_band,
                y,
                font_size: label.font_size,
                font_family: label.font_family.clone(),
            })
        })
        .collect()
}

/// Row labels, right-aligned against the plotting area.
pub fn row_labels(rows: &BandScale, dims: &Dimensions, config: &Config) -> Vec<TextBox> {
    let label = &config.y_axis_label;
    if !label.visible {
        return Vec::new();
    }
    let offset = offset_from_minutes(config.time_zone_offset_minutes);
    let half_row = rows.bandwidth() / 2.0;
    rows.domain()
        .iter()
        .filter_map(|value: &DomainValue| {
            Some(TextBox {
                text: label.formatter.format(value, offset),
                value: value.clone(),
                x: dims.left - label.padding.right,
                y: half_row + rows.forward(value)?,
                font_size: label.font_size,
                font_family: label.font_family.clone(),
            })
        })
        .collect()
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
    use crate::scale::{build_column_scale, build_row_scale};
    use crate::text::EstimatedTextMeasure;
    use crate::types::XDomain;

    #[test]
    fn categorical_labels_are_centered_below_the_page() {
        let columns = build_column_scale(&XDomain::categorical(["a", "b", "c"]), 300.0).unwrap();
        let dims = Dimensions::new(40.0, 0.0, 300.0, 200.0);
        let labels = column_labels(
            &columns,
            &dims,
            20.0,
            5,
            &Config::default(),
            &EstimatedTextMeasure::default(),
        );
        let xs: Vec<f64> = labels.iter().map(|l| l.x).collect();
        assert_eq!(xs, vec![90.0, 190.0, 290.0]);
        assert_eq!(labels[0].y, 20.0 * 5.0 + 6.0 + 6.0);
        assert_eq!(labels[1].text, "b");
    }

    #[test]
    fn temporal_labels_are_thinned() {
        // 10 ticks and 10-char labels: two fit in 100px, halved to one.
        let columns = build_column_scale(&XDomain::temporal(0.0, 9.0, 1.0), 100.0).unwrap();
        let dims = Dimensions::new(0.0, 0.0, 100.0, 100.0);
        let mut config = Config::default();
        config.x_axis_label.label.font_size = 6.0;
        config.x_axis_label.label.formatter = Formatter::Fixed(8);
        let measure = EstimatedTextMeasure::default();
        let labels = column_labels(&columns, &dims, 10.0, 1, &config, &measure);
        assert_eq!(labels.len(), 1);

        config.x_axis_label.tick_divisor = 1.0;
        let labels = column_labels(&columns, &dims, 10.0, 1, &config, &measure);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[1].value, DomainValue::from(5.0));
    }

    #[test]
    fn temporal_default_formatter_renders_timestamps() {
        let columns =
            build_column_scale(&XDomain::temporal(0.0, 60_000.0, 60_000.0), 1000.0).unwrap();
        let dims = Dimensions::new(0.0, 0.0, 1000.0, 100.0);
        let labels = column_labels(
            &columns,
            &dims,
            10.0,
            1,
            &Config::default(),
            &EstimatedTextMeasure::default(),
        );
        assert_eq!(labels[0].text, "1970-01-01 00:00:00");
        assert_eq!(labels[1].text, "1970-01-01 00:01:00");
    }

    #[test]
    fn row_labels_sit_left_of_the_grid() {
        let rows = build_row_scale(&["y1".into(), "y2".into()], 100.0);
        let dims = Dimensions::new(50.0, 10.0, 200.0, 100.0);
        let labels = row_labels(&rows, &dims, &Config::default());
        assert_eq!(labels.len(), 2);
        assert_eq!((labels[1].x, labels[1].y), (44.0, 75.0));
    }

    #[test]
    fn hidden_axes_produce_no_labels() {
        let rows = build_row_scale(&["y1".into()], 100.0);
        let mut config = Config::default();
        config.y_axis_label.visible = false;
        assert!(row_labels(&rows, &Dimensions::default(), &config).is_empty());
    }
}
