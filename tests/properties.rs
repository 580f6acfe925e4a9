//! Property tests for heatview scales and picking
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_precision_loss
)]

mod common;

use common::{build, categorical_grid};
use heatview::scale::{expand_temporal_domain, BandScale, MAX_TEMPORAL_TICKS};
use heatview::{Dimensions, DomainValue, Point};
use proptest::prelude::*;

proptest! {
    #[test]
    fn band_forward_then_invert_is_identity(n in 1usize..200, extent in 1.0f64..10_000.0) {
        let domain: Vec<DomainValue> = (0..n).map(|i| DomainValue::from(format!("c{i}"))).collect();
        let scale = BandScale::new(&domain, (0.0, extent));
        for value in &domain {
            let start = scale.forward(value).unwrap();
            // probe the middle of the band to stay clear of float edges
            prop_assert_eq!(scale.invert(start + scale.bandwidth() / 2.0), Some(value));
        }
    }

    #[test]
    fn temporal_expansion_is_evenly_spaced(
        start in -1e9f64..1e9,
        steps in 0u32..2_000,
        interval in 1.0f64..1e6,
    ) {
        let end = start + f64::from(steps) * interval;
        let ticks = expand_temporal_domain(start, end, interval).unwrap();
        let expected = ((end - start) / interval).ceil().max(1.0) as usize + 1;
        prop_assert_eq!(ticks.len(), expected);
        prop_assert!(ticks.len() <= MAX_TEMPORAL_TICKS);
        for (i, t) in ticks.iter().enumerate() {
            prop_assert_eq!(*t, start + i as f64 * interval);
        }
        prop_assert!(*ticks.last().unwrap() >= end);
    }

    #[test]
    fn dragging_past_the_viewport_equals_dragging_to_its_edge(
        x1 in -500.0f64..800.0,
        y1 in -500.0f64..800.0,
        x2 in -500.0f64..800.0,
        y2 in -500.0f64..800.0,
    ) {
        let dims = Dimensions::new(20.0, 10.0, 300.0, 200.0);
        let model = build(&categorical_grid(&["a", "b", "c", "d"], &["y1", "y2", "y3"]), dims);
        let raw = model.pick_drag_area([Point::new(x1, y1), Point::new(x2, y2)]);
        let clamped = model.pick_drag_area([
            dims.clamp(Point::new(x1, y1)),
            dims.clamp(Point::new(x2, y2)),
        ]);
        prop_assert_eq!(raw, clamped);
    }

    #[test]
    fn point_picks_agree_with_drag_picks(x in 20.0f64..320.0, y in 10.0f64..210.0) {
        let dims = Dimensions::new(20.0, 10.0, 300.0, 200.0);
        let model = build(&categorical_grid(&["a", "b", "c", "d"], &["y1", "y2", "y3"]), dims);
        let point = Point::new(x, y);
        let single = model.pick_quads(point);
        let area = model.pick_drag_area([point, point]);
        prop_assert_eq!(single.cells(), area.cells.as_slice());
    }
}
