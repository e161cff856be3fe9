//! Offset-to-value mapping.

use crate::{DragState, SliderGeometry, SliderRange};

/// Total offset of the handle from the track centre.
pub fn total_offset_px(drag: &DragState, geometry: &SliderGeometry) -> f64 {
    drag.live_offset_px + drag.committed_offset_px + geometry.init_offset_px
        - drag.clamp_correction_px
}

/// Maps a total offset to a value in the range.
///
/// The value index is `floor((total + track_width/2 + step/2) / step)`
/// counted from `min`. Adding half a step before flooring snaps to the
/// nearest step. Returns `None` when the track has not been laid out.
pub fn value_at_offset(
    total_offset_px: f64,
    geometry: &SliderGeometry,
    range: &SliderRange,
) -> Option<i64> {
    value_at_pan(total_offset_px - geometry.init_offset_px, geometry, range)
}

/// Maps the current drag state to a value in the range.
pub fn map_value(drag: &DragState, geometry: &SliderGeometry, range: &SliderRange) -> Option<i64> {
    value_at_pan(drag.pan_offset_px(), geometry, range)
}

// `total + track_width/2` is `pan + (initial - min) * step`, so the index is
// counted from `initial` instead. That keeps the large `initial - min` term
// out of the float math: pan 0 maps back to `initial` exactly.
fn value_at_pan(pan_offset_px: f64, geometry: &SliderGeometry, range: &SliderRange) -> Option<i64> {
    if !geometry.is_laid_out() || !pan_offset_px.is_finite() {
        return None;
    }
    let steps = ((pan_offset_px + geometry.step_width_px / 2.0) / geometry.step_width_px).floor();
    // f64 -> i64 saturates, and the clamp handles the rest.
    Some(range.clamp(range.initial().saturating_add(steps as i64)))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn range(min: i64, max: i64, initial: i64) -> SliderRange {
        SliderRange::new(min, max, initial).unwrap()
    }

    fn panned(pan: f64) -> DragState {
        let mut drag = DragState::default();
        drag.committed_offset_px = pan;
        drag
    }

    #[test]
    fn initial_value_is_shown_after_layout() {
        let range = range(0, 99, 12);
        for width in [37.0, 200.0, 311.5, 1080.0] {
            let geometry = SliderGeometry::resolve(width, &range);
            assert_eq!(map_value(&DragState::default(), &geometry, &range), Some(12));
        }
    }

    #[test]
    fn fifty_pixel_drag_moves_twenty_five_steps() {
        let range = range(0, 99, 12);
        let geometry = SliderGeometry::resolve(200.0, &range);
        assert!((geometry.step_width_px - 2.0202).abs() < 1e-3);

        assert_eq!(map_value(&panned(50.0), &geometry, &range), Some(37));
        assert_eq!(map_value(&panned(500.0), &geometry, &range), Some(99));
    }

    #[test]
    fn rounds_to_nearest_step() {
        let range = range(0, 10, 5);
        let geometry = SliderGeometry::resolve(100.0, &range);
        assert_eq!(map_value(&panned(4.9), &geometry, &range), Some(5));
        assert_eq!(map_value(&panned(5.1), &geometry, &range), Some(6));
        assert_eq!(map_value(&panned(-5.1), &geometry, &range), Some(4));
    }

    #[test]
    fn non_zero_min_is_offset() {
        let range = range(10, 20, 15);
        let geometry = SliderGeometry::resolve(100.0, &range);
        assert_eq!(map_value(&DragState::default(), &geometry, &range), Some(15));
        assert_eq!(map_value(&panned(-1000.0), &geometry, &range), Some(10));
        assert_eq!(map_value(&panned(1000.0), &geometry, &range), Some(20));
    }

    #[test]
    fn unlaid_track_has_no_value() {
        let range = range(0, 99, 12);
        let geometry = SliderGeometry::resolve(0.0, &range);
        assert_eq!(map_value(&panned(50.0), &geometry, &range), None);
    }

    #[test]
    fn mapping_is_idempotent() {
        let range = range(0, 99, 12);
        let geometry = SliderGeometry::resolve(200.0, &range);
        let mut drag = panned(80.0);
        drag.live_offset_px = -13.5;
        drag.clamp_correction_px = 4.0;
        let first = (total_offset_px(&drag, &geometry), map_value(&drag, &geometry, &range));
        let second = (total_offset_px(&drag, &geometry), map_value(&drag, &geometry, &range));
        assert_eq!(first, second);
    }

    #[test]
    fn wide_range_keeps_initial_value_and_whole_steps() {
        let range = range(0, 100_000_000, 12_345_678);
        let geometry = SliderGeometry::from_layout(260.0, 60.0, &range);
        assert_eq!(map_value(&DragState::default(), &geometry, &range), Some(12_345_678));
        assert_eq!(map_value(&panned(50.0), &geometry, &range), Some(37_345_678));
    }

    #[test]
    fn full_i64_range_maps_to_endpoints() {
        let range = range(i64::MIN, i64::MAX, 0);
        let geometry = SliderGeometry::from_layout(260.0, 60.0, &range);
        assert_eq!(map_value(&DragState::default(), &geometry, &range), Some(0));
        assert_eq!(map_value(&panned(1000.0), &geometry, &range), Some(i64::MAX));
        assert_eq!(map_value(&panned(-1000.0), &geometry, &range), Some(i64::MIN));
    }

    proptest! {
        #[test]
        fn layout_round_trips_initial_value(
            min in -1_000_000_000_000i64..1_000_000_000_000,
            span in 1i64..1_000_000_000_000,
            initial_at in 0.0f64..=1.0,
            width in 1.0f64..4000.0,
        ) {
            let max = min + span;
            let initial = min + (span as f64 * initial_at) as i64;
            let range = range(min, max, initial.clamp(min, max));
            let geometry = SliderGeometry::resolve(width, &range);
            let total = total_offset_px(&DragState::default(), &geometry);
            prop_assert_eq!(value_at_offset(total, &geometry, &range), Some(range.initial()));
            prop_assert_eq!(map_value(&DragState::default(), &geometry, &range), Some(range.initial()));
        }

        #[test]
        fn beyond_boundaries_clamps(
            width in 10.0f64..2000.0,
            initial in 0i64..=50,
            overshoot in 0.0f64..10_000.0,
        ) {
            let range = range(0, 50, initial);
            let geometry = SliderGeometry::resolve(width, &range);
            let past_max = panned(geometry.max_boundary_px + overshoot);
            let past_min = panned(geometry.min_boundary_px - overshoot);
            prop_assert_eq!(map_value(&past_max, &geometry, &range), Some(50));
            prop_assert_eq!(map_value(&past_min, &geometry, &range), Some(0));
        }

        #[test]
        fn value_is_monotonic(
            width in 10.0f64..2000.0,
            a in -3000.0f64..3000.0,
            b in -3000.0f64..3000.0,
        ) {
            let range = range(-20, 80, 0);
            let geometry = SliderGeometry::resolve(width, &range);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo = value_at_offset(lo, &geometry, &range);
            let hi = value_at_offset(hi, &geometry, &range);
            prop_assert!(lo <= hi);
        }
    }
}
