//! Visual mapping from slider state to a drawable scene.
//!
//! The slider does not draw itself. It produces a [`SliderScene`] in
//! container coordinates and hands it to whatever implements
//! [`SliderRenderer`].

use crate::{Color, Px, PxPosition, PxRect, SliderGeometry, ValueSlider};

/// Thickness of the track line.
pub const TRACK_THICKNESS: Px = Px(4);

/// Something that can draw a slider scene.
pub trait SliderRenderer {
    /// Draws one frame of the slider.
    fn draw(&mut self, scene: &SliderScene);
}

/// Everything a renderer needs to draw the slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderScene {
    /// Bounds of the whole slider.
    pub container: PxRect,
    /// Unfilled track line.
    pub track: PxRect,
    /// Filled part of the track, from the track start to the handle centre.
    pub fill: PxRect,
    /// Centre of the round handle.
    pub handle_center: PxPosition,
    /// Handle diameter, equal to the container height.
    pub handle_diameter: Px,
    /// Icon token drawn in the handle.
    pub icon: String,
    /// Caption drawn in the handle.
    pub label: String,
    /// Current value, formatted.
    pub value_text: String,
    /// Current value.
    pub value: i64,
    /// Unclamped handle offset from the track centre.
    pub total_offset_px: f64,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Fill and icon color.
    pub highlight_color: Color,
    /// Unfilled track color.
    pub track_color: Color,
    /// Handle color.
    pub handle_color: Color,
}

/// Linearly maps `x` from `input` onto `output`, clamping to the output
/// endpoints outside the input range.
///
/// A degenerate input range maps everything to `output.0`.
pub fn interpolate_clamped(x: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = if input.0 <= input.1 {
        (input.0, input.1)
    } else {
        (input.1, input.0)
    };
    let span = in_hi - in_lo;
    if span <= 0.0 || !x.is_finite() {
        return output.0;
    }
    let t = ((x - in_lo) / span).clamp(0.0, 1.0);
    let t = if input.0 <= input.1 { t } else { 1.0 - t };
    output.0 + (output.1 - output.0) * t
}

/// Translation of the handle from its anchor at the initial value.
pub fn handle_translation(pan_offset_px: f64, geometry: &SliderGeometry) -> f64 {
    let bounds = (geometry.min_boundary_px, geometry.max_boundary_px);
    interpolate_clamped(pan_offset_px, bounds, bounds)
}

/// Translation of a full-width fill bar; `0` means fully filled and
/// `-track_width` means empty.
pub fn fill_translation(pan_offset_px: f64, geometry: &SliderGeometry) -> f64 {
    let shift = geometry.init_offset_px - geometry.track_width_px / 2.0;
    interpolate_clamped(
        pan_offset_px,
        (geometry.min_boundary_px, geometry.max_boundary_px),
        (
            geometry.min_boundary_px + shift,
            geometry.max_boundary_px + shift,
        ),
    )
}

pub(crate) fn build_scene(slider: &ValueSlider, container: (f64, f64)) -> SliderScene {
    let (width, height) = container;
    let geometry = slider.geometry();
    let args = slider.args();
    let container_rect = PxRect::new(
        Px::ZERO,
        Px::ZERO,
        Px::saturating_from_f64(width.max(0.0)),
        Px::saturating_from_f64(height.max(0.0)),
    );
    let handle_diameter = container_rect.height;
    let center_y = Px(handle_diameter.0 / 2);

    let (track, fill, handle_x) = if geometry.is_laid_out() {
        let track_start = height / 2.0;
        let pan = slider.drag_state().pan_offset_px();
        let handle_x = track_start
            + geometry.track_width_px / 2.0
            + geometry.init_offset_px
            + handle_translation(pan, &geometry);
        let filled = geometry.track_width_px + fill_translation(pan, &geometry);
        let track_y = center_y - Px(TRACK_THICKNESS.0 / 2);
        let start = Px::saturating_from_f64(track_start);
        (
            PxRect::new(
                start,
                track_y,
                Px::saturating_from_f64(geometry.track_width_px),
                TRACK_THICKNESS,
            ),
            PxRect::new(
                start,
                track_y,
                Px::saturating_from_f64(filled),
                TRACK_THICKNESS,
            ),
            Px::saturating_from_f64(handle_x),
        )
    } else {
        (PxRect::ZERO, PxRect::ZERO, Px(container_rect.width.0 / 2))
    };

    SliderScene {
        container: container_rect,
        track,
        fill,
        handle_center: PxPosition::new(handle_x, center_y),
        handle_diameter,
        icon: args.icon.clone(),
        label: args.label.clone(),
        value_text: slider.value().to_string(),
        value: slider.value(),
        total_offset_px: slider.total_offset_px(),
        dragging: slider.drag_state().is_dragging(),
        highlight_color: args.highlight_color,
        track_color: args.track_color,
        handle_color: args.handle_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GestureHandler, SliderRange, ValueSliderArgs};

    fn laid_out(min: i64, max: i64, initial: i64) -> ValueSlider {
        let mut slider = ValueSlider::new(
            ValueSliderArgs::default()
                .min(min)
                .max(max)
                .initial_value(initial),
        )
        .unwrap();
        // Track: 200 px starting at x = 10.
        slider.on_layout(220.0, 20.0);
        slider
    }

    #[test]
    fn interpolation_clamps_outside_input() {
        assert_eq!(interpolate_clamped(5.0, (0.0, 10.0), (0.0, 100.0)), 50.0);
        assert_eq!(interpolate_clamped(-5.0, (0.0, 10.0), (0.0, 100.0)), 0.0);
        assert_eq!(interpolate_clamped(15.0, (0.0, 10.0), (0.0, 100.0)), 100.0);
        assert_eq!(interpolate_clamped(2.5, (10.0, 0.0), (0.0, 100.0)), 75.0);
        assert_eq!(interpolate_clamped(3.0, (1.0, 1.0), (7.0, 9.0)), 7.0);
    }

    #[test]
    fn fill_translation_spans_track() {
        let geometry = SliderGeometry::resolve(200.0, &SliderRange::new(0, 100, 10).unwrap());
        assert_eq!(fill_translation(geometry.min_boundary_px, &geometry), -200.0);
        assert_eq!(fill_translation(geometry.max_boundary_px, &geometry), 0.0);
        assert_eq!(fill_translation(1e6, &geometry), 0.0);
        assert_eq!(handle_translation(-1e6, &geometry), geometry.min_boundary_px);
    }

    #[test]
    fn scene_places_handle_at_initial_value() {
        let scene = laid_out(0, 100, 25).scene();
        assert_eq!(scene.container, PxRect::new(Px(0), Px(0), Px(220), Px(20)));
        assert_eq!(scene.track, PxRect::new(Px(10), Px(8), Px(200), Px(4)));
        assert_eq!(scene.handle_center, PxPosition::new(Px(60), Px(10)));
        assert_eq!(scene.fill.width, Px(50));
        assert_eq!(scene.fill.right(), scene.handle_center.x);
        assert_eq!(scene.value_text, "25");
        assert_eq!(scene.handle_diameter, Px(20));
    }

    #[test]
    fn scene_clamps_handle_to_track() {
        let mut slider = laid_out(0, 100, 25);
        slider.on_start();
        slider.on_move(400.0, 0.0);
        let scene = slider.scene();
        assert!(scene.dragging);
        assert_eq!(scene.handle_center.x, Px(210));
        assert_eq!(scene.fill.width, Px(200));
        assert_eq!(scene.value, 100);
        assert_eq!(scene.total_offset_px, 350.0);

        slider.on_move(-400.0, 0.0);
        let scene = slider.scene();
        assert_eq!(scene.handle_center.x, Px(10));
        assert_eq!(scene.fill.width, Px(0));
        assert_eq!(scene.value, 0);
    }

    #[test]
    fn scene_before_layout_is_empty() {
        let slider = ValueSlider::new(ValueSliderArgs::default()).unwrap();
        let scene = slider.scene();
        assert_eq!(scene.track, PxRect::ZERO);
        assert_eq!(scene.fill, PxRect::ZERO);
        assert_eq!(scene.value_text, "12");
        assert_eq!(scene.label, "Price");
    }
}
