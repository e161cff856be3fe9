//! Track geometry derived from the laid-out slider width.
//!
//! Offsets are centred: pan offset `0` places the handle where the initial
//! value sits, and `min_boundary_px`/`max_boundary_px` are the pan offsets of
//! the range endpoints.
//!
//! Everything here is f64: a wide range makes the step width tiny next to
//! the initial offset, and f32 loses whole steps at that scale.

use tracing::{debug, warn};

use crate::SliderRange;

/// Pixel geometry of a laid-out track.
///
/// A zeroed geometry means "not laid out yet"; see [`SliderGeometry::is_laid_out`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    /// Usable track width in pixels.
    pub track_width_px: f64,
    /// Pixels per one unit of value.
    pub step_width_px: f64,
    /// Offset from the track centre to the initial value's position.
    pub init_offset_px: f64,
    /// Pan offset of `min`.
    pub min_boundary_px: f64,
    /// Pan offset of `max`.
    pub max_boundary_px: f64,
}

impl SliderGeometry {
    /// Resolves geometry for a track of `track_width_px` pixels.
    ///
    /// Returns the zeroed geometry when the width is not positive or not
    /// finite, so nothing downstream divides by zero.
    pub fn resolve(track_width_px: f64, range: &SliderRange) -> Self {
        if !track_width_px.is_finite() || track_width_px <= 0.0 {
            warn!(track_width_px, "slider track has no usable width");
            return Self::default();
        }

        let step_width_px = track_width_px / range.span();
        let init_offset_px = (range.initial_steps() - range.span() / 2.0) * step_width_px;
        let half = track_width_px / 2.0;

        let geometry = Self {
            track_width_px,
            step_width_px,
            init_offset_px,
            min_boundary_px: -half - init_offset_px,
            max_boundary_px: half - init_offset_px,
        };
        debug!(?geometry, "resolved slider geometry");
        geometry
    }

    /// Resolves geometry from the slider container's layout size.
    ///
    /// The handle is as wide as the container is tall, so the track loses
    /// one handle width to keep the handle inside the borders.
    pub fn from_layout(width: f64, height: f64, range: &SliderRange) -> Self {
        Self::resolve(width - height, range)
    }

    /// Whether a positive track width has been resolved.
    pub fn is_laid_out(&self) -> bool {
        self.track_width_px > 0.0 && self.step_width_px > 0.0
    }

    /// Clamps a pan offset into `[min_boundary_px, max_boundary_px]`.
    pub fn clamp_pan(&self, pan_px: f64) -> f64 {
        pan_px.clamp(self.min_boundary_px, self.max_boundary_px)
    }
}
