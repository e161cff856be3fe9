//! Drag state machine.
//!
//! A drag moves through `Idle -> Dragging -> Idle`. Offsets live in "pan
//! space": pan offset `0` is the handle's resting position at the initial
//! value.

use tracing::trace;

use crate::SliderGeometry;

/// Capability implemented by anything that consumes horizontal drags.
///
/// A [`GestureDispatcher`](crate::GestureDispatcher) calls these in order
/// `on_start`, any number of `on_move`, then `on_end`.
pub trait GestureHandler {
    /// A pointer went down on the handler.
    fn on_start(&mut self);

    /// The pointer moved. Deltas are cumulative since `on_start`.
    fn on_move(&mut self, delta_x: f64, delta_y: f64);

    /// The pointer was released or the gesture was cancelled.
    fn on_end(&mut self);
}

/// Phase of the drag state machine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging,
}

/// Offsets accumulated from drags.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Sum of the deltas of all finished drags.
    pub committed_offset_px: f64,
    /// Delta of the drag in progress.
    pub live_offset_px: f64,
    /// Overshoot trimmed off at previous drag starts.
    pub clamp_correction_px: f64,
    phase: DragPhase,
}

impl DragState {
    /// Current phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Handle translation before clamping.
    pub fn pan_offset_px(&self) -> f64 {
        self.committed_offset_px + self.live_offset_px - self.clamp_correction_px
    }

    /// Starts a drag.
    ///
    /// If the handle was dragged past a boundary, the overshoot is folded
    /// into `clamp_correction_px` so the new drag starts from the edge the
    /// user sees instead of from the invisible overshot position.
    pub fn begin(&mut self, geometry: &SliderGeometry) {
        if self.is_dragging() {
            // A missing end event; keep what the previous drag achieved.
            self.finish();
        }
        let pan = self.pan_offset_px();
        // Without a track there are no boundaries to clamp against.
        let clamped = if geometry.is_laid_out() {
            geometry.clamp_pan(pan)
        } else {
            pan
        };
        self.clamp_correction_px += pan - clamped;
        self.live_offset_px = 0.0;
        self.phase = DragPhase::Dragging;
        trace!(pan, clamped, correction = self.clamp_correction_px, "drag started");
    }

    /// Records the cumulative delta of the drag in progress.
    ///
    /// Ignored while idle.
    pub fn update(&mut self, delta_x: f64) {
        if self.is_dragging() {
            self.live_offset_px = delta_x;
        }
    }

    /// Flattens the live delta into the committed offset and returns to idle.
    pub fn finish(&mut self) {
        self.committed_offset_px += self.live_offset_px;
        self.live_offset_px = 0.0;
        self.phase = DragPhase::Idle;
    }
}
