//! The value slider component.
//!
//! ## Usage
//!
//! Build a [`ValueSlider`] from [`ValueSliderArgs`], feed it layout and drag
//! events, and read [`ValueSlider::value`] or [`ValueSlider::scene`] back
//! for drawing.
//!
//! ```
//! use value_slider::{GestureHandler, ValueSlider, ValueSliderArgs};
//!
//! let mut slider = ValueSlider::new(ValueSliderArgs::default()).unwrap();
//! slider.on_layout(260.0, 60.0);
//! assert_eq!(slider.value(), 12);
//!
//! slider.on_start();
//! slider.on_move(50.0, 3.0);
//! slider.on_end();
//! assert_eq!(slider.value(), 37);
//! ```
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, instrument, warn};

use crate::{
    DragPhase, DragState, GestureHandler, SliderError, SliderGeometry, SliderRange,
    ValueSliderArgs, mapper,
    render::{SliderScene, build_scene},
};

/// A horizontal slider selecting an integer in `[min, max]`.
#[derive(Debug, Clone)]
pub struct ValueSlider {
    args: ValueSliderArgs,
    range: SliderRange,
    geometry: SliderGeometry,
    container: (f64, f64),
    drag: DragState,
    display_value: i64,
}

impl ValueSlider {
    /// Creates a slider, rejecting inverted ranges and out-of-range initial
    /// values.
    pub fn new(args: ValueSliderArgs) -> Result<Self, SliderError> {
        let range = args.validate()?;
        debug!(
            min = range.min(),
            max = range.max(),
            initial = range.initial(),
            label = %args.label,
            "creating value slider"
        );
        Ok(Self {
            args,
            range,
            geometry: SliderGeometry::default(),
            container: (0.0, 0.0),
            drag: DragState::default(),
            display_value: range.initial(),
        })
    }

    /// Arguments the slider was built with.
    pub fn args(&self) -> &ValueSliderArgs {
        &self.args
    }

    /// Validated range.
    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// Geometry from the last layout.
    pub fn geometry(&self) -> SliderGeometry {
        self.geometry
    }

    /// Accumulated drag offsets.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Current drag phase.
    pub fn phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// Value currently displayed.
    ///
    /// Before the first usable layout this is the initial value; while the
    /// track has no width it is the last value computed.
    pub fn value(&self) -> i64 {
        self.display_value
    }

    /// Offset of the handle from the track centre, unclamped.
    pub fn total_offset_px(&self) -> f64 {
        mapper::total_offset_px(&self.drag, &self.geometry)
    }

    /// Lays the slider out in a `width` x `height` container.
    #[instrument(level = "debug", skip(self))]
    pub fn on_layout(&mut self, width: f64, height: f64) {
        self.container = (width, height);
        self.geometry = SliderGeometry::from_layout(width, height, &self.range);
        self.refresh();
    }

    /// Scene for the current state.
    pub fn scene(&self) -> SliderScene {
        build_scene(self, self.container)
    }

    /// Recomputes the displayed value and notifies `on_change` when it moved.
    fn refresh(&mut self) {
        let Some(value) = mapper::map_value(&self.drag, &self.geometry, &self.range) else {
            return;
        };
        if value == self.display_value {
            return;
        }
        debug!(from = self.display_value, to = value, "slider value changed");
        self.display_value = value;
        if let Some(on_change) = self.args.on_change.as_ref() {
            on_change.call(value);
        }
    }
}

impl GestureHandler for ValueSlider {
    #[instrument(level = "trace", skip(self))]
    fn on_start(&mut self) {
        self.drag.begin(&self.geometry);
        self.refresh();
    }

    fn on_move(&mut self, delta_x: f64, _delta_y: f64) {
        if !delta_x.is_finite() {
            warn!(delta_x, "dropping non-finite drag delta");
            return;
        }
        self.drag.update(delta_x);
        self.refresh();
    }

    #[instrument(level = "trace", skip(self))]
    fn on_end(&mut self) {
        self.drag.finish();
        self.refresh();
    }
}

/// Shared handle to a [`ValueSlider`].
///
/// The gesture dispatcher holds one clone and mutates through it; the render
/// side holds another and reads.
#[derive(Debug, Clone)]
pub struct SliderState {
    inner: Arc<RwLock<ValueSlider>>,
}

impl SliderState {
    /// Wraps a slider in a shared handle.
    pub fn new(slider: ValueSlider) -> Self {
        Self {
            inner: Arc::new(RwLock::new(slider)),
        }
    }

    /// Reads the slider.
    pub fn with<R>(&self, f: impl FnOnce(&ValueSlider) -> R) -> R {
        f(&self.inner.read())
    }

    /// Mutates the slider.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut ValueSlider) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Value currently displayed.
    pub fn value(&self) -> i64 {
        self.with(|slider| slider.value())
    }

    /// Lays the slider out.
    pub fn on_layout(&self, width: f64, height: f64) {
        self.with_mut(|slider| slider.on_layout(width, height));
    }

    /// Scene for the current state.
    pub fn scene(&self) -> SliderScene {
        self.with(|slider| slider.scene())
    }
}

impl From<ValueSlider> for SliderState {
    fn from(slider: ValueSlider) -> Self {
        Self::new(slider)
    }
}

impl GestureHandler for SliderState {
    fn on_start(&mut self) {
        self.with_mut(|slider| slider.on_start());
    }

    fn on_move(&mut self, delta_x: f64, delta_y: f64) {
        self.with_mut(|slider| slider.on_move(delta_x, delta_y));
    }

    fn on_end(&mut self) {
        self.with_mut(|slider| slider.on_end());
    }
}
