//! A draggable integer slider.
//!
//! The crate tracks a horizontal drag, maps the handle offset onto an integer
//! range with round-to-nearest snapping, and describes the result as a
//! [`SliderScene`] for an outside renderer. It owns no window, no GPU state
//! and no event loop.
//!
//! # Pieces
//!
//! - [`ValueSliderArgs`]: construction arguments, validated into a
//!   [`SliderRange`].
//! - [`SliderGeometry`]: step width and boundary offsets for a laid-out track.
//! - [`DragState`]: the `Idle -> Dragging -> Idle` drag state machine.
//! - [`mapper`]: pure offset-to-value mapping.
//! - [`ValueSlider`]: the component, implementing [`GestureHandler`].
//! - [`GestureDispatcher`]: turns raw pointer events into gesture calls.
//! - [`SliderRenderer`]: implemented by whatever draws the scene.
//!
//! # Example
//!
//! ```
//! use value_slider::{GestureHandler, ValueSlider, ValueSliderArgs};
//!
//! let mut slider = ValueSlider::new(
//!     ValueSliderArgs::default().min(0).max(10).initial_value(5),
//! )
//! .unwrap();
//! slider.on_layout(120.0, 20.0);
//!
//! slider.on_start();
//! slider.on_move(-30.0, 0.0);
//! slider.on_end();
//! assert_eq!(slider.value(), 2);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod args;
mod callback;
pub mod color;
mod cursor;
mod error;
mod geometry;
mod gesture;
pub mod mapper;
pub mod px;
pub mod render;
mod slider;

pub use crate::{
    args::{SliderRange, ValueSliderArgs},
    callback::CallbackWith,
    color::Color,
    cursor::{GestureDispatcher, PointerEvent, PointerEventContent, PointerPosition},
    error::SliderError,
    geometry::SliderGeometry,
    gesture::{DragPhase, DragState, GestureHandler},
    px::{Px, PxPosition, PxRect},
    render::{SliderRenderer, SliderScene},
    slider::{SliderState, ValueSlider},
};
