//! Pointer event dispatch for drag gestures.
//!
//! Platforms report absolute pointer positions; a [`GestureHandler`] wants
//! deltas relative to where the drag began. [`GestureDispatcher`] sits in
//! between: the first pointer to go down captures the handler until it is
//! released or cancelled, and every other pointer is ignored meanwhile.
//!
//! # Usage
//!
//! ```
//! use value_slider::{
//!     GestureDispatcher, PointerPosition, SliderState, ValueSlider, ValueSliderArgs,
//! };
//!
//! let state = SliderState::new(ValueSlider::new(ValueSliderArgs::default()).unwrap());
//! state.on_layout(260.0, 60.0);
//!
//! let mut dispatcher = GestureDispatcher::new(state.clone());
//! dispatcher.handle_touch_start(0, PointerPosition::new(100.0, 30.0));
//! dispatcher.handle_touch_move(0, PointerPosition::new(150.0, 20.0));
//! dispatcher.handle_touch_end(0);
//!
//! assert_eq!(state.value(), 37);
//! ```

use std::time::Instant;

use tracing::{debug, trace};

use crate::GestureHandler;

/// A pointer position in physical pixels, with sub-pixel precision.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl PointerPosition {
    /// Creates a new position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What happened to a pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEventContent {
    /// The pointer went down.
    Pressed(PointerPosition),
    /// The pointer moved.
    Moved(PointerPosition),
    /// The pointer was lifted.
    Released,
    /// The platform took the gesture away.
    Cancelled,
}

/// A pointer event tagged with the pointer that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Touch id, or `0` for a mouse.
    pub pointer_id: u64,
    /// When the event occurred.
    pub timestamp: Instant,
    /// The specific type and data of this event.
    pub content: PointerEventContent,
}

impl PointerEvent {
    /// Creates an event stamped with the current time.
    pub fn now(pointer_id: u64, content: PointerEventContent) -> Self {
        Self {
            pointer_id,
            timestamp: Instant::now(),
            content,
        }
    }
}

/// The pointer that currently owns the handler.
#[derive(Debug, Clone, Copy)]
struct Capture {
    pointer_id: u64,
    origin: PointerPosition,
    started_at: Instant,
}

/// Routes pointer events to a single [`GestureHandler`].
#[derive(Debug)]
pub struct GestureDispatcher<H> {
    handler: H,
    capture: Option<Capture>,
}

impl<H: GestureHandler> GestureDispatcher<H> {
    /// Registers `handler` as the only gesture consumer.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            capture: None,
        }
    }

    /// The registered handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Whether a pointer currently owns the handler.
    pub fn is_captured(&self) -> bool {
        self.capture.is_some()
    }

    /// Routes one event. Returns `true` if the handler consumed it.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        match event.content {
            PointerEventContent::Pressed(position) => {
                self.press(event.pointer_id, position, event.timestamp)
            }
            PointerEventContent::Moved(position) => self.motion(event.pointer_id, position),
            PointerEventContent::Released | PointerEventContent::Cancelled => {
                self.release(event.pointer_id, event.timestamp)
            }
        }
    }

    /// Handles a touch or mouse press.
    pub fn handle_touch_start(&mut self, pointer_id: u64, position: PointerPosition) -> bool {
        self.dispatch(PointerEvent::now(
            pointer_id,
            PointerEventContent::Pressed(position),
        ))
    }

    /// Handles pointer movement.
    pub fn handle_touch_move(&mut self, pointer_id: u64, position: PointerPosition) -> bool {
        self.dispatch(PointerEvent::now(
            pointer_id,
            PointerEventContent::Moved(position),
        ))
    }

    /// Handles a touch or mouse release.
    pub fn handle_touch_end(&mut self, pointer_id: u64) -> bool {
        self.dispatch(PointerEvent::now(pointer_id, PointerEventContent::Released))
    }

    /// Consumes the dispatcher and returns the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    fn press(&mut self, pointer_id: u64, origin: PointerPosition, timestamp: Instant) -> bool {
        if let Some(capture) = self.capture {
            trace!(
                pointer_id,
                owner = capture.pointer_id,
                "ignoring press while captured"
            );
            return false;
        }
        debug!(pointer_id, x = origin.x, y = origin.y, "gesture captured");
        self.capture = Some(Capture {
            pointer_id,
            origin,
            started_at: timestamp,
        });
        self.handler.on_start();
        true
    }

    fn motion(&mut self, pointer_id: u64, position: PointerPosition) -> bool {
        match self.capture {
            Some(capture) if capture.pointer_id == pointer_id => {
                self.handler.on_move(
                    position.x - capture.origin.x,
                    position.y - capture.origin.y,
                );
                true
            }
            _ => false,
        }
    }

    fn release(&mut self, pointer_id: u64, timestamp: Instant) -> bool {
        match self.capture {
            Some(capture) if capture.pointer_id == pointer_id => {
                self.capture = None;
                debug!(
                    pointer_id,
                    held_ms = timestamp.saturating_duration_since(capture.started_at).as_millis() as u64,
                    "gesture released"
                );
                self.handler.on_end();
                true
            }
            _ => false,
        }
    }
}
