//! Physical pixel types for the slider scene.
//!
//! Drag offsets are tracked as `f64` so that sub-pixel finger movement
//! accumulates correctly; the scene handed to a renderer is snapped to whole
//! physical pixels with these types.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the slider container
//! - X-axis increases to the right
//! - Y-axis increases downward

use std::ops::{Add, Sub};

/// A physical pixel coordinate value.
///
/// Negative values are allowed for content translated off the left edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Converts the pixel value to f64.
    pub fn to_f64(self) -> f64 {
        self.0 as f64
    }

    /// Creates a `Px` from an f64 value, rounding to the nearest pixel and
    /// saturating at the i32 bounds. `NaN` maps to zero.
    pub fn saturating_from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Px::ZERO;
        }
        let clamped_value = value.round().clamp(i32::MIN as f64, i32::MAX as f64);
        Px(clamped_value as i32)
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0.saturating_sub(rhs.0))
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels
    pub x: Px,
    /// The y-coordinate in physical pixels
    pub y: Px,
}

impl PxPosition {
    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// A 2D rectangle in physical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// A constant representing a zero rectangle.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle from position and size.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The x-coordinate of the right edge.
    pub fn right(&self) -> Px {
        self.x + self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_from_f64() {
        assert_eq!(Px::saturating_from_f64(f64::MAX), Px(i32::MAX));
        assert_eq!(Px::saturating_from_f64(f64::MIN), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f64(100.4), Px(100));
        assert_eq!(Px::saturating_from_f64(-100.6), Px(-101));
        assert_eq!(Px::saturating_from_f64(f64::NAN), Px::ZERO);
    }

    #[test]
    fn test_px_arithmetic_saturates() {
        assert_eq!(Px(10) + Px(5), Px(15));
        assert_eq!(Px(10) - Px(15), Px(-5));
        assert_eq!(Px(i32::MAX) + Px(1), Px(i32::MAX));
    }

    #[test]
    fn test_rect_right_edge() {
        let rect = PxRect::new(Px(20), Px(0), Px(30), Px(4));
        assert_eq!(rect.right(), Px(50));
    }
}
