//! Errors raised while configuring a slider.

use thiserror::Error;

/// Errors produced when slider arguments are invalid.
///
/// Everything past construction is infallible: drags beyond the track are
/// clamped and an unlaid-out track simply keeps the last value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    /// The range is empty or inverted.
    #[error("invalid slider range: min ({min}) must be lower than max ({max})")]
    InvalidRange {
        /// Configured lower bound.
        min: i64,
        /// Configured upper bound.
        max: i64,
    },
    /// The initial value lies outside `[min, max]`.
    #[error("initial value {value} is outside the slider range [{min}, {max}]")]
    InitialValueOutOfRange {
        /// Configured initial value.
        value: i64,
        /// Configured lower bound.
        min: i64,
        /// Configured upper bound.
        max: i64,
    },
    /// A colour string could not be parsed.
    #[error("invalid color `{0}`: expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
}
