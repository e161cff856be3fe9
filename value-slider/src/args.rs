//! Construction arguments for [`ValueSlider`](crate::ValueSlider).

use derive_setters::Setters;

use crate::{CallbackWith, Color, SliderError};

/// Arguments for the value slider.
///
/// All fields are fixed for the lifetime of the slider; build a new slider
/// to change them.
///
/// ```
/// use value_slider::{Color, ValueSliderArgs};
///
/// let args = ValueSliderArgs::default()
///     .label("Volume")
///     .icon("volume-high")
///     .min(0)
///     .max(10)
///     .initial_value(3)
///     .highlight_color(Color::from_rgb_u8(0xe6, 0x4a, 0x19));
/// assert!(args.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ValueSliderArgs {
    /// Lowest selectable value.
    pub min: i64,
    /// Highest selectable value. Must be greater than `min`.
    pub max: i64,
    /// Value shown before the first drag.
    pub initial_value: i64,
    /// Icon token drawn inside the handle. The renderer resolves it.
    #[setters(into)]
    pub icon: String,
    /// Caption drawn under the icon.
    #[setters(into)]
    pub label: String,
    /// Color of the filled track segment and the icon.
    pub highlight_color: Color,
    /// Color of the unfilled track.
    pub track_color: Color,
    /// Fill color of the handle.
    pub handle_color: Color,
    /// Called whenever the displayed value changes.
    ///
    /// Runs while the slider is mutably borrowed, so it must not reach back
    /// into the same [`SliderState`](crate::SliderState).
    #[setters(skip)]
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_change: Option<CallbackWith<i64>>,
}

impl ValueSliderArgs {
    /// Sets the change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(i64) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(on_change));
        self
    }

    /// Sets the change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<i64>>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }

    /// Checks the range invariants and returns the validated range.
    pub fn validate(&self) -> Result<SliderRange, SliderError> {
        SliderRange::new(self.min, self.max, self.initial_value)
    }
}

impl Default for ValueSliderArgs {
    fn default() -> Self {
        Self {
            min: 0,
            max: 99,
            initial_value: 12,
            icon: "ticket-percent-outline".to_string(),
            label: "Price".to_string(),
            highlight_color: Color::from_rgb_u8(0x00, 0x8e, 0xe6),
            track_color: Color::from_rgb_u8(0xf1, 0xf1, 0xf1),
            handle_color: Color::WHITE,
            on_change: None,
        }
    }
}

/// A validated `[min, max]` range with its starting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    min: i64,
    max: i64,
    initial: i64,
}

impl SliderRange {
    /// Validates `min < max` and `min <= initial <= max`.
    pub fn new(min: i64, max: i64, initial: i64) -> Result<Self, SliderError> {
        if min >= max {
            return Err(SliderError::InvalidRange { min, max });
        }
        if !(min..=max).contains(&initial) {
            return Err(SliderError::InitialValueOutOfRange {
                value: initial,
                min,
                max,
            });
        }
        Ok(Self { min, max, initial })
    }

    /// Lowest selectable value.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Highest selectable value.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Starting value.
    pub fn initial(&self) -> i64 {
        self.initial
    }

    /// Number of steps between `min` and `max`.
    ///
    /// Computed in f64 so that ranges wider than `i64::MAX` stay representable.
    pub fn span(&self) -> f64 {
        self.max as f64 - self.min as f64
    }

    /// Steps from `min` to the starting value.
    pub fn initial_steps(&self) -> f64 {
        self.initial as f64 - self.min as f64
    }

    /// Clamps `value` into the range.
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_are_valid() {
        let range = ValueSliderArgs::default().validate().unwrap();
        assert_eq!((range.min(), range.max(), range.initial()), (0, 99, 12));
        assert_eq!(range.span(), 99.0);
        assert_eq!(range.initial_steps(), 12.0);
    }

    #[test]
    fn full_i64_range_has_finite_span() {
        let range = SliderRange::new(i64::MIN, i64::MAX, 0).unwrap();
        assert_eq!(range.span(), 2f64.powi(64));
        assert_eq!(range.initial_steps(), 2f64.powi(63));
    }

    #[test]
    fn empty_or_inverted_range_is_rejected() {
        for (min, max) in [(5, 5), (10, 0)] {
            let args = ValueSliderArgs::default().min(min).max(max).initial_value(min);
            assert_eq!(args.validate(), Err(SliderError::InvalidRange { min, max }));
        }
    }

    #[test]
    fn initial_value_outside_range_is_rejected() {
        let args = ValueSliderArgs::default().min(-5).max(5).initial_value(6);
        assert_eq!(
            args.validate(),
            Err(SliderError::InitialValueOutOfRange {
                value: 6,
                min: -5,
                max: 5
            })
        );
    }

    #[test]
    fn setters_accept_str() {
        let args = ValueSliderArgs::default().label("Speed").icon("speedometer");
        assert_eq!(args.label, "Speed");
        assert_eq!(args.icon, "speedometer");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_json_over_defaults() {
        let args: ValueSliderArgs =
            serde_json::from_str(r##"{"max": 20, "initialValue": 4, "highlightColor": "#ff0000"}"##)
                .unwrap();
        assert_eq!(args.min, 0);
        assert_eq!(args.max, 20);
        assert_eq!(args.initial_value, 4);
        assert_eq!(args.highlight_color, Color::from_rgb_u8(0xff, 0, 0));
        assert_eq!(args.label, "Price");
    }
}
