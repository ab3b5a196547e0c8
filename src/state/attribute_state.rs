// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached attribute state of one accessory.

use std::fmt;

use crate::types::Hsl;

use super::StateChange;

/// Which color source drove the most recent color request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// White point set through color temperature.
    #[default]
    Temperature,
    /// Color set through hue and saturation.
    Color,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Temperature => "temperature",
            Self::Color => "color",
        })
    }
}

/// Coolest white on the host scale.
const INITIAL_COLOR_TEMPERATURE: u16 = 140;

/// Last known or applied value of every characteristic.
///
/// The device does not report every attribute on its own (a temperature
/// change still needs the current brightness, a hue change needs the
/// current saturation), so the controller keeps this cache for the lifetime
/// of the accessory. Nothing is persisted.
///
/// # Examples
///
/// ```
/// use meross_lib::state::{AttributeState, ColorMode, StateChange};
///
/// let mut state = AttributeState::new();
/// assert!(!state.power());
/// assert_eq!(state.color_mode(), ColorMode::Temperature);
///
/// assert!(state.apply(&StateChange::Brightness(60)));
/// assert!(!state.apply(&StateChange::Brightness(60)));
/// assert_eq!(state.brightness(), 60);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeState {
    power: bool,
    brightness: u8,
    color_temperature: u16,
    hue: f64,
    saturation: f64,
    color_mode: ColorMode,
}

impl Default for AttributeState {
    fn default() -> Self {
        Self {
            power: false,
            brightness: 0,
            color_temperature: INITIAL_COLOR_TEMPERATURE,
            hue: 0.0,
            saturation: 0.0,
            color_mode: ColorMode::default(),
        }
    }
}

impl AttributeState {
    /// Creates the initial state: off, dark, coolest white, temperature mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the power state.
    #[must_use]
    pub fn power(&self) -> bool {
        self.power
    }

    /// Returns the brightness (0-100).
    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Returns the color temperature on the host scale.
    #[must_use]
    pub fn color_temperature(&self) -> u16 {
        self.color_temperature
    }

    /// Returns the hue in degrees.
    #[must_use]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Returns the saturation percentage.
    #[must_use]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Returns the color mode.
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Returns the cached color as HSL, with brightness as lightness.
    #[must_use]
    pub fn hsl(&self) -> Hsl {
        Hsl::new(self.hue, self.saturation, f64::from(self.brightness))
    }

    /// Applies a state change and returns whether the state actually changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Power(on) => replace(&mut self.power, *on),
            StateChange::Brightness(value) => replace(&mut self.brightness, *value),
            StateChange::ColorTemperature(value) => {
                replace(&mut self.color_temperature, *value)
            }
            StateChange::Hue(value) => replace(&mut self.hue, *value),
            StateChange::Saturation(value) => replace(&mut self.saturation, *value),
            StateChange::ColorMode(mode) => replace(&mut self.color_mode, *mode),
            StateChange::Batch(changes) => changes
                .iter()
                .fold(false, |changed, c| self.apply(c) || changed),
        }
    }

    /// Returns a copy with `change` applied.
    #[must_use]
    pub fn with(&self, change: &StateChange) -> Self {
        let mut next = self.clone();
        next.apply(change);
        next
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = AttributeState::new();
        assert!(!state.power());
        assert_eq!(state.brightness(), 0);
        assert_eq!(state.color_temperature(), 140);
        assert!(state.hue().abs() < f64::EPSILON);
        assert!(state.saturation().abs() < f64::EPSILON);
        assert_eq!(state.color_mode(), ColorMode::Temperature);
    }

    #[test]
    fn apply_reports_change() {
        let mut state = AttributeState::new();
        assert!(state.apply(&StateChange::Power(true)));
        assert!(!state.apply(&StateChange::Power(true)));
        assert!(state.apply(&StateChange::Power(false)));
    }

    #[test]
    fn batch_applies_everything() {
        let mut state = AttributeState::new();
        let changed = state.apply(&StateChange::Batch(vec![
            StateChange::Power(true),
            StateChange::Hue(120.0),
            StateChange::Saturation(80.0),
            StateChange::ColorMode(ColorMode::Color),
        ]));
        assert!(changed);
        assert!(state.power());
        assert!((state.hue() - 120.0).abs() < f64::EPSILON);
        assert!((state.saturation() - 80.0).abs() < f64::EPSILON);
        assert_eq!(state.color_mode(), ColorMode::Color);
    }

    #[test]
    fn batch_unchanged_when_all_equal() {
        let mut state = AttributeState::new();
        assert!(!state.apply(&StateChange::Batch(vec![
            StateChange::Power(false),
            StateChange::Brightness(0),
        ])));
    }

    #[test]
    fn with_leaves_original_untouched() {
        let state = AttributeState::new();
        let next = state.with(&StateChange::Saturation(50.0));
        assert!((next.saturation() - 50.0).abs() < f64::EPSILON);
        assert!(state.saturation().abs() < f64::EPSILON);
    }

    #[test]
    fn hsl_uses_brightness_as_lightness() {
        let state = AttributeState::new().with(&StateChange::Batch(vec![
            StateChange::Hue(240.0),
            StateChange::Saturation(100.0),
            StateChange::Brightness(50),
        ]));
        assert_eq!(state.hsl(), Hsl::new(240.0, 100.0, 50.0));
    }
}
