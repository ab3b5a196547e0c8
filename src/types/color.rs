// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color and temperature conversions between the host model and the bulb.
//!
//! The host describes color as hue/saturation with the bulb brightness acting
//! as HSL lightness, and color temperature on a linear mired-like scale
//! (140-500). Meross bulbs expect a packed RGB integer and an inverted 0-100
//! temperature percentage.
//!
//! All functions here are pure. None of them clamp: callers supply values in
//! the host's valid ranges.

/// Lower bound of the host color temperature scale.
pub const HOME_TEMPERATURE_MIN: i32 = 140;

/// Upper bound of the host color temperature scale.
pub const HOME_TEMPERATURE_MAX: i32 = 500;

/// A color in HSL space as the host supplies it.
///
/// Hue is in degrees (0-360), saturation and lightness are percentages
/// (0-100).
///
/// # Examples
///
/// ```
/// use meross_lib::types::Hsl;
///
/// let (r, g, b) = Hsl::new(120.0, 100.0, 50.0).to_rgb();
/// assert!((g - 255.0).abs() < 1e-9);
/// assert!(r.abs() < 1e-9 && b.abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation percentage.
    pub saturation: f64,
    /// Lightness percentage.
    pub lightness: f64,
}

impl Hsl {
    /// Creates a new HSL color.
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Converts to unrounded RGB channels in `0.0..=255.0`.
    #[must_use]
    pub fn to_rgb(self) -> (f64, f64, f64) {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

/// Converts an HSL color to real-valued RGB channels (0-255).
///
/// Rounding is left to the caller. Each 60 degree sextant is half-open, so a
/// hue sitting exactly on a boundary belongs to the sextant above it.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    ((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
}

/// Packs 8-bit RGB channels into the integer the bulb firmware expects.
///
/// The bulb uses base-255 positional packing, `(r * 255 + g) * 255 + b`,
/// not the usual `r << 16 | g << 8 | b`. Colors only come out right on the
/// device with this exact encoding.
///
/// # Examples
///
/// ```
/// use meross_lib::types::rgb_to_device_int;
///
/// assert_eq!(rgb_to_device_int(255, 0, 0), 16_581_375);
/// assert_eq!(rgb_to_device_int(0, 0, 255), 255);
/// ```
#[must_use]
pub fn rgb_to_device_int(red: u8, green: u8, blue: u8) -> u32 {
    (u32::from(red) * 255 + u32::from(green)) * 255 + u32::from(blue)
}

/// Maps a host color temperature (140-500) to the bulb's 0-100 scale.
///
/// The bulb scale is inverted: 100 is the coolest setting.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn home_temperature_to_device(level: i32) -> i32 {
    let span = f64::from(HOME_TEMPERATURE_MAX - HOME_TEMPERATURE_MIN);
    let scaled = f64::from(level - HOME_TEMPERATURE_MIN) / span * 99.0;
    100 - scaled.floor() as i32
}

/// Maps a bulb temperature percentage (0-100) back to the host scale.
///
/// This is only an approximate inverse of [`home_temperature_to_device`]:
/// both directions floor, and the forward map scales by 99 instead of 100,
/// so a round trip lands up to 7 units below where it started.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn device_temperature_to_home(level: i32) -> i32 {
    let span = f64::from(HOME_TEMPERATURE_MAX - HOME_TEMPERATURE_MIN);
    let scaled = f64::from(100 - level) / 100.0 * span;
    scaled.floor() as i32 + HOME_TEMPERATURE_MIN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb_close(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-6;
        assert!(
            close(actual.0, expected.0) && close(actual.1, expected.1) && close(actual.2, expected.2),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn primary_colors() {
        assert_rgb_close(hsl_to_rgb(0.0, 100.0, 50.0), (255.0, 0.0, 0.0));
        assert_rgb_close(hsl_to_rgb(120.0, 100.0, 50.0), (0.0, 255.0, 0.0));
        assert_rgb_close(hsl_to_rgb(240.0, 100.0, 50.0), (0.0, 0.0, 255.0));
    }

    #[test]
    fn secondary_colors_on_sextant_boundaries() {
        assert_rgb_close(hsl_to_rgb(60.0, 100.0, 50.0), (255.0, 255.0, 0.0));
        assert_rgb_close(hsl_to_rgb(180.0, 100.0, 50.0), (0.0, 255.0, 255.0));
        assert_rgb_close(hsl_to_rgb(300.0, 100.0, 50.0), (255.0, 0.0, 255.0));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_rgb_close(hsl_to_rgb(200.0, 0.0, 50.0), (127.5, 127.5, 127.5));
    }

    #[test]
    fn lightness_extremes() {
        assert_rgb_close(hsl_to_rgb(45.0, 100.0, 0.0), (0.0, 0.0, 0.0));
        assert_rgb_close(hsl_to_rgb(45.0, 100.0, 100.0), (255.0, 255.0, 255.0));
    }

    #[test]
    fn full_hue_circle_stays_in_range() {
        for hue in 0..360 {
            for lightness in [0.0, 25.0, 50.0, 75.0, 100.0] {
                let (r, g, b) = hsl_to_rgb(f64::from(hue), 100.0, lightness);
                for channel in [r, g, b] {
                    assert!(
                        (-1e-9..=255.0 + 1e-9).contains(&channel),
                        "hue {hue} lightness {lightness} produced {channel}"
                    );
                }
            }
        }
    }

    #[test]
    fn hue_360_wraps_to_red() {
        assert_rgb_close(hsl_to_rgb(360.0, 100.0, 50.0), (255.0, 0.0, 0.0));
    }

    #[test]
    fn device_int_packing() {
        assert_eq!(rgb_to_device_int(255, 0, 0), 255 * 255 * 255);
        assert_eq!(rgb_to_device_int(0, 0, 0), 0);
        assert_eq!(rgb_to_device_int(0, 0, 255), 255);
        assert_eq!(rgb_to_device_int(0, 255, 0), 255 * 255);
        assert_eq!(rgb_to_device_int(1, 2, 3), (255 + 2) * 255 + 3);
    }

    #[test]
    fn home_to_device_endpoints() {
        assert_eq!(home_temperature_to_device(140), 100);
        assert_eq!(home_temperature_to_device(500), 1);
        assert_eq!(home_temperature_to_device(320), 51);
    }

    #[test]
    fn device_to_home_endpoints() {
        assert_eq!(device_temperature_to_home(100), 140);
        assert_eq!(device_temperature_to_home(0), 500);
        assert_eq!(device_temperature_to_home(1), 496);
        assert_eq!(device_temperature_to_home(51), 316);
    }

    #[test]
    fn temperature_round_trip_is_lossy_but_bounded() {
        for home in HOME_TEMPERATURE_MIN..=HOME_TEMPERATURE_MAX {
            let back = device_temperature_to_home(home_temperature_to_device(home));
            assert!(back <= home, "{home} came back as {back}");
            assert!(home - back <= 7, "{home} came back as {back}");
        }
    }

    #[test]
    fn device_scale_stays_within_percent() {
        for home in HOME_TEMPERATURE_MIN..=HOME_TEMPERATURE_MAX {
            let device = home_temperature_to_device(home);
            assert!((1..=100).contains(&device), "{home} mapped to {device}");
        }
    }
}
