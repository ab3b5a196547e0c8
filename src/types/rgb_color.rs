// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with HSL conversion and device packing.

use std::fmt;

use super::color::{Hsl, rgb_to_device_int};

/// RGB color with 8-bit channels (0-255).
///
/// This is the rounded form of an [`Hsl`] color, ready to be packed into the
/// integer carried by an `Appliance.Control.Light` request.
///
/// # Examples
///
/// ```
/// use meross_lib::types::{Hsl, RgbColor};
///
/// let red = RgbColor::from_hsl(Hsl::new(0.0, 100.0, 50.0));
/// assert_eq!(red, RgbColor::new(255, 0, 0));
/// assert_eq!(red.to_device_int(), 16_581_375);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Converts an HSL color, rounding each channel to the nearest integer.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl.to_rgb();
        Self::new(round_channel(r), round_channel(g), round_channel(b))
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Packs the color into the bulb's integer encoding.
    ///
    /// See [`rgb_to_device_int`] for the exact layout.
    #[must_use]
    pub fn to_device_int(&self) -> u32 {
        rgb_to_device_int(self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

// HSL output can drift a hair outside 0..=255 through float error.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
