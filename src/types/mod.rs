// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types and conversions for Meross light control.
//!
//! # Types
//!
//! - [`Hsl`] - Host-side color (hue 0-360, saturation and lightness 0-100)
//! - [`RgbColor`] - Rounded 8-bit RGB color with device packing
//! - [`OnOff`] - Wire encoding of the power flag
//!
//! The free functions ([`hsl_to_rgb`], [`rgb_to_device_int`],
//! [`home_temperature_to_device`], [`device_temperature_to_home`]) are the raw
//! conversions the types build on.

mod color;
mod power;
mod rgb_color;

pub use color::{
    HOME_TEMPERATURE_MAX, HOME_TEMPERATURE_MIN, Hsl, device_temperature_to_home,
    home_temperature_to_device, hsl_to_rgb, rgb_to_device_int,
};
pub use power::OnOff;
pub use rgb_color::RgbColor;
