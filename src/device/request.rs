// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Set-request policy.
//!
//! Turning a characteristic change into a device request is a pure function
//! of the change, the device identity and the cached [`AttributeState`]. The
//! [`SetPlan`] it produces holds both the message to send and the state
//! change to apply once the device acknowledges it.

use crate::capabilities::{Capabilities, Characteristic};
use crate::config::DeviceIdentity;
use crate::error::{Error, ValueError};
use crate::protocol::{Light, Message};
use crate::state::{AttributeState, ColorMode, StateChange};
use crate::types::{RgbColor, home_temperature_to_device};

use super::CharacteristicValue;

/// A requested characteristic change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetRequest {
    /// Switch on or off.
    Power(bool),
    /// Set luminance (0-100).
    Brightness(u8),
    /// Set white point on the host scale (140-500).
    ColorTemperature(u16),
    /// Set hue in degrees, keeping the cached saturation.
    Hue(f64),
    /// Set saturation, keeping the cached hue.
    Saturation(f64),
}

impl SetRequest {
    /// Converts a host value for `characteristic` into a request.
    ///
    /// Power accepts a boolean or an integer (non-zero is on). Brightness and
    /// color temperature accept integers that fit their wire type. Hue and
    /// saturation accept any number. No range clamping is applied beyond
    /// what the wire types require.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValueTypeMismatch` for the wrong kind of value and
    /// `Error::Value` for an integer that does not fit.
    pub fn from_value(
        characteristic: Characteristic,
        value: CharacteristicValue,
    ) -> Result<Self, Error> {
        let mismatch = |expected| Error::ValueTypeMismatch {
            characteristic,
            expected,
        };

        match characteristic {
            Characteristic::On => match value {
                CharacteristicValue::Bool(on) => Ok(Self::Power(on)),
                CharacteristicValue::Int(v) => Ok(Self::Power(v != 0)),
                CharacteristicValue::Float(_) => Err(mismatch("boolean")),
            },
            Characteristic::Brightness => {
                let v = value.as_int().ok_or_else(|| mismatch("integer"))?;
                let level = u8::try_from(v).map_err(|_| out_of_range(u8::MAX.into(), v))?;
                Ok(Self::Brightness(level))
            }
            Characteristic::ColorTemperature => {
                let v = value.as_int().ok_or_else(|| mismatch("integer"))?;
                let level = u16::try_from(v).map_err(|_| out_of_range(u16::MAX.into(), v))?;
                Ok(Self::ColorTemperature(level))
            }
            Characteristic::Hue => value
                .as_float()
                .map(Self::Hue)
                .ok_or_else(|| mismatch("number")),
            Characteristic::Saturation => value
                .as_float()
                .map(Self::Saturation)
                .ok_or_else(|| mismatch("number")),
        }
    }

    /// Returns the characteristic this request changes.
    #[must_use]
    pub const fn characteristic(&self) -> Characteristic {
        match self {
            Self::Power(_) => Characteristic::On,
            Self::Brightness(_) => Characteristic::Brightness,
            Self::ColorTemperature(_) => Characteristic::ColorTemperature,
            Self::Hue(_) => Characteristic::Hue,
            Self::Saturation(_) => Characteristic::Saturation,
        }
    }
}

fn out_of_range(max: i64, actual: i64) -> Error {
    ValueError::OutOfRange {
        min: 0,
        max,
        actual,
    }
    .into()
}

/// A request ready to send, with the state change it commits on success.
#[derive(Debug, Clone, PartialEq)]
pub struct SetPlan {
    /// Message to send.
    pub message: Message,
    /// Change to apply once the device acknowledges the message.
    pub on_success: StateChange,
}

/// Builds the request for `request` against the cached `state`.
///
/// - Power goes out through the model's toggle variant.
/// - Brightness sends a luminance-only light request.
/// - Color temperature is mapped to the device scale and sent with the
///   cached brightness; it selects [`ColorMode::Temperature`].
/// - Hue or saturation is merged into the cached color, converted to the
///   packed RGB integer with the cached brightness as lightness, and sent
///   with that brightness; it selects [`ColorMode::Color`].
///
/// Every light request also switches the bulb on once acknowledged.
#[must_use]
pub fn plan(
    identity: &DeviceIdentity,
    capabilities: &Capabilities,
    state: &AttributeState,
    request: SetRequest,
) -> SetPlan {
    let channel = identity.channel;
    let brightness = state.brightness();

    match request {
        SetRequest::Power(on) => SetPlan {
            message: Message::toggle(identity, capabilities.toggle(), on),
            on_success: StateChange::Power(on),
        },
        SetRequest::Brightness(level) => SetPlan {
            message: Message::light(identity, Light::luminance(channel, level)),
            on_success: StateChange::light_acknowledged(StateChange::Brightness(level), None),
        },
        SetRequest::ColorTemperature(level) => {
            let device = home_temperature_to_device(i32::from(level));
            SetPlan {
                message: Message::light(identity, Light::temperature(channel, brightness, device)),
                on_success: StateChange::light_acknowledged(
                    StateChange::ColorTemperature(level),
                    Some(ColorMode::Temperature),
                ),
            }
        }
        SetRequest::Hue(hue) => color_plan(identity, state, StateChange::Hue(hue)),
        SetRequest::Saturation(saturation) => {
            color_plan(identity, state, StateChange::Saturation(saturation))
        }
    }
}

fn color_plan(identity: &DeviceIdentity, state: &AttributeState, change: StateChange) -> SetPlan {
    let rgb = RgbColor::from_hsl(state.with(&change).hsl()).to_device_int();
    SetPlan {
        message: Message::light(
            identity,
            Light::rgb(identity.channel, state.brightness(), rgb),
        ),
        on_success: StateChange::light_acknowledged(change, Some(ColorMode::Color)),
    }
}
