// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Appliance.System.All` response parsing.

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::OnOff;

/// Response to a `GET Appliance.System.All` request.
///
/// Only the `payload.all.digest` block is read. Every level is optional at
/// the serde layer so that a partial digest still parses; the accessors
/// report what is missing.
///
/// # Examples
///
/// ```
/// use meross_lib::response::SystemAllResponse;
///
/// let json = r#"{"payload": {"all": {"digest": {
///     "togglex": [{"channel": 0, "onoff": 1}],
///     "light": {"luminance": 80, "temperature": 51}
/// }}}}"#;
/// let response: SystemAllResponse = serde_json::from_str(json).unwrap();
/// assert!(response.power(0).unwrap());
/// assert_eq!(response.luminance().unwrap(), 80);
/// assert_eq!(response.temperature().unwrap(), 51);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemAllResponse {
    #[serde(default)]
    payload: Option<AllPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AllPayload {
    #[serde(default)]
    all: Option<All>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct All {
    #[serde(default)]
    digest: Option<Digest>,
}

/// The device state summary inside a status response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Digest {
    /// Power state per channel.
    #[serde(default)]
    pub togglex: Vec<ChannelPower>,
    /// Light state, present on bulbs.
    #[serde(default)]
    pub light: Option<LightDigest>,
}

/// One `togglex` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ChannelPower {
    /// Channel index.
    #[serde(default)]
    pub channel: u8,
    /// Power state.
    pub onoff: OnOff,
}

/// The `light` entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LightDigest {
    /// Luminance, 0-100.
    #[serde(default)]
    pub luminance: Option<u8>,
    /// Device temperature percentage, 0-100.
    #[serde(default)]
    pub temperature: Option<u8>,
    /// Packed color.
    #[serde(default)]
    pub rgb: Option<u32>,
}

impl SystemAllResponse {
    /// Parses a response from an already decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body does not have the expected
    /// shape (for instance a string where a number belongs).
    pub fn from_value(value: serde_json::Value) -> Result<Self, ParseError> {
        serde_json::from_value(value).map_err(ParseError::Json)
    }

    /// Returns the digest block.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if any level of
    /// `payload.all.digest` is absent.
    pub fn digest(&self) -> Result<&Digest, ParseError> {
        self.payload
            .as_ref()
            .and_then(|p| p.all.as_ref())
            .and_then(|a| a.digest.as_ref())
            .ok_or_else(|| ParseError::MissingField("payload.all.digest".to_string()))
    }

    /// Returns the power state of `channel`.
    ///
    /// Falls back to the first `togglex` entry when no entry names the
    /// channel.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the digest has no `togglex`
    /// entries.
    pub fn power(&self, channel: u8) -> Result<bool, ParseError> {
        let togglex = &self.digest()?.togglex;
        togglex
            .iter()
            .find(|entry| entry.channel == channel)
            .or_else(|| togglex.first())
            .map(|entry| entry.onoff.is_on())
            .ok_or_else(|| ParseError::MissingField("payload.all.digest.togglex".to_string()))
    }

    /// Returns the light luminance.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the digest carries no luminance.
    pub fn luminance(&self) -> Result<u8, ParseError> {
        self.light()?
            .luminance
            .ok_or_else(|| ParseError::MissingField("payload.all.digest.light.luminance".to_string()))
    }

    /// Returns the light temperature on the device's 0-100 scale.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the digest carries no
    /// temperature.
    pub fn temperature(&self) -> Result<u8, ParseError> {
        self.light()?.temperature.ok_or_else(|| {
            ParseError::MissingField("payload.all.digest.light.temperature".to_string())
        })
    }

    fn light(&self) -> Result<&LightDigest, ParseError> {
        self.digest()?
            .light
            .as_ref()
            .ok_or_else(|| ParseError::MissingField("payload.all.digest.light".to_string()))
    }
}
