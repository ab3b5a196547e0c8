// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory configuration.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::error::ParseError;

/// Returns the control endpoint for a device address.
///
/// Bare hosts get `http://`; addresses that already carry a scheme keep it.
pub(crate) fn endpoint_url(host: &str) -> String {
    if host.starts_with("http://") || host.starts_with("https://") {
        format!("{}/config", host.trim_end_matches('/'))
    } else {
        format!("http://{host}/config")
    }
}

/// Identity of one Meross device as configured by the host.
///
/// The signing fields (`message_id`, `sign`, `timestamp`) are captured from
/// the vendor app once and replayed verbatim in every request header; this
/// library never computes them.
///
/// Field names follow the host's JSON accessory configuration. The
/// `channel`, `messageId`, `sign` and `timestamp` keys may be given either as
/// strings or as numbers:
///
/// ```
/// use meross_lib::DeviceIdentity;
///
/// let identity = DeviceIdentity::from_json(r#"{
///     "accessory": "Meross",
///     "name": "Desk Lamp",
///     "model": "MSL120",
///     "deviceUrl": "192.168.1.42",
///     "channel": 0,
///     "messageId": "4a8d0e3f",
///     "sign": "b5c1f0a2",
///     "timestamp": 1587061281
/// }"#).unwrap();
///
/// assert_eq!(identity.model, "MSL120");
/// assert_eq!(identity.endpoint(), "http://192.168.1.42/config");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceIdentity {
    /// Display name shown by the host.
    pub name: String,
    /// Model identifier, e.g. `MSL120`.
    pub model: String,
    /// Host or IP address of the device, optionally with a scheme.
    pub device_url: String,
    /// Channel index addressed by control requests.
    #[serde(default, deserialize_with = "integer")]
    pub channel: u8,
    /// Message id replayed in every header.
    #[serde(default, deserialize_with = "text")]
    pub message_id: String,
    /// Signature replayed in every header.
    #[serde(default, deserialize_with = "text")]
    pub sign: String,
    /// Timestamp replayed in every header.
    #[serde(default, deserialize_with = "integer")]
    pub timestamp: u64,
}

impl DeviceIdentity {
    /// Creates an identity with channel 0 and empty signing fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        device_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            device_url: device_url.into(),
            channel: 0,
            message_id: String::new(),
            sign: String::new(),
            timestamp: 0,
        }
    }

    /// Parses one accessory entry of the host configuration.
    ///
    /// Unknown keys (such as the host's own `accessory` key) are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the JSON is malformed or a required key
    /// (`name`, `model`, `deviceUrl`) is missing.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(ParseError::Json)
    }

    /// Sets the channel index.
    #[must_use]
    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    /// Sets the signing fields replayed in request headers.
    #[must_use]
    pub fn with_signature(
        mut self,
        message_id: impl Into<String>,
        sign: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        self.message_id = message_id.into();
        self.sign = sign.into();
        self.timestamp = timestamp;
        self
    }

    /// Returns the control endpoint, also used as the header `from` field.
    #[must_use]
    pub fn endpoint(&self) -> String {
        endpoint_url(&self.device_url)
    }
}

/// A configuration scalar written either as a string or as a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Scalar::deserialize(deserializer).map(Scalar::into_text)
}

fn integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let text = Scalar::deserialize(deserializer)?.into_text();
    text.trim()
        .parse()
        .map_err(|e| D::Error::custom(format!("invalid integer {text:?}: {e}")))
}
