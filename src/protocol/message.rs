// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire messages for the Meross local HTTP protocol.
//!
//! Every request is a JSON object with a `header` describing the operation
//! and a namespace-specific `payload`:
//!
//! ```json
//! {
//!   "header": {
//!     "messageId": "...", "method": "SET", "from": "http://<device>/config",
//!     "namespace": "Appliance.Control.Light", "timestamp": 0, "sign": "...",
//!     "payloadVersion": 1
//!   },
//!   "payload": { "light": { "channel": 0, "luminance": 80, "capacity": 4 } }
//! }
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::capabilities::ToggleVariant;
use crate::config::DeviceIdentity;
use crate::types::OnOff;

/// Protocol version sent in every header.
pub const PAYLOAD_VERSION: u8 = 1;

/// Request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Read state.
    Get,
    /// Change state.
    Set,
}

/// Request namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Namespace {
    /// Full status digest.
    #[serde(rename = "Appliance.System.All")]
    SystemAll,
    /// Legacy single-channel power control.
    #[serde(rename = "Appliance.Control.Toggle")]
    Toggle,
    /// Channel-addressed power control.
    #[serde(rename = "Appliance.Control.ToggleX")]
    ToggleX,
    /// Luminance, temperature and color control.
    #[serde(rename = "Appliance.Control.Light")]
    Light,
}

impl Namespace {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SystemAll => "Appliance.System.All",
            Self::Toggle => "Appliance.Control.Toggle",
            Self::ToggleX => "Appliance.Control.ToggleX",
            Self::Light => "Appliance.Control.Light",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Light-control sub-mode selected by a `Light` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capacity {
    /// `rgb` carries the color.
    Rgb,
    /// `temperature` carries the white point.
    Temperature,
    /// Only `luminance` changes.
    Luminance,
}

impl Capacity {
    /// Returns the numeric wire value.
    #[must_use]
    pub const fn as_num(self) -> u8 {
        match self {
            Self::Rgb => 1,
            Self::Temperature => 2,
            Self::Luminance => 4,
        }
    }
}

impl Serialize for Capacity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_num())
    }
}

/// Request header.
///
/// Everything except `method` and `namespace` is copied from the
/// [`DeviceIdentity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Replayed message id.
    pub message_id: String,
    /// Request method.
    pub method: Method,
    /// Endpoint URL of the device.
    pub from: String,
    /// Request namespace.
    pub namespace: Namespace,
    /// Replayed timestamp.
    pub timestamp: u64,
    /// Replayed signature.
    pub sign: String,
    /// Always [`PAYLOAD_VERSION`].
    pub payload_version: u8,
}

/// `toggle` payload body of the legacy namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    /// Requested power state.
    pub onoff: OnOff,
}

/// `togglex` payload body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleX {
    /// Requested power state.
    pub onoff: OnOff,
    /// Addressed channel.
    pub channel: u8,
}

/// `light` payload body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Light {
    /// Addressed channel.
    pub channel: u8,
    /// Luminance, required on every light request.
    pub luminance: u8,
    /// Which of the optional fields the device should apply.
    pub capacity: Capacity,
    /// Device temperature percentage, with [`Capacity::Temperature`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
    /// Packed color, with [`Capacity::Rgb`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb: Option<u32>,
}

impl Light {
    /// A luminance-only change.
    #[must_use]
    pub const fn luminance(channel: u8, luminance: u8) -> Self {
        Self {
            channel,
            luminance,
            capacity: Capacity::Luminance,
            temperature: None,
            rgb: None,
        }
    }

    /// A white-point change at the given luminance.
    #[must_use]
    pub const fn temperature(channel: u8, luminance: u8, temperature: i32) -> Self {
        Self {
            channel,
            luminance,
            capacity: Capacity::Temperature,
            temperature: Some(temperature),
            rgb: None,
        }
    }

    /// A color change at the given luminance.
    #[must_use]
    pub const fn rgb(channel: u8, luminance: u8, rgb: u32) -> Self {
        Self {
            channel,
            luminance,
            capacity: Capacity::Rgb,
            temperature: None,
            rgb: Some(rgb),
        }
    }
}

/// Namespace-specific request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// `{}`, used by status queries.
    Empty {},
    /// `{"toggle": {...}}`
    Toggle {
        /// Body.
        toggle: Toggle,
    },
    /// `{"togglex": {...}}`
    ToggleX {
        /// Body.
        togglex: ToggleX,
    },
    /// `{"light": {...}}`
    Light {
        /// Body.
        light: Light,
    },
}

/// A complete request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Request header.
    pub header: Header,
    /// Request payload.
    pub payload: Payload,
}

impl Message {
    /// Builds a message, taking the pass-through header fields from
    /// `identity`.
    #[must_use]
    pub fn new(
        identity: &DeviceIdentity,
        method: Method,
        namespace: Namespace,
        payload: Payload,
    ) -> Self {
        Self {
            header: Header {
                message_id: identity.message_id.clone(),
                method,
                from: identity.endpoint(),
                namespace,
                timestamp: identity.timestamp,
                sign: identity.sign.clone(),
                payload_version: PAYLOAD_VERSION,
            },
            payload,
        }
    }

    /// `GET Appliance.System.All` with an empty payload.
    #[must_use]
    pub fn system_all(identity: &DeviceIdentity) -> Self {
        Self::new(identity, Method::Get, Namespace::SystemAll, Payload::Empty {})
    }

    /// Power request in the given protocol variant.
    #[must_use]
    pub fn toggle(identity: &DeviceIdentity, variant: ToggleVariant, on: bool) -> Self {
        let onoff = OnOff::from(on);
        let payload = match variant {
            ToggleVariant::Toggle => Payload::Toggle {
                toggle: Toggle { onoff },
            },
            ToggleVariant::ToggleX => Payload::ToggleX {
                togglex: ToggleX {
                    onoff,
                    channel: identity.channel,
                },
            },
        };
        Self::new(identity, Method::Set, variant.namespace(), payload)
    }

    /// `SET Appliance.Control.Light` request.
    #[must_use]
    pub fn light(identity: &DeviceIdentity, light: Light) -> Self {
        Self::new(
            identity,
            Method::Set,
            Namespace::Light,
            Payload::Light { light },
        )
    }

    /// Returns the request namespace.
    #[must_use]
    pub const fn namespace(&self) -> Namespace {
        self.header.namespace
    }

    /// Returns the light body, if this is a light request.
    #[must_use]
    pub const fn light_body(&self) -> Option<&Light> {
        match &self.payload {
            Payload::Light { light } => Some(light),
            _ => None,
        }
    }
}
