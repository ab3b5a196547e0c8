// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request construction and transport for Meross devices.
//!
//! - [`Message`] and friends describe the JSON bodies the device accepts.
//! - [`Transport`] is the seam the controller talks through.
//! - [`HttpTransport`] posts messages to the device's `/config` endpoint.

#[cfg(feature = "http")]
mod http;
mod message;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransport};
pub use message::{
    Capacity, Header, Light, Message, Method, Namespace, PAYLOAD_VERSION, Payload, Toggle, ToggleX,
};

use crate::error::ProtocolError;

/// Sends request messages to a device.
///
/// An implementation makes exactly one attempt per call. Success means the
/// device answered `200 OK` with a JSON body; any other status, a network
/// failure, or an unparseable body is a [`ProtocolError`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends `message` and returns the parsed JSON response body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the exchange fails.
    async fn send(&self, message: &Message) -> Result<serde_json::Value, ProtocolError>;
}
