// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Meross Lib - A Rust library to control Meross smart bulbs and plugs.
//!
//! This library drives Meross devices over their local HTTP protocol and
//! exposes them to a home-automation host as a set of characteristics.
//!
//! # Supported Features
//!
//! - **Power control**: On/off through `Toggle` or `ToggleX`, per model
//! - **Light control**: Brightness, color temperature, hue and saturation
//! - **Status queries**: Power, luminance and white point from the digest
//! - **Graceful degradation**: Every call completes with a usable value
//!
//! # Supported Models
//!
//! - `MSL120`: Color bulb with every characteristic
//! - `MSS110-1`: Plug using the legacy `Toggle` namespace
//! - Anything else: Power only, through `ToggleX`
//!
//! # Quick Start
//!
//! ```no_run
//! use meross_lib::{Characteristic, CharacteristicValue, DeviceIdentity, Lightbulb};
//!
//! #[tokio::main]
//! async fn main() -> meross_lib::Result<()> {
//!     let identity = DeviceIdentity::from_json(
//!         r#"{
//!             "name": "Desk Lamp",
//!             "model": "MSL120",
//!             "deviceUrl": "192.168.1.42",
//!             "messageId": "4a1e5c3b",
//!             "sign": "0f1c2d3e",
//!             "timestamp": 1587061281
//!         }"#,
//!     )?;
//!     let bulb = Lightbulb::http(identity).build()?;
//!
//!     // Typed calls
//!     bulb.set_power(true).await?;
//!     bulb.set_color_temperature(320).await?;
//!
//!     // Host-style calls
//!     let hue = bulb
//!         .set(Characteristic::Hue, CharacteristicValue::Float(210.0))
//!         .await?;
//!     println!("hue is now {}", hue.value());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Device failures
//!
//! Network failures, non-200 answers and malformed bodies never surface as
//! errors from the controller. They are logged with `tracing` and the call
//! completes with a [`Completion::Fallback`] carrying the cached value. Errors
//! are reserved for calls the model cannot serve and for values of the wrong
//! kind.

mod capabilities;
mod config;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use capabilities::{Capabilities, Characteristic, ToggleVariant};
pub use config::DeviceIdentity;
#[cfg(feature = "http")]
pub use device::HttpLightbulbBuilder;
pub use device::{
    AccessoryInformation, CharacteristicValue, Completion, Lightbulb, MANUFACTURER, SERIAL_NUMBER,
    SetPlan, SetRequest, plan,
};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::Transport;
pub use state::{AttributeState, ColorMode, StateChange};
pub use types::{Hsl, OnOff, RgbColor};
