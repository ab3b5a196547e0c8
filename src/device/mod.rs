// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute controller for Meross accessories.
//!
//! A [`Lightbulb`] owns the cached [`AttributeState`] of one device and
//! answers the host's per-characteristic get and set calls. Each call makes
//! at most one request through its [`Transport`]; whatever happens on the
//! wire, the call completes with a value:
//!
//! - A successful get refreshes the cache from the status digest.
//! - A successful set commits the requested value to the cache.
//! - A failed get returns the cached value.
//! - A failed power set reports off; any other failed set reports the
//!   cached value and leaves the cache as it was.
//!
//! # Concurrency
//!
//! The cache lock is never held across a request. Each set snapshots the
//! cache, builds its request, sends it, and applies its change afterwards,
//! so overlapping calls (for example a hue and a saturation set racing) are
//! last-write-wins in completion order. The host is expected to issue one
//! call per characteristic at a time.
//!
//! ```no_run
//! use meross_lib::{Characteristic, DeviceIdentity, Lightbulb};
//!
//! # async fn example() -> meross_lib::Result<()> {
//! let identity = DeviceIdentity::new("Desk Lamp", "MSL120", "192.168.1.42");
//! let bulb = Lightbulb::http(identity).build()?;
//!
//! let brightness = bulb.set_brightness(60).await?;
//! if !brightness.is_acknowledged() {
//!     println!("bulb unreachable, still at {}", brightness.value());
//! }
//!
//! let _hue = bulb.get(Characteristic::Hue).await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
mod http_builder;
mod request;
mod value;

#[cfg(feature = "http")]
pub use http_builder::HttpLightbulbBuilder;
pub use request::{SetPlan, SetRequest, plan};
pub use value::{CharacteristicValue, Completion};

use parking_lot::RwLock;

use crate::capabilities::{Capabilities, Characteristic};
use crate::config::DeviceIdentity;
use crate::error::{Error, ParseError};
use crate::protocol::{Message, Transport};
use crate::response::SystemAllResponse;
use crate::state::{AttributeState, StateChange};
use crate::types::device_temperature_to_home;

/// Manufacturer reported in the accessory information.
pub const MANUFACTURER: &str = "Meross";

/// Serial number reported in the accessory information.
pub const SERIAL_NUMBER: &str = "123";

/// Static accessory information shown by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessoryInformation {
    /// Always [`MANUFACTURER`].
    pub manufacturer: &'static str,
    /// Configured model identifier.
    pub model: String,
    /// Always [`SERIAL_NUMBER`].
    pub serial_number: &'static str,
    /// Configured display name.
    pub name: String,
}

/// A Meross accessory driven through its local HTTP protocol.
///
/// Despite the name this also drives plugs: the model's
/// [`Capabilities`] decide which characteristics are exposed.
#[derive(Debug)]
pub struct Lightbulb<T: Transport> {
    identity: DeviceIdentity,
    capabilities: Capabilities,
    transport: T,
    state: RwLock<AttributeState>,
}

impl<T: Transport> Lightbulb<T> {
    /// Creates a controller, resolving the model's capabilities.
    #[must_use]
    pub fn new(identity: DeviceIdentity, transport: T) -> Self {
        let capabilities = Capabilities::for_model(&identity.model);

        tracing::info!(
            model = %identity.model,
            name = %identity.name,
            address = %identity.device_url,
            characteristics = capabilities.characteristics().len(),
            "Created accessory"
        );

        Self {
            identity,
            capabilities,
            transport,
            state: RwLock::new(AttributeState::new()),
        }
    }

    /// Returns the configured identity.
    #[must_use]
    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    /// Returns the model capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the exposed characteristics in registration order.
    #[must_use]
    pub fn characteristics(&self) -> &'static [Characteristic] {
        self.capabilities.characteristics()
    }

    /// Returns the accessory information block.
    #[must_use]
    pub fn information(&self) -> AccessoryInformation {
        AccessoryInformation {
            manufacturer: MANUFACTURER,
            model: self.identity.model.clone(),
            serial_number: SERIAL_NUMBER,
            name: self.identity.name.clone(),
        }
    }

    /// Returns a snapshot of the cached state.
    #[must_use]
    pub fn state(&self) -> AttributeState {
        self.state.read().clone()
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ========== Host surface ==========

    /// Reads a characteristic.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` if the model does not expose
    /// `characteristic`. Device failures are not errors.
    pub async fn get(
        &self,
        characteristic: Characteristic,
    ) -> Result<Completion<CharacteristicValue>, Error> {
        Ok(match characteristic {
            Characteristic::On => self.get_power().await?.map(Into::into),
            Characteristic::Brightness => self.get_brightness().await?.map(Into::into),
            Characteristic::ColorTemperature => {
                self.get_color_temperature().await?.map(Into::into)
            }
            Characteristic::Hue => self.get_hue()?.map(Into::into),
            Characteristic::Saturation => self.get_saturation()?.map(Into::into),
        })
    }

    /// Changes a characteristic.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` if the model does not expose
    /// `characteristic`, or a value error if `value` does not suit it.
    /// Device failures are not errors.
    pub async fn set(
        &self,
        characteristic: Characteristic,
        value: CharacteristicValue,
    ) -> Result<Completion<CharacteristicValue>, Error> {
        let request = SetRequest::from_value(characteristic, value)?;
        Ok(match request {
            SetRequest::Power(on) => self.set_power(on).await?.map(Into::into),
            SetRequest::Brightness(level) => self.set_brightness(level).await?.map(Into::into),
            SetRequest::ColorTemperature(level) => {
                self.set_color_temperature(level).await?.map(Into::into)
            }
            SetRequest::Hue(hue) => self.set_hue(hue).await?.map(Into::into),
            SetRequest::Saturation(saturation) => {
                self.set_saturation(saturation).await?.map(Into::into)
            }
        })
    }

    // ========== Power ==========

    /// Reads the power state from the device.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` if the model has no power
    /// characteristic.
    pub async fn get_power(&self) -> Result<Completion<bool>, Error> {
        self.ensure_supported(Characteristic::On)?;
        let channel = self.identity.channel;
        Ok(self
            .refresh(
                |status| status.power(channel).map(StateChange::Power),
                AttributeState::power,
            )
            .await)
    }

    /// Switches the device on or off.
    ///
    /// A failed request reports off and caches off.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` if the model has no power
    /// characteristic.
    pub async fn set_power(&self, on: bool) -> Result<Completion<bool>, Error> {
        self.ensure_supported(Characteristic::On)?;
        if self.execute(SetRequest::Power(on)).await {
            tracing::info!(model = %self.identity.model, "Turned {}", if on { "on" } else { "off" });
            Ok(Completion::Acknowledged(on))
        } else {
            self.state.write().apply(&StateChange::Power(false));
            Ok(Completion::Fallback(false))
        }
    }

    // ========== Brightness ==========

    /// Reads the luminance from the device.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` if the model is not a bulb.
    pub async fn get_brightness(&self) -> Result<Completion<u8>, Error> {
        self.ensure_supported(Characteristic::Brightness)?;
        Ok(self
            .refresh(
                |status| status.luminance().map(StateChange::Brightness),
                AttributeState::brightness,
            )
            .await)
    }

    /// Sets the luminance.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` if the model is not a bulb.
    pub async fn set_brightness(&self, level: u8) -> Result<Completion<u8>, Error> {
        self.ensure_supported(Characteristic::Brightness)?;
        if self.execute(SetRequest::Brightness(level)).await {
            tracing::info!(model = %self.identity.model, level, "Set brightness");
            Ok(Completion::Acknowledged(level))
        } else {
            Ok(Completion::Fallback(self.state.read().brightness()))
        }
    }

    // ========== Color temperature ==========

    /// Reads the color temperature from the device, on the host scale.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` if the model is not a bulb.
    pub async fn get_color_temperature(&self) -> Result<Completion<u16>, Error> {
        self.ensure_supported(Characteristic::ColorTemperature)?;
        Ok(self
            .refresh(
                |status| {
                    let device = status.temperature()?;
                    let home = device_temperature_to_home(i32::from(device));
                    u16::try_from(home)
                        .map(StateChange::ColorTemperature)
                        .map_err(|_| ParseError::InvalidValue {
                            field: "payload.all.digest.light.temperature".to_string(),
                            message: format!("{device} is outside the device scale"),
                        })
                },
                AttributeState::color_temperature,
            )
            .await)
    }

    /// Sets the color temperature (host scale) at the cached brightness.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` if the model is not a bulb.
    pub async fn set_color_temperature(&self, level: u16) -> Result<Completion<u16>, Error> {
        self.ensure_supported(Characteristic::ColorTemperature)?;
        if self.execute(SetRequest::ColorTemperature(level)).await {
            tracing::info!(model = %self.identity.model, level, "Set color temperature");
            Ok(Completion::Acknowledged(level))
        } else {
            Ok(Completion::Fallback(self.state.read().color_temperature()))
        }
    }

    // ========== Hue and saturation ==========

    /// Returns the cached hue.
    ///
    /// The status digest reports color only as a packed integer, so hue is
    /// answered from the cache without a request.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` if the model is not a bulb.
    pub fn get_hue(&self) -> Result<Completion<f64>, Error> {
        self.ensure_supported(Characteristic::Hue)?;
        Ok(Completion::Acknowledged(self.state.read().hue()))
    }

    /// Sets the hue, combined with the cached saturation and brightness.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` if the model is not a bulb.
    pub async fn set_hue(&self, hue: f64) -> Result<Completion<f64>, Error> {
        self.ensure_supported(Characteristic::Hue)?;
        if self.execute(SetRequest::Hue(hue)).await {
            tracing::info!(model = %self.identity.model, hue, "Set hue");
            Ok(Completion::Acknowledged(hue))
        } else {
            Ok(Completion::Fallback(self.state.read().hue()))
        }
    }

    /// Returns the cached saturation.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` if the model is not a bulb.
    pub fn get_saturation(&self) -> Result<Completion<f64>, Error> {
        self.ensure_supported(Characteristic::Saturation)?;
        Ok(Completion::Acknowledged(self.state.read().saturation()))
    }

    /// Sets the saturation, combined with the cached hue and brightness.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityNotSupported` if the model is not a bulb.
    pub async fn set_saturation(&self, saturation: f64) -> Result<Completion<f64>, Error> {
        self.ensure_supported(Characteristic::Saturation)?;
        if self.execute(SetRequest::Saturation(saturation)).await {
            tracing::info!(model = %self.identity.model, saturation, "Set saturation");
            Ok(Completion::Acknowledged(saturation))
        } else {
            Ok(Completion::Fallback(self.state.read().saturation()))
        }
    }

    // ========== Internals ==========

    fn ensure_supported(&self, characteristic: Characteristic) -> Result<(), Error> {
        if self.capabilities.supports(characteristic) {
            Ok(())
        } else {
            Err(Error::CapabilityNotSupported {
                model: self.identity.model.clone(),
                characteristic,
            })
        }
    }

    /// Plans and sends a set request, committing its change on success.
    async fn execute(&self, request: SetRequest) -> bool {
        let snapshot = self.state();
        let SetPlan {
            message,
            on_success,
        } = plan(&self.identity, &self.capabilities, &snapshot, request);

        match self.transport.send(&message).await {
            Ok(body) => {
                tracing::debug!(namespace = %message.namespace(), response = %body, "Set succeeded");
                self.state.write().apply(&on_success);
                true
            }
            Err(e) => {
                tracing::warn!(
                    model = %self.identity.model,
                    address = %self.identity.device_url,
                    characteristic = %request.characteristic(),
                    error = %e,
                    "Failed to set characteristic"
                );
                false
            }
        }
    }

    /// Queries the status digest and applies what `read` extracts from it.
    async fn refresh<V>(
        &self,
        read: impl FnOnce(&SystemAllResponse) -> Result<StateChange, ParseError>,
        cached: impl Fn(&AttributeState) -> V,
    ) -> Completion<V> {
        let outcome = match self.transport.send(&Message::system_all(&self.identity)).await {
            Ok(body) => SystemAllResponse::from_value(body)
                .and_then(|status| read(&status))
                .map_err(Error::from),
            Err(e) => Err(Error::from(e)),
        };

        match outcome {
            Ok(change) => {
                tracing::debug!(?change, "Retrieved status");
                let mut state = self.state.write();
                state.apply(&change);
                Completion::Acknowledged(cached(&*state))
            }
            Err(e) => {
                tracing::warn!(
                    model = %self.identity.model,
                    address = %self.identity.device_url,
                    error = %e,
                    "Failed to retrieve status"
                );
                Completion::Fallback(cached(&*self.state.read()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use parking_lot::Mutex;
    use serde_json::{Value, json};

    use super::*;
    use crate::error::ProtocolError;
    use crate::protocol::{Capacity, Namespace};
    use crate::state::ColorMode;

    /// Replays queued replies and records every message sent.
    #[derive(Debug, Default)]
    struct ScriptedTransport {
        replies: Mutex<VecDeque<Result<Value, u16>>>,
        sent: Mutex<Vec<Message>>,
    }

    impl ScriptedTransport {
        fn reply(self, body: Value) -> Self {
            self.replies.lock().push_back(Ok(body));
            self
        }

        fn fail(self, status: u16) -> Self {
            self.replies.lock().push_back(Err(status));
            self
        }

        fn sent(&self) -> Vec<Message> {
            self.sent.lock().clone()
        }

        fn last_light(&self) -> crate::protocol::Light {
            self.sent
                .lock()
                .last()
                .and_then(|m| m.light_body().copied())
                .expect("a light request was sent")
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, message: &Message) -> Result<Value, ProtocolError> {
            self.sent.lock().push(message.clone());
            match self.replies.lock().pop_front() {
                Some(Ok(body)) => Ok(body),
                Some(Err(status)) => Err(ProtocolError::UnexpectedStatus(status)),
                None => Err(ProtocolError::UnexpectedStatus(500)),
            }
        }
    }

    fn ack() -> Value {
        json!({"header": {"method": "SETACK"}, "payload": {}})
    }

    fn status(onoff: u8, luminance: u8, temperature: u8) -> Value {
        json!({"payload": {"all": {"digest": {
            "togglex": [{"channel": 0, "onoff": onoff}],
            "light": {"luminance": luminance, "temperature": temperature}
        }}}})
    }

    fn bulb(transport: ScriptedTransport) -> Lightbulb<ScriptedTransport> {
        Lightbulb::new(DeviceIdentity::new("Lamp", "MSL120", "10.0.0.9"), transport)
    }

    fn plug(model: &str, transport: ScriptedTransport) -> Lightbulb<ScriptedTransport> {
        Lightbulb::new(DeviceIdentity::new("Plug", model, "10.0.0.8"), transport)
    }

    // ========== Gets ==========

    #[tokio::test]
    async fn get_power_reads_digest() {
        let bulb = bulb(ScriptedTransport::default().reply(status(1, 30, 80)));
        assert_eq!(bulb.get_power().await.unwrap(), Completion::Acknowledged(true));
        assert!(bulb.state().power());

        let sent = bulb.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].namespace(), Namespace::SystemAll);
    }

    #[tokio::test]
    async fn get_power_failure_falls_back_to_cache() {
        let bulb = bulb(
            ScriptedTransport::default()
                .fail(500)
                .reply(status(1, 30, 80))
                .fail(503),
        );
        // First failure: nothing cached yet, so off.
        assert_eq!(bulb.get_power().await.unwrap(), Completion::Fallback(false));
        assert_eq!(bulb.get_power().await.unwrap(), Completion::Acknowledged(true));
        assert_eq!(bulb.get_power().await.unwrap(), Completion::Fallback(true));
    }

    #[tokio::test]
    async fn get_brightness_and_temperature() {
        let bulb = bulb(
            ScriptedTransport::default()
                .reply(status(1, 64, 51))
                .reply(status(1, 64, 51)),
        );
        assert_eq!(
            bulb.get_brightness().await.unwrap(),
            Completion::Acknowledged(64)
        );
        assert_eq!(
            bulb.get_color_temperature().await.unwrap(),
            Completion::Acknowledged(316)
        );
        assert_eq!(bulb.state().color_temperature(), 316);
    }

    #[tokio::test]
    async fn malformed_status_is_a_fallback() {
        let bulb = bulb(
            ScriptedTransport::default()
                .reply(json!({"payload": {"all": {}}}))
                .reply(json!({"payload": {"all": {"digest": {"light": {"luminance": "x"}}}}})),
        );
        assert_eq!(bulb.get_brightness().await.unwrap(), Completion::Fallback(0));
        assert_eq!(bulb.get_brightness().await.unwrap(), Completion::Fallback(0));
    }

    #[tokio::test]
    async fn out_of_scale_temperature_is_a_fallback() {
        let bulb = bulb(ScriptedTransport::default().reply(status(1, 10, 255)));
        assert_eq!(
            bulb.get_color_temperature().await.unwrap(),
            Completion::Fallback(140)
        );
    }

    #[tokio::test]
    async fn hue_and_saturation_come_from_cache() {
        let bulb = bulb(ScriptedTransport::default().reply(ack()).reply(ack()));
        bulb.set_hue(200.0).await.unwrap();
        bulb.set_saturation(30.0).await.unwrap();

        assert_eq!(bulb.get_hue().unwrap(), Completion::Acknowledged(200.0));
        assert_eq!(
            bulb.get_saturation().unwrap(),
            Completion::Acknowledged(30.0)
        );
        assert_eq!(bulb.transport().sent().len(), 2);
    }

    // ========== Sets ==========

    #[tokio::test]
    async fn set_power_success() {
        let bulb = bulb(ScriptedTransport::default().reply(ack()));
        assert_eq!(
            bulb.set_power(true).await.unwrap(),
            Completion::Acknowledged(true)
        );
        assert!(bulb.state().power());
        assert_eq!(bulb.transport().sent()[0].namespace(), Namespace::ToggleX);
    }

    #[tokio::test]
    async fn set_power_failure_reports_off() {
        let bulb = bulb(ScriptedTransport::default().reply(ack()).fail(500));
        bulb.set_power(true).await.unwrap();

        assert_eq!(
            bulb.set_power(true).await.unwrap(),
            Completion::Fallback(false)
        );
        assert!(!bulb.state().power());
    }

    #[tokio::test]
    async fn set_brightness_success_turns_on() {
        let bulb = bulb(ScriptedTransport::default().reply(ack()));
        assert_eq!(
            bulb.set_brightness(75).await.unwrap(),
            Completion::Acknowledged(75)
        );

        let state = bulb.state();
        assert!(state.power());
        assert_eq!(state.brightness(), 75);

        let light = bulb.transport().last_light();
        assert_eq!(light.capacity, Capacity::Luminance);
        assert_eq!(light.luminance, 75);
    }

    #[tokio::test]
    async fn set_brightness_failure_keeps_previous() {
        let bulb = bulb(ScriptedTransport::default().reply(ack()).fail(502));
        bulb.set_brightness(40).await.unwrap();

        assert_eq!(
            bulb.set_brightness(90).await.unwrap(),
            Completion::Fallback(40)
        );
        assert_eq!(bulb.state().brightness(), 40);
    }

    #[tokio::test]
    async fn set_temperature_uses_cached_brightness() {
        let bulb = bulb(ScriptedTransport::default().reply(ack()).reply(ack()));
        bulb.set_brightness(55).await.unwrap();

        assert_eq!(
            bulb.set_color_temperature(500).await.unwrap(),
            Completion::Acknowledged(500)
        );
        let light = bulb.transport().last_light();
        assert_eq!(light.capacity, Capacity::Temperature);
        assert_eq!(light.luminance, 55);
        assert_eq!(light.temperature, Some(1));
    }

    #[tokio::test]
    async fn set_temperature_failure_keeps_previous() {
        let bulb = bulb(ScriptedTransport::default().fail(500));
        assert_eq!(
            bulb.set_color_temperature(300).await.unwrap(),
            Completion::Fallback(140)
        );
        assert_eq!(bulb.state().color_mode(), ColorMode::Temperature);
    }

    #[tokio::test]
    async fn saturation_then_hue_uses_latest_of_both() {
        let bulb = bulb(
            ScriptedTransport::default()
                .reply(ack())
                .reply(ack())
                .reply(ack()),
        );
        bulb.set_brightness(50).await.unwrap();
        bulb.set_saturation(100.0).await.unwrap();
        bulb.set_hue(120.0).await.unwrap();

        let light = bulb.transport().last_light();
        assert_eq!(light.capacity, Capacity::Rgb);
        assert_eq!(light.luminance, 50);
        assert_eq!(light.rgb, Some(255 * 255));
    }

    #[tokio::test]
    async fn hue_then_saturation_uses_latest_of_both() {
        let bulb = bulb(
            ScriptedTransport::default()
                .reply(ack())
                .reply(ack())
                .reply(ack()),
        );
        bulb.set_brightness(50).await.unwrap();
        bulb.set_hue(240.0).await.unwrap();
        bulb.set_saturation(100.0).await.unwrap();

        assert_eq!(bulb.transport().last_light().rgb, Some(255));
    }

    #[tokio::test]
    async fn failed_hue_is_not_cached() {
        let bulb = bulb(ScriptedTransport::default().reply(ack()).fail(500));
        bulb.set_hue(60.0).await.unwrap();

        assert_eq!(bulb.set_hue(180.0).await.unwrap(), Completion::Fallback(60.0));
        assert!((bulb.state().hue() - 60.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn color_mode_transitions() {
        let bulb = bulb(
            ScriptedTransport::default()
                .reply(ack())
                .reply(ack())
                .reply(ack())
                .reply(ack()),
        );
        assert_eq!(bulb.state().color_mode(), ColorMode::Temperature);

        bulb.set_hue(10.0).await.unwrap();
        assert_eq!(bulb.state().color_mode(), ColorMode::Color);

        bulb.set_color_temperature(200).await.unwrap();
        assert_eq!(bulb.state().color_mode(), ColorMode::Temperature);

        bulb.set_brightness(20).await.unwrap();
        assert_eq!(bulb.state().color_mode(), ColorMode::Temperature);

        bulb.set_power(false).await.unwrap();
        assert_eq!(bulb.state().color_mode(), ColorMode::Temperature);
    }

    // ========== Host surface ==========

    #[tokio::test]
    async fn dynamic_set_and_get() {
        let bulb = bulb(ScriptedTransport::default().reply(ack()).reply(status(1, 90, 100)));
        assert_eq!(
            bulb.set(Characteristic::Brightness, CharacteristicValue::Int(90))
                .await
                .unwrap(),
            Completion::Acknowledged(CharacteristicValue::Int(90))
        );
        assert_eq!(
            bulb.get(Characteristic::ColorTemperature).await.unwrap(),
            Completion::Acknowledged(CharacteristicValue::Int(140))
        );
    }

    #[tokio::test]
    async fn dynamic_set_rejects_wrong_kind_without_sending() {
        let bulb = bulb(ScriptedTransport::default());
        let err = bulb
            .set(Characteristic::Brightness, CharacteristicValue::Bool(true))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ValueTypeMismatch { .. }));
        assert!(bulb.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn plug_exposes_power_only() {
        let plug = plug("MSS310", ScriptedTransport::default());
        assert_eq!(plug.characteristics(), &[Characteristic::On]);

        let err = plug.set_brightness(10).await.unwrap_err();
        assert!(matches!(
            err,
            Error::CapabilityNotSupported {
                characteristic: Characteristic::Brightness,
                ..
            }
        ));
        assert!(plug.get(Characteristic::Hue).await.is_err());
        assert!(plug.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn legacy_plug_uses_toggle() {
        let plug = plug("MSS110-1", ScriptedTransport::default().reply(ack()));
        plug.set_power(true).await.unwrap();

        let value = serde_json::to_value(&plug.transport().sent()[0]).unwrap();
        assert_eq!(value["header"]["namespace"], "Appliance.Control.Toggle");
        assert_eq!(value["payload"], json!({"toggle": {"onoff": 1}}));
    }

    #[test]
    fn information_block() {
        let bulb = bulb(ScriptedTransport::default());
        assert_eq!(
            bulb.information(),
            AccessoryInformation {
                manufacturer: "Meross",
                model: "MSL120".to_string(),
                serial_number: "123",
                name: "Lamp".to_string(),
            }
        );
    }
}
