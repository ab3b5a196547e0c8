// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP accessory builder.

use std::time::Duration;

use crate::config::DeviceIdentity;
use crate::device::Lightbulb;
use crate::error::Error;
use crate::protocol::{HttpConfig, HttpTransport};

/// Builder for accessories reached over the local HTTP protocol.
///
/// The default configuration matches what the devices need: self-signed
/// certificates are accepted and there is no request timeout.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use meross_lib::{DeviceIdentity, Lightbulb};
///
/// # fn example() -> meross_lib::Result<()> {
/// let identity = DeviceIdentity::new("Desk Lamp", "MSL120", "192.168.1.42");
/// let bulb = Lightbulb::http(identity)
///     .with_timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpLightbulbBuilder {
    identity: DeviceIdentity,
    config: HttpConfig,
}

impl HttpLightbulbBuilder {
    pub(crate) fn new(identity: DeviceIdentity) -> Self {
        let config = HttpConfig::from_identity(&identity);
        Self { identity, config }
    }

    /// Bounds every request by `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Rejects devices whose certificate does not validate.
    #[must_use]
    pub fn with_certificate_validation(mut self) -> Self {
        self.config = self.config.with_certificate_validation();
        self
    }

    /// Builds the accessory. No request is made.
    ///
    /// # Errors
    ///
    /// Returns error if the device address is empty or the HTTP client
    /// cannot be created.
    pub fn build(self) -> Result<Lightbulb<HttpTransport>, Error> {
        let transport = self.config.into_transport()?;
        Ok(Lightbulb::new(self.identity, transport))
    }
}

impl Lightbulb<HttpTransport> {
    /// Starts building an accessory reached over HTTP at
    /// `identity.device_url`.
    #[must_use]
    pub fn http(identity: DeviceIdentity) -> HttpLightbulbBuilder {
        HttpLightbulbBuilder::new(identity)
    }
}
