// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Meross devices.

use std::time::Duration;

use reqwest::Client;

use crate::config::{DeviceIdentity, endpoint_url};
use crate::error::ProtocolError;
use crate::protocol::{Message, Transport};

// ============================================================================
// HttpConfig - Transport settings
// ============================================================================

/// Configuration for the HTTP transport of one device.
///
/// Meross devices serve their control endpoint with a self-signed
/// certificate when reached over HTTPS, so certificate validation is off by
/// default. There is no request timeout unless one is set: each exchange is a
/// single attempt that either completes or fails.
///
/// # Examples
///
/// ```
/// use meross_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.42")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.endpoint(), "http://192.168.1.42/config");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    accept_invalid_certs: bool,
    timeout: Option<Duration>,
}

impl HttpConfig {
    /// Creates a configuration for the given host (IP or name, optional port).
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            accept_invalid_certs: true,
            timeout: None,
        }
    }

    /// Creates a configuration for the address in `identity`.
    #[must_use]
    pub fn from_identity(identity: &DeviceIdentity) -> Self {
        Self::new(identity.device_url.clone())
    }

    /// Enables TLS certificate validation.
    #[must_use]
    pub fn with_certificate_validation(mut self) -> Self {
        self.accept_invalid_certs = false;
        self
    }

    /// Sets a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns whether invalid certificates are accepted.
    #[must_use]
    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// Returns the timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        endpoint_url(&self.host)
    }

    /// Creates an `HttpTransport` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_transport(self) -> Result<HttpTransport, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }

        let mut builder = Client::builder().danger_accept_invalid_certs(self.accept_invalid_certs);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ProtocolError::Http)?;

        Ok(HttpTransport {
            endpoint: self.endpoint(),
            client,
        })
    }
}

// ============================================================================
// HttpTransport
// ============================================================================

/// Posts [`Message`]s to a device's `/config` endpoint.
///
/// # Examples
///
/// ```no_run
/// use meross_lib::DeviceIdentity;
/// use meross_lib::protocol::{HttpTransport, Message, Transport};
///
/// # async fn example() -> Result<(), meross_lib::ProtocolError> {
/// let identity = DeviceIdentity::new("Lamp", "MSL120", "192.168.1.42");
/// let transport = HttpTransport::new(&identity.device_url)?;
/// let status = transport.send(&Message::system_all(&identity)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the default configuration for `host`.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_transport()
    }

    /// Returns the URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn send(&self, message: &Message) -> Result<serde_json::Value, ProtocolError> {
        tracing::debug!(
            url = %self.endpoint,
            namespace = %message.namespace(),
            "Sending HTTP request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(message)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(ProtocolError::UnexpectedStatus(response.status().as_u16()));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received HTTP response");

        serde_json::from_str(&body).map_err(ProtocolError::MalformedBody)
    }
}
