// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Meross library.
//!
//! Transport and parse failures never reach the host: the
//! [`Lightbulb`](crate::Lightbulb) controller recovers them locally and
//! completes with a fallback value. The errors below are still surfaced by the
//! lower layers ([`Transport`](crate::protocol::Transport), response parsing)
//! and by host-contract misuse such as asking a plug for its brightness.

use thiserror::Error;

use crate::capabilities::Characteristic;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The device model does not expose the requested characteristic.
    #[error("model {model} does not support {characteristic}")]
    CapabilityNotSupported {
        /// The configured model identifier.
        model: String,
        /// The characteristic that was requested.
        characteristic: Characteristic,
    },

    /// A characteristic was set with a value of the wrong kind.
    #[error("{characteristic} expects a {expected} value")]
    ValueTypeMismatch {
        /// The characteristic being set.
        characteristic: Characteristic,
        /// Human-readable name of the expected value kind.
        expected: &'static str,
    },
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },
}

/// Errors related to the HTTP exchange with the device.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with anything other than `200 OK`.
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The response body was not valid JSON.
    #[error("malformed response: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Errors related to parsing device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// A field is present but its value cannot be used.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 140,
            max: 500,
            actual: 600,
        };
        assert_eq!(err.to_string(), "value 600 is out of range [140, 500]");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("payload.all.digest.light".to_string());
        assert_eq!(
            err.to_string(),
            "missing field in response: payload.all.digest.light"
        );
    }

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::UnexpectedStatus(500);
        assert_eq!(err.to_string(), "unexpected HTTP status 500");
    }

    #[test]
    fn capability_error_display() {
        let err = Error::CapabilityNotSupported {
            model: "MSS310".to_string(),
            characteristic: Characteristic::Brightness,
        };
        assert_eq!(err.to_string(), "model MSS310 does not support Brightness");
    }

    #[test]
    fn error_from_parse_error() {
        let err: Error = ParseError::MissingField("togglex".to_string()).into();
        assert!(matches!(err, Error::Parse(ParseError::MissingField(_))));
    }
}
