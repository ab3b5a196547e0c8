// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-facing value and completion types.

use std::fmt;

/// A characteristic value in the host's native representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CharacteristicValue {
    /// Power.
    Bool(bool),
    /// Brightness and color temperature.
    Int(i64),
    /// Hue and saturation.
    Float(f64),
}

impl CharacteristicValue {
    /// Returns the integer, if this is one.
    #[must_use]
    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the number as a float; integers are widened.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(v),
            Self::Int(v) => Some(v as f64),
            Self::Bool(_) => None,
        }
    }
}

impl From<bool> for CharacteristicValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u8> for CharacteristicValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for CharacteristicValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for CharacteristicValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for CharacteristicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Outcome of a get or set, always carrying a value for the host.
///
/// Device failures are not reported as errors: the operation completes with
/// a [`Completion::Fallback`] holding the best value still known.
///
/// # Examples
///
/// ```
/// use meross_lib::Completion;
///
/// let done = Completion::Acknowledged(80_u8);
/// assert_eq!(done.value(), 80);
///
/// let degraded = Completion::Fallback(false);
/// assert!(!degraded.is_acknowledged());
/// assert!(!degraded.value());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Completion<T> {
    /// The device handled the request; the value is current.
    Acknowledged(T),
    /// The exchange failed; the value is the cached or fallback value.
    Fallback(T),
}

impl<T> Completion<T> {
    /// Returns the carried value.
    #[must_use]
    pub fn value(self) -> T {
        match self {
            Self::Acknowledged(v) | Self::Fallback(v) => v,
        }
    }

    /// Returns whether the device handled the request.
    #[must_use]
    pub const fn is_acknowledged(&self) -> bool {
        matches!(self, Self::Acknowledged(_))
    }

    /// Maps the carried value, keeping the variant.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Completion<U> {
        match self {
            Self::Acknowledged(v) => Completion::Acknowledged(f(v)),
            Self::Fallback(v) => Completion::Fallback(f(v)),
        }
    }
}
