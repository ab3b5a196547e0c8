// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! On/off flag as carried on the wire.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The `onoff` field of `Toggle`/`ToggleX` payloads.
///
/// Meross devices encode it as the integer `0` or `1`. Any non-zero value
/// read back from a device is treated as on.
///
/// # Examples
///
/// ```
/// use meross_lib::types::OnOff;
///
/// assert_eq!(OnOff::from(true), OnOff::On);
/// assert_eq!(serde_json::to_string(&OnOff::On).unwrap(), "1");
/// assert!(bool::from(serde_json::from_str::<OnOff>("1").unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OnOff {
    /// Relay open, light dark.
    #[default]
    Off,
    /// Relay closed, light lit.
    On,
}

impl OnOff {
    /// Returns the numeric wire value.
    #[must_use]
    pub const fn as_num(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }

    /// Returns `true` for [`OnOff::On`].
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for OnOff {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<OnOff> for bool {
    fn from(value: OnOff) -> Self {
        value.is_on()
    }
}

impl fmt::Display for OnOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "Off",
            Self::On => "On",
        })
    }
}

impl Serialize for OnOff {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_num())
    }
}

impl<'de> Deserialize<'de> for OnOff {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u64::deserialize(deserializer)?;
        Ok(Self::from(value != 0))
    }
}
