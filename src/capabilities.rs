// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-model capability table.
//!
//! Every Meross model is driven through the same local HTTP endpoint, but
//! models differ in which characteristics they expose to the host and in the
//! namespace used for power control. Those differences are captured once in a
//! static table keyed by model identifier and resolved when a
//! [`Lightbulb`](crate::Lightbulb) is created.

use std::fmt;

use crate::protocol::Namespace;

/// A single host-visible attribute of an accessory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    /// Power state (boolean).
    On,
    /// Luminance, 0-100.
    Brightness,
    /// Color temperature on the host's mired-like scale (140-500).
    ColorTemperature,
    /// Hue in degrees, 0-360.
    Hue,
    /// Saturation percentage, 0-100.
    Saturation,
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::On => "On",
            Self::Brightness => "Brightness",
            Self::ColorTemperature => "ColorTemperature",
            Self::Hue => "Hue",
            Self::Saturation => "Saturation",
        })
    }
}

/// Protocol variant used for power control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToggleVariant {
    /// Legacy single-channel `Appliance.Control.Toggle` with a bare `onoff`.
    Toggle,
    /// Channel-addressed `Appliance.Control.ToggleX`.
    #[default]
    ToggleX,
}

impl ToggleVariant {
    /// Returns the namespace for power requests.
    #[must_use]
    pub const fn namespace(self) -> Namespace {
        match self {
            Self::Toggle => Namespace::Toggle,
            Self::ToggleX => Namespace::ToggleX,
        }
    }
}

/// What a model exposes and how it is switched.
///
/// # Examples
///
/// ```
/// use meross_lib::{Capabilities, Characteristic, ToggleVariant};
///
/// let bulb = Capabilities::for_model("MSL120");
/// assert!(bulb.supports(Characteristic::Hue));
///
/// let plug = Capabilities::for_model("MSS310");
/// assert_eq!(plug.characteristics(), &[Characteristic::On]);
/// assert_eq!(plug.toggle(), ToggleVariant::ToggleX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    characteristics: &'static [Characteristic],
    toggle: ToggleVariant,
}

const POWER_ONLY: &[Characteristic] = &[Characteristic::On];

const COLOR_BULB: &[Characteristic] = &[
    Characteristic::On,
    Characteristic::Brightness,
    Characteristic::ColorTemperature,
    Characteristic::Hue,
    Characteristic::Saturation,
];

/// Models that differ from [`Capabilities::DEFAULT`].
const MODEL_TABLE: &[(&str, Capabilities)] = &[
    (
        "MSS110-1",
        Capabilities {
            characteristics: POWER_ONLY,
            toggle: ToggleVariant::Toggle,
        },
    ),
    (
        "MSL120",
        Capabilities {
            characteristics: COLOR_BULB,
            toggle: ToggleVariant::ToggleX,
        },
    ),
];

impl Capabilities {
    /// Capabilities of any model missing from the table: power only, via
    /// `ToggleX`.
    pub const DEFAULT: Self = Self {
        characteristics: POWER_ONLY,
        toggle: ToggleVariant::ToggleX,
    };

    /// Looks up the capabilities of a model identifier.
    ///
    /// Matching is exact. Unknown models fall back to [`Self::DEFAULT`].
    #[must_use]
    pub fn for_model(model: &str) -> Self {
        MODEL_TABLE
            .iter()
            .find(|(name, _)| *name == model)
            .map_or(Self::DEFAULT, |(_, caps)| *caps)
    }

    /// Returns the exposed characteristics in registration order.
    #[must_use]
    pub const fn characteristics(&self) -> &'static [Characteristic] {
        self.characteristics
    }

    /// Returns the power-control protocol variant.
    #[must_use]
    pub const fn toggle(&self) -> ToggleVariant {
        self.toggle
    }

    /// Returns whether the model exposes `characteristic`.
    #[must_use]
    pub fn supports(&self, characteristic: Characteristic) -> bool {
        self.characteristics.contains(&characteristic)
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::DEFAULT
    }
}
