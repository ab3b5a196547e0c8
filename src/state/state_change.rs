// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! Every update of an [`AttributeState`](super::AttributeState) goes through
//! a `StateChange`, whether it comes from a status query or from an
//! acknowledged set request.
//!
//! # Examples
//!
//! ```
//! use meross_lib::state::{AttributeState, ColorMode, StateChange};
//!
//! let mut state = AttributeState::new();
//!
//! // An acknowledged hue change also lights the bulb and selects color mode.
//! state.apply(&StateChange::light_acknowledged(StateChange::Hue(200.0), Some(ColorMode::Color)));
//! assert!(state.power());
//! assert_eq!(state.color_mode(), ColorMode::Color);
//! ```

use super::ColorMode;

/// A change to the cached attribute state.
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    /// Power state changed.
    Power(bool),

    /// Brightness changed (0-100).
    Brightness(u8),

    /// Color temperature changed (host scale, 140-500).
    ColorTemperature(u16),

    /// Hue changed (degrees).
    Hue(f64),

    /// Saturation changed (percent).
    Saturation(f64),

    /// The color source of the last light request changed.
    ColorMode(ColorMode),

    /// Multiple changes at once.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Wraps the change carried by an acknowledged light-control request.
    ///
    /// Any light command also switches the bulb on, so the batch always
    /// starts with `Power(true)`. Color-affecting requests additionally
    /// record their [`ColorMode`].
    #[must_use]
    pub fn light_acknowledged(change: Self, mode: Option<ColorMode>) -> Self {
        let mut changes = vec![Self::Power(true), change];
        if let Some(mode) = mode {
            changes.push(Self::ColorMode(mode));
        }
        Self::Batch(changes)
    }

    /// Returns `true` if this is an empty batch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Batch(changes) if changes.is_empty())
    }
}
