// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory state types.
//!
//! [`AttributeState`] caches the last known value of every characteristic,
//! while [`StateChange`] represents individual updates that can be applied
//! to it.
//!
//! # Examples
//!
//! ```
//! use meross_lib::state::{AttributeState, StateChange};
//!
//! let mut state = AttributeState::new();
//! state.apply(&StateChange::Power(true));
//! assert!(state.power());
//! ```

mod attribute_state;
mod state_change;

pub use attribute_state::{AttributeState, ColorMode};
pub use state_change::StateChange;
