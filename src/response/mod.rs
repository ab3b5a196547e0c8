// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for Meross JSON responses.
//!
//! `SET` requests are acknowledged with a body the controller does not
//! inspect; only the status digest returned by `Appliance.System.All` is
//! parsed.

mod system_all;

pub use system_all::{ChannelPower, Digest, LightDigest, SystemAllResponse};
