// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State adaptation for botvac robots.
//!
//! The cloud reports a nested status payload; this module turns it into the
//! normalized [`RobotSnapshot`] the entity layer reads. Alert and error codes
//! are resolved to display messages through the tables in [`messages`].

pub mod messages;
mod snapshot;

pub use snapshot::RobotSnapshot;
