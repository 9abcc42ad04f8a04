// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-facing entities for one robot.
//!
//! Each physical robot is exposed as three entities sharing one
//! [`Robot`](crate::Robot) adapter: the vacuum itself, a battery sensor and
//! a schedule switch. The entities are the catch point of the library: every
//! command failure is converted to a log entry and a no-op, nothing
//! propagates into the host's entity layer.

mod sensor;
mod switch;
mod vacuum;

pub use sensor::BatterySensorEntity;
pub use switch::ScheduleSwitchEntity;
pub use vacuum::VacuumEntity;
