// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The battery sensor entity.

use std::sync::Arc;

use crate::client::RobotClient;
use crate::robot::{DeviceInfo, Robot};

/// Battery level sensor for one robot.
#[derive(Debug)]
pub struct BatterySensorEntity<C: RobotClient> {
    robot: Arc<Robot<C>>,
}

impl<C: RobotClient> BatterySensorEntity<C> {
    /// Creates the battery sensor entity for a robot.
    pub fn new(robot: Arc<Robot<C>>) -> Self {
        Self { robot }
    }

    /// Entity display name.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} Battery", self.robot.name())
    }

    /// Stable unique id.
    #[must_use]
    pub fn unique_id(&self) -> String {
        format!("{}_battery", self.robot.serial())
    }

    /// Device class hint for the host.
    #[must_use]
    pub fn device_class(&self) -> &'static str {
        "battery"
    }

    /// Unit of the reported value.
    #[must_use]
    pub fn unit_of_measurement(&self) -> &'static str {
        "%"
    }

    /// Whether the robot currently has a status payload.
    #[must_use]
    pub fn available(&self) -> bool {
        self.robot.snapshot().available
    }

    /// Battery charge percentage, `None` when unavailable.
    #[must_use]
    pub fn state(&self) -> Option<u8> {
        self.robot.snapshot().battery_level
    }

    /// Device metadata for the host's device registry.
    #[must_use]
    pub fn device_info(&self) -> DeviceInfo {
        self.robot.device_info()
    }
}
