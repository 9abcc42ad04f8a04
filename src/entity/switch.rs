// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The schedule switch entity.

use std::sync::Arc;

use tracing::error;

use crate::client::RobotClient;
use crate::robot::{DeviceInfo, Robot};

/// Switch controlling the robot's cleaning schedule.
#[derive(Debug)]
pub struct ScheduleSwitchEntity<C: RobotClient> {
    robot: Arc<Robot<C>>,
}

impl<C: RobotClient> ScheduleSwitchEntity<C> {
    /// Creates the schedule switch entity for a robot.
    pub fn new(robot: Arc<Robot<C>>) -> Self {
        Self { robot }
    }

    /// Entity display name.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} Schedule", self.robot.name())
    }

    /// Stable unique id.
    #[must_use]
    pub fn unique_id(&self) -> String {
        format!("{}_schedule", self.robot.serial())
    }

    /// Whether the robot currently has a status payload.
    #[must_use]
    pub fn available(&self) -> bool {
        self.robot.snapshot().available
    }

    /// Whether the cleaning schedule is enabled.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.robot.snapshot().schedule_enabled.unwrap_or(false)
    }

    /// Device metadata for the host's device registry.
    #[must_use]
    pub fn device_info(&self) -> DeviceInfo {
        self.robot.device_info()
    }

    /// Enables the schedule, then refreshes so the new state is visible.
    pub async fn turn_on(&self) {
        match self.robot.enable_schedule().await {
            Ok(()) => self.robot.refresh().await,
            Err(err) => {
                error!(robot = %self.robot.name(), %err, "switch connection error");
            }
        }
    }

    /// Disables the schedule, then refreshes so the new state is visible.
    pub async fn turn_off(&self) {
        match self.robot.disable_schedule().await {
            Ok(()) => self.robot.refresh().await,
            Err(err) => {
                error!(robot = %self.robot.name(), %err, "switch connection error");
            }
        }
    }
}
