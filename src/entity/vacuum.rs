// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The vacuum entity.

use std::sync::Arc;

use tracing::error;

use crate::client::RobotClient;
use crate::robot::{DeviceInfo, Robot, ZoneTarget};
use crate::state::RobotSnapshot;
use crate::types::{CleaningCategory, CleaningMode, LifecycleState, NavigationMode};

/// The vacuum entity for one robot.
///
/// Read accessors reflect the latest snapshot; command methods delegate to
/// the shared [`Robot`] and convert every failure into a logged no-op.
#[derive(Debug)]
pub struct VacuumEntity<C: RobotClient> {
    robot: Arc<Robot<C>>,
}

impl<C: RobotClient> VacuumEntity<C> {
    /// Creates the vacuum entity for a robot.
    pub fn new(robot: Arc<Robot<C>>) -> Self {
        Self { robot }
    }

    /// Entity display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.robot.name()
    }

    /// Stable unique id (the cloud serial).
    #[must_use]
    pub fn unique_id(&self) -> &str {
        self.robot.serial()
    }

    /// Icon hint for the host frontend.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        "mdi:robot-vacuum-variant"
    }

    /// Whether the robot currently has a status payload.
    #[must_use]
    pub fn available(&self) -> bool {
        self.robot.snapshot().available
    }

    /// Coarse lifecycle state, `None` when unavailable.
    #[must_use]
    pub fn state(&self) -> Option<LifecycleState> {
        self.robot.snapshot().state
    }

    /// Composed human-readable status text.
    #[must_use]
    pub fn status(&self) -> Option<String> {
        self.robot.snapshot().status
    }

    /// Battery charge percentage.
    #[must_use]
    pub fn battery_level(&self) -> Option<u8> {
        self.robot.snapshot().battery_level
    }

    /// Full derived snapshot, for hosts that want everything at once.
    #[must_use]
    pub fn snapshot(&self) -> RobotSnapshot {
        self.robot.snapshot()
    }

    /// Device metadata for the host's device registry.
    #[must_use]
    pub fn device_info(&self) -> DeviceInfo {
        self.robot.device_info()
    }

    /// Starts cleaning, or resumes when paused.
    pub async fn start(&self) {
        if let Err(err) = self.robot.start().await {
            error!(robot = %self.robot.name(), %err, "vacuum connection error");
        }
    }

    /// Pauses the current cleaning run.
    pub async fn pause(&self) {
        if let Err(err) = self.robot.pause().await {
            error!(robot = %self.robot.name(), %err, "vacuum connection error");
        }
    }

    /// Stops the current cleaning run.
    pub async fn stop(&self) {
        if let Err(err) = self.robot.stop().await {
            error!(robot = %self.robot.name(), %err, "vacuum connection error");
        }
    }

    /// Sends the robot back to its dock.
    pub async fn return_to_base(&self) {
        if let Err(err) = self.robot.return_to_base().await {
            error!(robot = %self.robot.name(), %err, "vacuum connection error");
        }
    }

    /// Makes the robot emit a sound so it can be found.
    pub async fn locate(&self) {
        if let Err(err) = self.robot.locate().await {
            error!(robot = %self.robot.name(), %err, "vacuum connection error");
        }
    }

    /// Starts a spot cleaning run around the current position.
    pub async fn clean_spot(&self) {
        if let Err(err) = self.robot.clean_spot().await {
            error!(robot = %self.robot.name(), %err, "vacuum connection error");
        }
    }

    /// Starts a parameterized cleaning run, optionally targeting a named
    /// zone. Resolution failures carry the valid candidate names and are
    /// logged user-facing; the clean command is not issued in that case.
    pub async fn custom_cleaning(
        &self,
        mode: CleaningMode,
        navigation: NavigationMode,
        category: CleaningCategory,
        target: Option<ZoneTarget>,
    ) {
        if let Err(err) = self
            .robot
            .custom_cleaning(mode, navigation, category, target)
            .await
        {
            error!(robot = %self.robot.name(), %err, "custom cleaning failed");
        }
    }
}
