// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registry of robots keyed by cloud serial.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::client::RobotClient;
use crate::robot::Robot;

/// Holds all robots of one integration setup, keyed by serial.
///
/// The registry hands out `Arc` handles so the vacuum, sensor and switch
/// entities of one physical robot share a single adapter. Refreshes run
/// sequentially; the host contract of at most one in-flight refresh per
/// robot is preserved.
#[derive(Debug, Default)]
pub struct RobotRegistry<C: RobotClient> {
    robots: RwLock<HashMap<String, Arc<Robot<C>>>>,
}

impl<C: RobotClient> RobotRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            robots: RwLock::new(HashMap::new()),
        }
    }

    /// Adds a robot, replacing any previous robot with the same serial.
    ///
    /// Returns the shared handle for entity construction.
    pub fn add(&self, robot: Robot<C>) -> Arc<Robot<C>> {
        let robot = Arc::new(robot);
        debug!(robot = %robot.name(), serial = %robot.serial(), "registering robot");
        self.robots
            .write()
            .insert(robot.serial().to_string(), Arc::clone(&robot));
        robot
    }

    /// Returns the robot with the given serial, if registered.
    #[must_use]
    pub fn get(&self, serial: &str) -> Option<Arc<Robot<C>>> {
        self.robots.read().get(serial).cloned()
    }

    /// Removes the robot with the given serial.
    ///
    /// Entities still holding the `Arc` keep working until dropped; the
    /// registry simply stops refreshing it.
    pub fn remove(&self, serial: &str) -> Option<Arc<Robot<C>>> {
        self.robots.write().remove(serial)
    }

    /// Returns the serials of all registered robots.
    #[must_use]
    pub fn serials(&self) -> Vec<String> {
        self.robots.read().keys().cloned().collect()
    }

    /// Returns handles to all registered robots.
    #[must_use]
    pub fn robots(&self) -> Vec<Arc<Robot<C>>> {
        self.robots.read().values().cloned().collect()
    }

    /// Returns the number of registered robots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.robots.read().len()
    }

    /// Returns `true` when no robots are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.robots.read().is_empty()
    }

    /// Refreshes every registered robot, one after the other.
    pub async fn refresh_all(&self) {
        for robot in self.robots() {
            robot.refresh().await;
        }
    }
}
