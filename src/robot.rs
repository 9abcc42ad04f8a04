// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level robot handle: payload store, refresh cycle and commands.
//!
//! [`Robot`] wraps one robot's [`RobotClient`] together with the latest
//! fetched payloads. The host's scheduler drives [`Robot::refresh`]
//! periodically and guarantees at most one in-flight refresh per robot; the
//! adapter itself does no retrying and holds no locks across awaits.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{debug, error, warn};

use crate::client::{
    CustomCleaning, GeneralInfo, MapBoundary, RobotClient, RobotMap, RobotStatus,
};
use crate::config::RobotConfig;
use crate::error::{CleaningError, Error, Result};
use crate::state::RobotSnapshot;
use crate::types::{CleaningCategory, CleaningMode, LifecycleState, NavigationMode};

/// A zone cleaning target, resolved by display name.
///
/// Matching is by substring containment against the names the cloud reports,
/// so "Kitchen" matches a boundary named "Kitchen floor".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTarget {
    /// Display name of the persistent map.
    pub map: String,
    /// Display name of the boundary on that map.
    pub zone: String,
}

/// Latest payloads and availability bookkeeping for one robot.
#[derive(Debug, Default)]
struct PayloadStore {
    status: Option<RobotStatus>,
    info: Option<GeneralInfo>,
    /// Previous availability, so connection errors are logged once per
    /// transition instead of once per refresh.
    was_available: bool,
    last_updated: Option<DateTime<Utc>>,
}

/// Static device metadata assembled from the general-info payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Cloud serial number, the stable device identifier.
    pub serial: String,
    /// Display name of the robot.
    pub name: String,
    /// Device manufacturer (the battery vendor in the cloud payload).
    pub manufacturer: Option<String>,
    /// Model name.
    pub model: Option<String>,
    /// Firmware version.
    pub firmware: Option<String>,
}

/// One cloud-connected vacuum robot.
///
/// Generic over the [`RobotClient`] implementation, like a protocol seam:
/// production code wraps the vendor client, tests script a fake.
#[derive(Debug)]
pub struct Robot<C: RobotClient> {
    client: C,
    name: String,
    serial: String,
    store: RwLock<PayloadStore>,
    snapshot_tx: watch::Sender<RobotSnapshot>,
}

impl<C: RobotClient> Robot<C> {
    /// Creates a robot handle from a client and identity.
    pub fn new(client: C, name: impl Into<String>, serial: impl Into<String>) -> Self {
        let (snapshot_tx, _) = watch::channel(RobotSnapshot::unavailable());
        Self {
            client,
            name: name.into(),
            serial: serial.into(),
            store: RwLock::new(PayloadStore::default()),
            snapshot_tx,
        }
    }

    /// Creates a robot handle from stored configuration.
    pub fn from_config(client: C, config: &RobotConfig) -> Self {
        Self::new(client, config.name.clone(), config.serial.clone())
    }

    /// Returns the robot's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the robot's cloud serial number.
    #[must_use]
    pub fn serial(&self) -> &str {
        &self.serial
    }

    // ========== Refresh ==========

    /// Refreshes the stored payloads from the cloud.
    ///
    /// A failed status fetch marks the robot unavailable and is logged once
    /// per availability transition; the general-info payload is fetched only
    /// until it succeeds once and its failure is never fatal. The resulting
    /// snapshot is published to all [`Robot::watch_state`] subscribers.
    pub async fn refresh(&self) {
        debug!(robot = %self.name, "running status refresh");

        match self.client.fetch_status().await {
            Ok(status) => {
                let mut store = self.store.write();
                store.status = Some(status);
                store.was_available = true;
                store.last_updated = Some(Utc::now());
            }
            Err(err) => {
                let mut store = self.store.write();
                if store.was_available {
                    error!(robot = %self.name, %err, "robot connection lost");
                }
                store.status = None;
                store.was_available = false;
            }
        }

        let needs_info = self.store.read().info.is_none();
        if needs_info {
            match self.client.fetch_general_info().await {
                Ok(info) => self.store.write().info = Some(info),
                Err(err) => {
                    warn!(robot = %self.name, %err, "couldn't fetch robot information");
                }
            }
        }

        self.snapshot_tx.send_replace(self.snapshot());
    }

    /// Computes the current derived snapshot from the stored payload.
    #[must_use]
    pub fn snapshot(&self) -> RobotSnapshot {
        let store = self.store.read();
        RobotSnapshot::derive(store.status.as_ref(), store.last_updated)
    }

    /// Subscribes to snapshot updates published by [`Robot::refresh`].
    #[must_use]
    pub fn watch_state(&self) -> watch::Receiver<RobotSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Assembles the static device metadata.
    ///
    /// Fields from the general-info payload stay `None` until that payload
    /// has been fetched successfully once.
    #[must_use]
    pub fn device_info(&self) -> DeviceInfo {
        let store = self.store.read();
        let info = store.info.as_ref();
        DeviceInfo {
            serial: self.serial.clone(),
            name: self.name.clone(),
            manufacturer: info
                .and_then(|i| i.battery.as_ref())
                .and_then(|b| b.vendor.clone()),
            model: info.and_then(|i| i.model.clone()),
            firmware: info.and_then(|i| i.firmware.clone()),
        }
    }

    // ========== Commands ==========

    /// Starts cleaning, or resumes when paused.
    ///
    /// A robot that is neither idle, docked nor paused ignores the request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] if the command cannot be delivered.
    pub async fn start(&self) -> Result<()> {
        match self.snapshot().state {
            Some(LifecycleState::Idle | LifecycleState::Docked) => {
                self.client.start_cleaning().await?;
            }
            Some(LifecycleState::Paused) => {
                self.client.resume_cleaning().await?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Pauses the current cleaning run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] if the command cannot be delivered.
    pub async fn pause(&self) -> Result<()> {
        self.client.pause_cleaning().await?;
        Ok(())
    }

    /// Resumes a paused cleaning run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] if the command cannot be delivered.
    pub async fn resume(&self) -> Result<()> {
        self.client.resume_cleaning().await?;
        Ok(())
    }

    /// Stops the current cleaning run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] if the command cannot be delivered.
    pub async fn stop(&self) -> Result<()> {
        self.client.stop_cleaning().await?;
        Ok(())
    }

    /// Sends the robot back to its dock.
    ///
    /// A robot that is currently cleaning is paused first. The pause and the
    /// dock command are independent best-effort calls: a failed pause is
    /// logged and the dock command is still attempted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] if the dock command cannot be
    /// delivered.
    pub async fn return_to_base(&self) -> Result<()> {
        if self.snapshot().state == Some(LifecycleState::Cleaning) {
            if let Err(err) = self.client.pause_cleaning().await {
                warn!(robot = %self.name, %err, "pause before docking failed");
            }
        }
        self.client.send_to_base().await?;
        Ok(())
    }

    /// Makes the robot emit a sound so it can be found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] if the command cannot be delivered.
    pub async fn locate(&self) -> Result<()> {
        self.client.locate().await?;
        Ok(())
    }

    /// Starts a spot cleaning run around the current position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] if the command cannot be delivered.
    pub async fn clean_spot(&self) -> Result<()> {
        self.client.start_spot_cleaning().await?;
        Ok(())
    }

    /// Enables the robot's cleaning schedule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] if the command cannot be delivered.
    pub async fn enable_schedule(&self) -> Result<()> {
        self.client.enable_schedule().await?;
        Ok(())
    }

    /// Disables the robot's cleaning schedule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] if the command cannot be delivered.
    pub async fn disable_schedule(&self) -> Result<()> {
        self.client.disable_schedule().await?;
        Ok(())
    }

    /// Starts a parameterized cleaning run, optionally restricted to a named
    /// zone on a named persistent map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cleaning`] when a target name matches nothing; the
    /// error enumerates the valid candidates and the clean command is not
    /// issued. Returns [`Error::Communication`] if a listing or the command
    /// itself cannot be delivered.
    pub async fn custom_cleaning(
        &self,
        mode: CleaningMode,
        navigation: NavigationMode,
        category: CleaningCategory,
        target: Option<ZoneTarget>,
    ) -> Result<()> {
        let mut request = CustomCleaning {
            mode,
            navigation,
            category,
            boundary_id: None,
            map_id: None,
        };

        if let Some(target) = &target {
            let (map, boundary) = self.resolve_zone(target).await?;
            request.map_id = Some(map.id);
            request.boundary_id = Some(boundary.id);
        }

        self.client.start_custom_cleaning(request).await?;
        Ok(())
    }

    /// Resolves a zone target to concrete map and boundary identifiers by
    /// substring match on display names.
    async fn resolve_zone(&self, target: &ZoneTarget) -> Result<(RobotMap, MapBoundary)> {
        let maps = self.client.list_maps().await?;
        if maps.is_empty() {
            return Err(CleaningError::NoMaps.into());
        }

        let map = maps
            .iter()
            .find(|m| m.name.contains(&target.map))
            .cloned()
            .ok_or_else(|| {
                Error::from(CleaningError::UnknownMap {
                    requested: target.map.clone(),
                    available: maps.iter().map(|m| m.name.clone()).collect(),
                })
            })?;

        let zones = self.client.list_zones(&map.id).await?;
        let boundary = zones
            .iter()
            .find(|z| z.name.contains(&target.zone))
            .cloned()
            .ok_or_else(|| {
                Error::from(CleaningError::UnknownZone {
                    requested: target.zone.clone(),
                    map: map.name.clone(),
                    available: zones.iter().map(|z| z.name.clone()).collect(),
                })
            })?;

        Ok((map, boundary))
    }
}
