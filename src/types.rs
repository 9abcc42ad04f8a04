// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for botvac robots.
//!
//! The cloud reports most enumerated values as small integers. Each wire code
//! gets a typed representation here with a lossless `Unknown` fallback, so a
//! firmware update that introduces a new code never breaks deserialization.
//!
//! # Types
//!
//! - [`LifecycleState`] - coarse operating mode exposed to the host
//! - [`StateCode`] - raw robot state (idle/busy/paused/error)
//! - [`ActionCode`] - what the robot is currently doing
//! - [`CleaningMode`], [`NavigationMode`], [`CleaningCategory`] - cleaning
//!   request parameters

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse operating mode of the vacuum as exposed to the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    /// Stopped somewhere, not on the dock.
    Idle,
    /// On the dock (charging or not).
    Docked,
    /// Actively cleaning.
    Cleaning,
    /// Driving back to the dock.
    Returning,
    /// Cleaning is paused.
    Paused,
    /// The robot reports an error condition.
    Error,
    /// The payload did not match any known combination.
    Unknown,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Docked => "docked",
            Self::Cleaning => "cleaning",
            Self::Returning => "returning",
            Self::Paused => "paused",
            Self::Error => "error",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Raw robot state code from the status payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum StateCode {
    /// State 0, reported by some firmwares before the first run.
    Invalid,
    /// State 1, stopped or docked.
    Idle,
    /// State 2, cleaning or driving.
    Busy,
    /// State 3, cleaning paused.
    Paused,
    /// State 4, error condition.
    Error,
    /// Any other code.
    Unknown(i64),
}

impl From<i64> for StateCode {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Invalid,
            1 => Self::Idle,
            2 => Self::Busy,
            3 => Self::Paused,
            4 => Self::Error,
            other => Self::Unknown(other),
        }
    }
}

/// Raw action code from the status payload, reported alongside the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum ActionCode {
    /// Action 0, no activity.
    Invalid,
    /// Action 1.
    HouseCleaning,
    /// Action 2.
    SpotCleaning,
    /// Action 3.
    ManualCleaning,
    /// Action 4.
    Docking,
    /// Action 5.
    UserMenuActive,
    /// Action 6.
    SuspendedCleaning,
    /// Action 7.
    Updating,
    /// Action 8.
    CopyingLogs,
    /// Action 9.
    RecoveringLocation,
    /// Action 10.
    IecTest,
    /// Action 11.
    MapCleaning,
    /// Action 12.
    ExploringMap,
    /// Action 13.
    AcquiringMapIds,
    /// Action 14.
    UploadingMap,
    /// Action 15.
    SuspendedExploration,
    /// Any other code.
    Unknown(i64),
}

impl From<i64> for ActionCode {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Invalid,
            1 => Self::HouseCleaning,
            2 => Self::SpotCleaning,
            3 => Self::ManualCleaning,
            4 => Self::Docking,
            5 => Self::UserMenuActive,
            6 => Self::SuspendedCleaning,
            7 => Self::Updating,
            8 => Self::CopyingLogs,
            9 => Self::RecoveringLocation,
            10 => Self::IecTest,
            11 => Self::MapCleaning,
            12 => Self::ExploringMap,
            13 => Self::AcquiringMapIds,
            14 => Self::UploadingMap,
            15 => Self::SuspendedExploration,
            other => Self::Unknown(other),
        }
    }
}

impl ActionCode {
    /// Human-readable label used when composing the status text.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Invalid | Self::Unknown(_) => None,
            Self::HouseCleaning => Some("House Cleaning"),
            Self::SpotCleaning => Some("Spot Cleaning"),
            Self::ManualCleaning => Some("Manual Cleaning"),
            Self::Docking => Some("Docking"),
            Self::UserMenuActive => Some("User Menu Active"),
            Self::SuspendedCleaning => Some("Suspended Cleaning"),
            Self::Updating => Some("Updating"),
            Self::CopyingLogs => Some("Copying Logs"),
            Self::RecoveringLocation => Some("Recovering Location"),
            Self::IecTest => Some("IEC Test"),
            Self::MapCleaning => Some("Map Cleaning"),
            Self::ExploringMap => Some("Exploring the Map"),
            Self::AcquiringMapIds => Some("Acquiring Map IDs"),
            Self::UploadingMap => Some("Uploading the Map"),
            Self::SuspendedExploration => Some("Suspended Exploration"),
        }
    }
}

/// Cleaning intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum CleaningMode {
    /// Mode 1, quieter and longer runtime.
    Eco,
    /// Mode 2, full suction.
    Turbo,
    /// Any other code.
    Unknown(i64),
}

impl From<i64> for CleaningMode {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Eco,
            2 => Self::Turbo,
            other => Self::Unknown(other),
        }
    }
}

impl CleaningMode {
    /// Wire code sent with a custom cleaning request.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Eco => 1,
            Self::Turbo => 2,
            Self::Unknown(code) => code,
        }
    }

    /// Human-readable label used when composing the status text.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Eco => Some("Eco"),
            Self::Turbo => Some("Turbo"),
            Self::Unknown(_) => None,
        }
    }
}

/// Navigation behavior for a cleaning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Mode 1, default navigation.
    Normal,
    /// Mode 2, slower around obstacles.
    ExtraCare,
    /// Mode 3, thorough coverage.
    Deep,
}

impl NavigationMode {
    /// Wire code sent with a custom cleaning request.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Normal => 1,
            Self::ExtraCare => 2,
            Self::Deep => 3,
        }
    }
}

/// What kind of cleaning run to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleaningCategory {
    /// Category 1, manual drive.
    Manual,
    /// Category 2, whole-house cleaning.
    House,
    /// Category 3, spot cleaning around the current position.
    Spot,
    /// Category 4, cleaning restricted to a persistent map.
    Map,
}

impl CleaningCategory {
    /// Wire code sent with a custom cleaning request.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Manual => 1,
            Self::House => 2,
            Self::Spot => 3,
            Self::Map => 4,
        }
    }
}
