// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Derivation of the normalized robot state from a raw status payload.
//!
//! This is the state-adaptation core of the library: a handful of derived
//! fields computed eagerly from the last payload the cloud returned. When no
//! payload is stored the robot is unavailable and every derived field is
//! `None`; derivation never panics on a sparse payload.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::RobotStatus;
use crate::state::messages::{alert_message, error_message};
use crate::types::{ActionCode, CleaningMode, LifecycleState, StateCode};

/// Normalized, derived view of one robot.
///
/// # Examples
///
/// ```
/// use botvac_lib::client::RobotStatus;
/// use botvac_lib::state::RobotSnapshot;
/// use botvac_lib::types::LifecycleState;
///
/// let json = r#"{"state":1,"details":{"isDocked":true,"charge":88}}"#;
/// let status: RobotStatus = serde_json::from_str(json).unwrap();
/// let snapshot = RobotSnapshot::derive(Some(&status), None);
///
/// assert!(snapshot.available);
/// assert_eq!(snapshot.state, Some(LifecycleState::Docked));
/// assert_eq!(snapshot.status.as_deref(), Some("Docked"));
/// assert_eq!(snapshot.battery_level, Some(88));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RobotSnapshot {
    /// A status payload is currently stored for the robot.
    pub available: bool,

    /// Robot is sitting on the dock. `None` when unavailable.
    pub docked: Option<bool>,

    /// Robot is charging. `None` when unavailable.
    pub charging: Option<bool>,

    /// Coarse lifecycle state. `None` when unavailable.
    pub state: Option<LifecycleState>,

    /// Human-readable alert message, if the robot raised one.
    pub alert: Option<String>,

    /// Composed human-readable status text.
    pub status: Option<String>,

    /// Battery charge percentage. `None` when unavailable.
    pub battery_level: Option<u8>,

    /// The cleaning schedule is enabled. `None` when unavailable.
    pub schedule_enabled: Option<bool>,

    /// When the stored payload was last refreshed successfully.
    pub last_updated: Option<DateTime<Utc>>,
}

impl RobotSnapshot {
    /// The snapshot of a robot with no stored payload.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Derives the normalized state from the stored payload, if any.
    #[must_use]
    pub fn derive(status: Option<&RobotStatus>, last_updated: Option<DateTime<Utc>>) -> Self {
        let Some(status) = status else {
            return Self::unavailable();
        };

        let docked = is_docked(status);
        let charging = is_charging(status);
        let state = lifecycle(status, docked, charging);
        let alert = status
            .alert
            .as_deref()
            .map(|code| alert_message(code).to_string());
        let status_text = compose_status(status, state, docked, charging, alert.as_deref());

        Self {
            available: true,
            docked: Some(docked),
            charging: Some(charging),
            state: Some(state),
            alert,
            status: status_text,
            battery_level: status.details.as_ref().and_then(|d| d.charge),
            schedule_enabled: status.details.as_ref().map(|d| d.is_schedule_enabled),
            last_updated,
        }
    }
}

/// Docked means idle on the dock; a busy robot driving over the dock is not
/// considered docked.
fn is_docked(status: &RobotStatus) -> bool {
    status.state == Some(StateCode::Idle)
        && status.details.as_ref().is_some_and(|d| d.is_docked)
}

fn is_charging(status: &RobotStatus) -> bool {
    status.state == Some(StateCode::Idle)
        && status.details.as_ref().is_some_and(|d| d.is_charging)
}

fn lifecycle(status: &RobotStatus, docked: bool, charging: bool) -> LifecycleState {
    if charging || docked {
        return LifecycleState::Docked;
    }
    match status.state {
        Some(StateCode::Idle) => LifecycleState::Idle,
        Some(StateCode::Busy) => {
            if status.action == Some(ActionCode::Docking) {
                LifecycleState::Cleaning
            } else {
                LifecycleState::Returning
            }
        }
        Some(StateCode::Paused) => LifecycleState::Paused,
        Some(StateCode::Error) => LifecycleState::Error,
        _ => LifecycleState::Unknown,
    }
}

fn compose_status(
    status: &RobotStatus,
    state: LifecycleState,
    docked: bool,
    charging: bool,
    alert: Option<&str>,
) -> Option<String> {
    match state {
        LifecycleState::Error => status
            .error
            .as_deref()
            .map(|code| error_message(code).to_string()),
        _ if alert.is_some() => alert.map(ToString::to_string),
        LifecycleState::Docked => {
            if charging {
                Some("Charging".to_string())
            } else if docked {
                Some("Docked".to_string())
            } else {
                None
            }
        }
        LifecycleState::Idle => Some("Stopped".to_string()),
        LifecycleState::Cleaning => cleaning_status(status),
        LifecycleState::Paused => Some("Paused".to_string()),
        _ => None,
    }
}

/// Joins the non-empty parts: cleaning mode, current action, and the active
/// boundary's display name.
fn cleaning_status(status: &RobotStatus) -> Option<String> {
    let mut items: Vec<&str> = Vec::new();

    if let Some(label) = status
        .cleaning
        .as_ref()
        .and_then(|c| c.mode)
        .and_then(CleaningMode::label)
    {
        items.push(label);
    }
    if let Some(label) = status.action.and_then(ActionCode::label) {
        items.push(label);
    }
    if let Some(name) = status
        .cleaning
        .as_ref()
        .and_then(|c| c.boundary.as_ref())
        .and_then(|b| b.name.as_deref())
        && !name.is_empty()
    {
        items.push(name);
    }

    if items.is_empty() {
        None
    } else {
        Some(items.join(" "))
    }
}
