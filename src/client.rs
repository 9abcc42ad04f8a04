// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The vendor-client capability interface and its wire types.
//!
//! `botvac_lib` deliberately does not ship a cloud protocol client; the
//! vendor's authentication flow and HTTP session handling live behind the
//! [`RobotClient`] trait. A host implements the trait once (or wraps an
//! existing client crate) and everything else in this library works against
//! it.
//!
//! Every wire field is optional: the cloud payload is trusted but never
//! assumed complete, and a missing field degrades the derived state instead
//! of failing deserialization.

use serde::{Deserialize, Serialize};

use crate::error::CommunicationError;
use crate::types::{
    ActionCode, CleaningCategory, CleaningMode, NavigationMode, StateCode,
};

/// Capability interface to the vendor cloud for one robot.
///
/// All methods report failure through the single [`CommunicationError`] kind;
/// the library does not distinguish transport, auth and cloud-side failures
/// in its handling policies.
#[allow(async_fn_in_trait)]
pub trait RobotClient {
    /// Fetches the current robot status payload.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the cloud cannot be reached or
    /// rejects the request.
    async fn fetch_status(&self) -> Result<RobotStatus, CommunicationError>;

    /// Fetches static device metadata (model, firmware, battery vendor).
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the cloud cannot be reached or
    /// rejects the request.
    async fn fetch_general_info(&self) -> Result<GeneralInfo, CommunicationError>;

    /// Starts a house cleaning run with the robot's default settings.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the command cannot be delivered.
    async fn start_cleaning(&self) -> Result<(), CommunicationError>;

    /// Starts a cleaning run with explicit parameters, optionally restricted
    /// to a boundary on a persistent map.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the command cannot be delivered.
    async fn start_custom_cleaning(
        &self,
        request: CustomCleaning,
    ) -> Result<(), CommunicationError>;

    /// Resumes a paused cleaning run.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the command cannot be delivered.
    async fn resume_cleaning(&self) -> Result<(), CommunicationError>;

    /// Pauses the current cleaning run.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the command cannot be delivered.
    async fn pause_cleaning(&self) -> Result<(), CommunicationError>;

    /// Stops the current cleaning run.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the command cannot be delivered.
    async fn stop_cleaning(&self) -> Result<(), CommunicationError>;

    /// Sends the robot back to its dock.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the command cannot be delivered.
    async fn send_to_base(&self) -> Result<(), CommunicationError>;

    /// Makes the robot emit a sound so it can be found.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the command cannot be delivered.
    async fn locate(&self) -> Result<(), CommunicationError>;

    /// Starts a spot cleaning run around the current position.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the command cannot be delivered.
    async fn start_spot_cleaning(&self) -> Result<(), CommunicationError>;

    /// Enables the robot's cleaning schedule.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the command cannot be delivered.
    async fn enable_schedule(&self) -> Result<(), CommunicationError>;

    /// Disables the robot's cleaning schedule.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the command cannot be delivered.
    async fn disable_schedule(&self) -> Result<(), CommunicationError>;

    /// Lists the robot's persistent maps.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the listing cannot be fetched.
    async fn list_maps(&self) -> Result<Vec<RobotMap>, CommunicationError>;

    /// Lists the boundaries (zones) defined on a persistent map.
    ///
    /// # Errors
    ///
    /// Returns `CommunicationError` if the listing cannot be fetched.
    async fn list_zones(&self, map_id: &str) -> Result<Vec<MapBoundary>, CommunicationError>;
}

/// Raw status payload for one robot.
///
/// # Examples
///
/// ```
/// use botvac_lib::client::RobotStatus;
/// use botvac_lib::types::{ActionCode, StateCode};
///
/// let json = r#"{"state":2,"action":1,"details":{"charge":73,"isDocked":false}}"#;
/// let status: RobotStatus = serde_json::from_str(json).unwrap();
///
/// assert_eq!(status.state, Some(StateCode::Busy));
/// assert_eq!(status.action, Some(ActionCode::HouseCleaning));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RobotStatus {
    /// Raw robot state code.
    #[serde(default)]
    pub state: Option<StateCode>,

    /// Current activity, reported alongside the state.
    #[serde(default)]
    pub action: Option<ActionCode>,

    /// Error code when the robot is in the error state (e.g.
    /// `ui_error_brush_stuck`).
    #[serde(default)]
    pub error: Option<String>,

    /// Alert code when the robot wants attention (e.g.
    /// `ui_alert_dust_bin_full`).
    #[serde(default)]
    pub alert: Option<String>,

    /// Battery and docking details.
    #[serde(default)]
    pub details: Option<StatusDetails>,

    /// Parameters of the current or last cleaning run.
    #[serde(default)]
    pub cleaning: Option<CleaningInfo>,
}

/// Battery and docking details from the status payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDetails {
    /// Robot is currently charging.
    #[serde(default)]
    pub is_charging: bool,

    /// Robot is sitting on the dock.
    #[serde(default)]
    pub is_docked: bool,

    /// The cleaning schedule is enabled.
    #[serde(default)]
    pub is_schedule_enabled: bool,

    /// Robot has located its dock at least once.
    #[serde(default)]
    pub dock_has_been_seen: bool,

    /// Battery charge percentage (0-100).
    #[serde(default)]
    pub charge: Option<u8>,
}

/// Parameters of the current or last cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningInfo {
    /// Cleaning category code.
    #[serde(default)]
    pub category: Option<i64>,

    /// Cleaning intensity.
    #[serde(default)]
    pub mode: Option<CleaningMode>,

    /// Cleaning modifier code.
    #[serde(default)]
    pub modifier: Option<i64>,

    /// Spot width in cm, for spot cleaning.
    #[serde(default)]
    pub spot_width: Option<i64>,

    /// Spot height in cm, for spot cleaning.
    #[serde(default)]
    pub spot_height: Option<i64>,

    /// The boundary being cleaned, when a zone cleaning is active.
    #[serde(default)]
    pub boundary: Option<BoundaryInfo>,
}

/// The boundary referenced by an active zone cleaning.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoundaryInfo {
    /// Boundary identifier.
    #[serde(default)]
    pub id: Option<String>,

    /// Display name of the boundary.
    #[serde(default)]
    pub name: Option<String>,
}

/// Static device metadata, fetched once and cached.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeneralInfo {
    /// Model name.
    #[serde(default)]
    pub model: Option<String>,

    /// Firmware version.
    #[serde(default)]
    pub firmware: Option<String>,

    /// Battery metadata.
    #[serde(default)]
    pub battery: Option<BatteryInfo>,
}

/// Battery metadata from the general-info payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BatteryInfo {
    /// Battery manufacturer, used as the device manufacturer.
    #[serde(default)]
    pub vendor: Option<String>,

    /// Battery health level.
    #[serde(default)]
    pub level: Option<u8>,
}

/// A persistent map stored on the robot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotMap {
    /// Map identifier.
    pub id: String,

    /// Display name of the map.
    #[serde(default)]
    pub name: String,
}

/// A named cleaning region defined on a persistent map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBoundary {
    /// Boundary identifier.
    pub id: String,

    /// Display name of the boundary.
    #[serde(default)]
    pub name: String,
}

/// A parameterized cleaning request.
///
/// Defaults match the robot firmware defaults: turbo suction, normal
/// navigation, map-restricted category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCleaning {
    /// Cleaning intensity.
    pub mode: CleaningMode,
    /// Navigation behavior.
    pub navigation: NavigationMode,
    /// Cleaning category.
    pub category: CleaningCategory,
    /// Boundary to restrict the run to, when zone cleaning.
    pub boundary_id: Option<String>,
    /// Persistent map the boundary belongs to.
    pub map_id: Option<String>,
}

impl Default for CustomCleaning {
    fn default() -> Self {
        Self {
            mode: CleaningMode::Turbo,
            navigation: NavigationMode::Normal,
            category: CleaningCategory::Map,
            boundary_id: None,
            map_id: None,
        }
    }
}
