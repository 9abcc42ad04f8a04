// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-robot configuration.

use serde::{Deserialize, Serialize};

/// Default cloud endpoint for Vorwerk robots.
pub const DEFAULT_ENDPOINT: &str = "https://nucleo.ksecosys.com:4443";

/// Configuration for one robot, as stored by the host.
///
/// # Examples
///
/// ```
/// use botvac_lib::config::RobotConfig;
///
/// let json = r#"{"name":"Kobold","serial":"VR3-123","secret":"0badc0de"}"#;
/// let config: RobotConfig = serde_json::from_str(json).unwrap();
///
/// assert_eq!(config.endpoint, botvac_lib::config::DEFAULT_ENDPOINT);
/// assert!(config.traits.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Display name of the robot.
    pub name: String,

    /// Cloud serial number, also the stable identifier for entities.
    pub serial: String,

    /// Per-robot shared secret used by the client implementation.
    pub secret: String,

    /// Cloud endpoint the robot is registered against.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Capability traits reported at registration (e.g. `maps`).
    #[serde(default)]
    pub traits: Vec<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
