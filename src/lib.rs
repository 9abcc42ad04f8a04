// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `botvac_lib` - A Rust library to observe and control botvac connected
//! vacuum robots.
//!
//! This library exposes a cloud-connected robotic vacuum as a set of
//! observable entities (vacuum, battery sensor, schedule switch) for
//! embedding in a home-automation host. It does not talk to the vendor cloud
//! itself: authentication, session handling and the wire protocol live
//! behind the [`RobotClient`] trait, which a host implements once.
//!
//! # What the library does
//!
//! - **State adaptation**: translates the raw status payload into a
//!   normalized [`RobotSnapshot`] with derived flags (docked, charging), a
//!   coarse [`LifecycleState`] and a human-readable status text
//! - **Availability tracking**: a failed refresh degrades the robot to
//!   unavailable (logged once per transition), a later refresh recovers it
//! - **Commands**: start/pause/stop/dock/locate/spot cleaning, schedule
//!   on/off, and zone cleaning with map/zone resolution by display name
//! - **Entities**: ready-made vacuum, battery sensor and schedule switch
//!   views over one shared robot adapter
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use botvac_lib::{Robot, RobotConfig, RobotRegistry, VacuumEntity};
//!
//! #[tokio::main]
//! async fn main() {
//!     // `NucleoClient` is your implementation of botvac_lib::RobotClient.
//!     let config: RobotConfig = serde_json::from_str(
//!         r#"{"name":"Kobold","serial":"VR3-123","secret":"0badc0de"}"#,
//!     )
//!     .unwrap();
//!     let client = NucleoClient::new(&config);
//!
//!     let registry = RobotRegistry::new();
//!     let robot = registry.add(Robot::from_config(client, &config));
//!
//!     let vacuum = VacuumEntity::new(Arc::clone(&robot));
//!
//!     // The host scheduler drives refreshes; entities read derived state.
//!     robot.refresh().await;
//!     if vacuum.available() {
//!         println!("{}: {:?}", vacuum.name(), vacuum.state());
//!     }
//! }
//! ```
//!
//! # Observing state
//!
//! Every refresh publishes the derived snapshot on a watch channel:
//!
//! ```ignore
//! let mut updates = robot.watch_state();
//! while updates.changed().await.is_ok() {
//!     let snapshot = updates.borrow().clone();
//!     println!("battery: {:?}", snapshot.battery_level);
//! }
//! ```

pub mod client;
pub mod config;
pub mod entity;
pub mod error;
mod registry;
mod robot;
pub mod state;
pub mod types;

pub use client::{
    BatteryInfo, BoundaryInfo, CleaningInfo, CustomCleaning, GeneralInfo, MapBoundary, RobotClient,
    RobotMap, RobotStatus, StatusDetails,
};
pub use config::RobotConfig;
pub use entity::{BatterySensorEntity, ScheduleSwitchEntity, VacuumEntity};
pub use error::{CleaningError, CommunicationError, Error, Result};
pub use registry::RobotRegistry;
pub use robot::{DeviceInfo, Robot, ZoneTarget};
pub use state::RobotSnapshot;
pub use types::{
    ActionCode, CleaningCategory, CleaningMode, LifecycleState, NavigationMode, StateCode,
};
