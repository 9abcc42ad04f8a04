// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `botvac_lib` library.
//!
//! There is exactly one error kind a [`RobotClient`](crate::RobotClient)
//! implementation may report: [`CommunicationError`], covering all
//! transport, authentication and cloud-side failures. Everything else the
//! library can fail with is local, currently the map/zone name resolution
//! errors in [`CleaningError`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Talking to the robot cloud failed.
    #[error("communication error: {0}")]
    Communication(#[from] CommunicationError),

    /// A custom cleaning request could not be resolved locally.
    #[error("cleaning error: {0}")]
    Cleaning(#[from] CleaningError),
}

/// Failures reported by a [`RobotClient`](crate::RobotClient).
///
/// The refresh path degrades the robot to unavailable on any of these; the
/// command path treats them as a logged no-op. Neither distinguishes between
/// the variants, they exist so client implementations can report what
/// actually happened.
#[derive(Debug, Error)]
pub enum CommunicationError {
    /// Connection to the cloud endpoint failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The cloud rejected the credentials for this robot.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The cloud answered but the response was not what the client expected.
    #[error("unexpected cloud response: {0}")]
    Payload(String),

    /// The cloud reported a failure result for the request.
    #[error("cloud rejected request: {0}")]
    Rejected(String),
}

impl From<serde_json::Error> for CommunicationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err.to_string())
    }
}

/// Local failures while resolving a custom cleaning request.
///
/// These are user-facing: the messages enumerate the valid candidate names so
/// a host can surface them directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CleaningError {
    /// The requested map name matched none of the robot's persistent maps.
    #[error("map '{requested}' was not found, available maps: {}", available.join(", "))]
    UnknownMap {
        /// The name the user asked for.
        requested: String,
        /// Display names of all persistent maps on the robot.
        available: Vec<String>,
    },

    /// The requested zone name matched no boundary on the resolved map.
    #[error("zone '{requested}' was not found on map '{map}', available zones: {}", available.join(", "))]
    UnknownZone {
        /// The name the user asked for.
        requested: String,
        /// Display name of the map the zones were listed for.
        map: String,
        /// Display names of all boundaries on that map.
        available: Vec<String>,
    },

    /// The robot has no persistent maps at all.
    #[error("robot has no persistent maps")]
    NoMaps,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
