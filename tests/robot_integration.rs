// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the robot adapter against a scripted client.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use botvac_lib::client::{
    CustomCleaning, GeneralInfo, MapBoundary, RobotClient, RobotMap, RobotStatus,
};
use botvac_lib::types::{CleaningCategory, CleaningMode, LifecycleState, NavigationMode};
use botvac_lib::{
    BatterySensorEntity, CleaningError, CommunicationError, Error, Robot, RobotRegistry,
    ScheduleSwitchEntity, VacuumEntity, ZoneTarget,
};

// ============================================================================
// Scripted fake client
// ============================================================================

#[derive(Default)]
struct Shared {
    statuses: Mutex<VecDeque<Result<RobotStatus, CommunicationError>>>,
    infos: Mutex<VecDeque<Result<GeneralInfo, CommunicationError>>>,
    maps: Mutex<Vec<RobotMap>>,
    zones: Mutex<Vec<MapBoundary>>,
    calls: Mutex<Vec<String>>,
    fail_commands: Mutex<bool>,
    fail_pause: Mutex<bool>,
    last_custom: Mutex<Option<CustomCleaning>>,
}

#[derive(Clone, Default)]
struct FakeClient {
    inner: Arc<Shared>,
}

impl FakeClient {
    fn push_status(&self, result: Result<RobotStatus, CommunicationError>) {
        self.inner.statuses.lock().push_back(result);
    }

    fn push_status_json(&self, json: &str) {
        self.push_status(Ok(serde_json::from_str(json).unwrap()));
    }

    fn push_info(&self, result: Result<GeneralInfo, CommunicationError>) {
        self.inner.infos.lock().push_back(result);
    }

    fn set_maps(&self, maps: Vec<RobotMap>) {
        *self.inner.maps.lock() = maps;
    }

    fn set_zones(&self, zones: Vec<MapBoundary>) {
        *self.inner.zones.lock() = zones;
    }

    fn set_fail_commands(&self, fail: bool) {
        *self.inner.fail_commands.lock() = fail;
    }

    fn set_fail_pause(&self, fail: bool) {
        *self.inner.fail_pause.lock() = fail;
    }

    fn calls(&self) -> Vec<String> {
        self.inner.calls.lock().clone()
    }

    fn call_count(&self, name: &str) -> usize {
        self.inner
            .calls
            .lock()
            .iter()
            .filter(|c| c.as_str() == name)
            .count()
    }

    fn last_custom(&self) -> Option<CustomCleaning> {
        self.inner.last_custom.lock().clone()
    }

    fn record(&self, name: &str) {
        self.inner.calls.lock().push(name.to_string());
    }

    fn command_result(&self, name: &str) -> Result<(), CommunicationError> {
        self.record(name);
        if *self.inner.fail_commands.lock() {
            return Err(CommunicationError::ConnectionFailed("scripted".into()));
        }
        Ok(())
    }
}

impl RobotClient for FakeClient {
    async fn fetch_status(&self) -> Result<RobotStatus, CommunicationError> {
        self.record("fetch_status");
        self.inner
            .statuses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(RobotStatus::default()))
    }

    async fn fetch_general_info(&self) -> Result<GeneralInfo, CommunicationError> {
        self.record("fetch_general_info");
        self.inner
            .infos
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(GeneralInfo::default()))
    }

    async fn start_cleaning(&self) -> Result<(), CommunicationError> {
        self.command_result("start_cleaning")
    }

    async fn start_custom_cleaning(
        &self,
        request: CustomCleaning,
    ) -> Result<(), CommunicationError> {
        *self.inner.last_custom.lock() = Some(request);
        self.command_result("start_custom_cleaning")
    }

    async fn resume_cleaning(&self) -> Result<(), CommunicationError> {
        self.command_result("resume_cleaning")
    }

    async fn pause_cleaning(&self) -> Result<(), CommunicationError> {
        self.record("pause_cleaning");
        if *self.inner.fail_pause.lock() || *self.inner.fail_commands.lock() {
            return Err(CommunicationError::ConnectionFailed("scripted".into()));
        }
        Ok(())
    }

    async fn stop_cleaning(&self) -> Result<(), CommunicationError> {
        self.command_result("stop_cleaning")
    }

    async fn send_to_base(&self) -> Result<(), CommunicationError> {
        self.command_result("send_to_base")
    }

    async fn locate(&self) -> Result<(), CommunicationError> {
        self.command_result("locate")
    }

    async fn start_spot_cleaning(&self) -> Result<(), CommunicationError> {
        self.command_result("start_spot_cleaning")
    }

    async fn enable_schedule(&self) -> Result<(), CommunicationError> {
        self.command_result("enable_schedule")
    }

    async fn disable_schedule(&self) -> Result<(), CommunicationError> {
        self.command_result("disable_schedule")
    }

    async fn list_maps(&self) -> Result<Vec<RobotMap>, CommunicationError> {
        self.record("list_maps");
        Ok(self.inner.maps.lock().clone())
    }

    async fn list_zones(&self, map_id: &str) -> Result<Vec<MapBoundary>, CommunicationError> {
        self.record(&format!("list_zones:{map_id}"));
        Ok(self.inner.zones.lock().clone())
    }
}

fn robot(client: &FakeClient) -> Robot<FakeClient> {
    Robot::new(client.clone(), "Kobold", "VR3-1")
}

fn comm_error() -> CommunicationError {
    CommunicationError::ConnectionFailed("scripted".into())
}

// ============================================================================
// Refresh and availability
// ============================================================================

mod refresh {
    use super::*;

    #[tokio::test]
    async fn successful_refresh_makes_robot_available() {
        let client = FakeClient::default();
        client.push_status_json(r#"{"state":2,"action":1,"details":{"charge":50}}"#);
        let robot = robot(&client);

        robot.refresh().await;

        let snapshot = robot.snapshot();
        assert!(snapshot.available);
        assert_eq!(snapshot.state, Some(LifecycleState::Returning));
        assert_eq!(snapshot.battery_level, Some(50));
        assert!(snapshot.last_updated.is_some());
    }

    #[tokio::test]
    async fn failed_refresh_marks_robot_unavailable() {
        let client = FakeClient::default();
        client.push_status_json(r#"{"state":1,"details":{"isDocked":true}}"#);
        client.push_status(Err(comm_error()));
        let robot = robot(&client);

        robot.refresh().await;
        assert!(robot.snapshot().available);

        robot.refresh().await;
        let snapshot = robot.snapshot();
        assert!(!snapshot.available);
        assert!(snapshot.state.is_none());
        assert!(snapshot.battery_level.is_none());
        assert!(snapshot.status.is_none());
    }

    #[tokio::test]
    async fn robot_recovers_on_later_refresh() {
        let client = FakeClient::default();
        client.push_status(Err(comm_error()));
        client.push_status_json(r#"{"state":1,"details":{"isCharging":true}}"#);
        let robot = robot(&client);

        robot.refresh().await;
        assert!(!robot.snapshot().available);

        robot.refresh().await;
        let snapshot = robot.snapshot();
        assert!(snapshot.available);
        assert_eq!(snapshot.state, Some(LifecycleState::Docked));
        assert_eq!(snapshot.status.as_deref(), Some("Charging"));
    }

    #[tokio::test]
    async fn unchanged_payload_derives_identical_state() {
        let payload = r#"{"state":2,"action":4,"cleaning":{"mode":2}}"#;
        let client = FakeClient::default();
        client.push_status_json(payload);
        client.push_status_json(payload);
        let robot = robot(&client);

        robot.refresh().await;
        let first = robot.snapshot();
        robot.refresh().await;
        let second = robot.snapshot();

        assert_eq!(first.state, second.state);
        assert_eq!(first.status, second.status);
        assert_eq!(first.docked, second.docked);
        assert_eq!(first.charging, second.charging);
        assert_eq!(first.battery_level, second.battery_level);
        assert_eq!(first.schedule_enabled, second.schedule_enabled);
    }

    #[tokio::test]
    async fn general_info_is_fetched_only_once() {
        let client = FakeClient::default();
        client.push_info(Ok(serde_json::from_str(
            r#"{"model":"VR300","firmware":"4.5.3","battery":{"vendor":"Panasonic"}}"#,
        )
        .unwrap()));
        let robot = robot(&client);

        robot.refresh().await;
        robot.refresh().await;
        robot.refresh().await;

        assert_eq!(client.call_count("fetch_general_info"), 1);

        let info = robot.device_info();
        assert_eq!(info.serial, "VR3-1");
        assert_eq!(info.manufacturer.as_deref(), Some("Panasonic"));
        assert_eq!(info.model.as_deref(), Some("VR300"));
        assert_eq!(info.firmware.as_deref(), Some("4.5.3"));
    }

    #[tokio::test]
    async fn general_info_failure_is_retried_next_refresh() {
        let client = FakeClient::default();
        client.push_info(Err(comm_error()));
        client.push_info(Ok(GeneralInfo::default()));
        let robot = robot(&client);

        robot.refresh().await;
        assert!(robot.device_info().model.is_none());

        robot.refresh().await;
        robot.refresh().await;

        // Failed once, succeeded once, then cached.
        assert_eq!(client.call_count("fetch_general_info"), 2);
    }

    #[tokio::test]
    async fn refresh_publishes_to_watchers() {
        let client = FakeClient::default();
        client.push_status_json(r#"{"state":3}"#);
        let robot = robot(&client);
        let mut updates = robot.watch_state();

        assert!(!updates.borrow().available);

        robot.refresh().await;

        assert!(updates.has_changed().unwrap());
        let snapshot = updates.borrow_and_update().clone();
        assert!(snapshot.available);
        assert_eq!(snapshot.state, Some(LifecycleState::Paused));
    }
}

// ============================================================================
// Commands
// ============================================================================

mod commands {
    use super::*;

    #[tokio::test]
    async fn start_when_docked_starts_cleaning() {
        let client = FakeClient::default();
        client.push_status_json(r#"{"state":1,"details":{"isDocked":true}}"#);
        let robot = robot(&client);
        robot.refresh().await;

        robot.start().await.unwrap();

        assert_eq!(client.call_count("start_cleaning"), 1);
        assert_eq!(client.call_count("resume_cleaning"), 0);
    }

    #[tokio::test]
    async fn start_when_paused_resumes() {
        let client = FakeClient::default();
        client.push_status_json(r#"{"state":3}"#);
        let robot = robot(&client);
        robot.refresh().await;

        robot.start().await.unwrap();

        assert_eq!(client.call_count("start_cleaning"), 0);
        assert_eq!(client.call_count("resume_cleaning"), 1);
    }

    #[tokio::test]
    async fn start_while_already_cleaning_is_ignored() {
        let client = FakeClient::default();
        client.push_status_json(r#"{"state":2,"action":4}"#);
        let robot = robot(&client);
        robot.refresh().await;

        robot.start().await.unwrap();

        assert_eq!(client.call_count("start_cleaning"), 0);
        assert_eq!(client.call_count("resume_cleaning"), 0);
    }

    #[tokio::test]
    async fn return_to_base_pauses_first_while_cleaning() {
        let client = FakeClient::default();
        client.push_status_json(r#"{"state":2,"action":4}"#);
        let robot = robot(&client);
        robot.refresh().await;

        robot.return_to_base().await.unwrap();

        let calls = client.calls();
        let pause_pos = calls.iter().position(|c| c == "pause_cleaning").unwrap();
        let base_pos = calls.iter().position(|c| c == "send_to_base").unwrap();
        assert!(pause_pos < base_pos);
    }

    #[tokio::test]
    async fn return_to_base_skips_pause_when_not_cleaning() {
        let client = FakeClient::default();
        client.push_status_json(r#"{"state":1,"details":{"isDocked":false}}"#);
        let robot = robot(&client);
        robot.refresh().await;

        robot.return_to_base().await.unwrap();

        assert_eq!(client.call_count("pause_cleaning"), 0);
        assert_eq!(client.call_count("send_to_base"), 1);
    }

    #[tokio::test]
    async fn return_to_base_still_docks_when_pause_fails() {
        let client = FakeClient::default();
        client.push_status_json(r#"{"state":2,"action":4}"#);
        client.set_fail_pause(true);
        let robot = robot(&client);
        robot.refresh().await;

        robot.return_to_base().await.unwrap();

        assert_eq!(client.call_count("pause_cleaning"), 1);
        assert_eq!(client.call_count("send_to_base"), 1);
    }

    #[tokio::test]
    async fn command_failure_surfaces_as_communication_error() {
        let client = FakeClient::default();
        client.set_fail_commands(true);
        let robot = robot(&client);

        let result = robot.locate().await;
        assert!(matches!(result, Err(Error::Communication(_))));
    }
}

// ============================================================================
// Custom cleaning
// ============================================================================

mod custom_cleaning {
    use super::*;

    fn ground_floor_maps() -> Vec<RobotMap> {
        vec![
            RobotMap {
                id: "m-1".to_string(),
                name: "Ground Floor".to_string(),
            },
            RobotMap {
                id: "m-2".to_string(),
                name: "Upstairs".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn plain_request_issues_no_listings() {
        let client = FakeClient::default();
        let robot = robot(&client);

        robot
            .custom_cleaning(
                CleaningMode::Eco,
                NavigationMode::ExtraCare,
                CleaningCategory::House,
                None,
            )
            .await
            .unwrap();

        assert_eq!(client.call_count("list_maps"), 0);
        let request = client.last_custom().unwrap();
        assert_eq!(request.mode, CleaningMode::Eco);
        assert!(request.boundary_id.is_none());
        assert!(request.map_id.is_none());
    }

    #[tokio::test]
    async fn zone_target_resolves_by_substring() {
        let client = FakeClient::default();
        client.set_maps(ground_floor_maps());
        client.set_zones(vec![
            MapBoundary {
                id: "b-7".to_string(),
                name: "Kitchen floor".to_string(),
            },
            MapBoundary {
                id: "b-8".to_string(),
                name: "Hallway".to_string(),
            },
        ]);
        let robot = robot(&client);

        robot
            .custom_cleaning(
                CleaningMode::Turbo,
                NavigationMode::Normal,
                CleaningCategory::Map,
                Some(ZoneTarget {
                    map: "Ground".to_string(),
                    zone: "Kitchen".to_string(),
                }),
            )
            .await
            .unwrap();

        assert_eq!(client.call_count("list_zones:m-1"), 1);
        let request = client.last_custom().unwrap();
        assert_eq!(request.map_id.as_deref(), Some("m-1"));
        assert_eq!(request.boundary_id.as_deref(), Some("b-7"));
    }

    #[tokio::test]
    async fn unknown_map_aborts_and_names_candidates() {
        let client = FakeClient::default();
        client.set_maps(ground_floor_maps());
        let robot = robot(&client);

        let result = robot
            .custom_cleaning(
                CleaningMode::Turbo,
                NavigationMode::Normal,
                CleaningCategory::Map,
                Some(ZoneTarget {
                    map: "Attic".to_string(),
                    zone: "Kitchen".to_string(),
                }),
            )
            .await;

        let Err(Error::Cleaning(CleaningError::UnknownMap { requested, available })) = result
        else {
            panic!("expected UnknownMap error");
        };
        assert_eq!(requested, "Attic");
        assert_eq!(available, vec!["Ground Floor", "Upstairs"]);
        assert_eq!(client.call_count("start_custom_cleaning"), 0);
    }

    #[tokio::test]
    async fn unknown_zone_aborts_and_names_candidates() {
        let client = FakeClient::default();
        client.set_maps(ground_floor_maps());
        client.set_zones(vec![MapBoundary {
            id: "b-8".to_string(),
            name: "Hallway".to_string(),
        }]);
        let robot = robot(&client);

        let result = robot
            .custom_cleaning(
                CleaningMode::Turbo,
                NavigationMode::Normal,
                CleaningCategory::Map,
                Some(ZoneTarget {
                    map: "Ground".to_string(),
                    zone: "Garage".to_string(),
                }),
            )
            .await;

        let Err(Error::Cleaning(CleaningError::UnknownZone { requested, map, available })) =
            result
        else {
            panic!("expected UnknownZone error");
        };
        assert_eq!(requested, "Garage");
        assert_eq!(map, "Ground Floor");
        assert_eq!(available, vec!["Hallway"]);
        assert_eq!(client.call_count("start_custom_cleaning"), 0);
    }

    #[tokio::test]
    async fn no_maps_at_all_aborts() {
        let client = FakeClient::default();
        let robot = robot(&client);

        let result = robot
            .custom_cleaning(
                CleaningMode::Turbo,
                NavigationMode::Normal,
                CleaningCategory::Map,
                Some(ZoneTarget {
                    map: "Ground".to_string(),
                    zone: "Kitchen".to_string(),
                }),
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::Cleaning(CleaningError::NoMaps))
        ));
        assert_eq!(client.call_count("start_custom_cleaning"), 0);
    }
}

// ============================================================================
// Entities
// ============================================================================

mod entities {
    use super::*;

    #[tokio::test]
    async fn vacuum_entity_reflects_snapshot() {
        let client = FakeClient::default();
        client.push_status_json(
            r#"{"state":2,"action":4,"cleaning":{"mode":2},"details":{"charge":61}}"#,
        );
        let robot = Arc::new(robot(&client));
        robot.refresh().await;

        let vacuum = VacuumEntity::new(Arc::clone(&robot));
        assert_eq!(vacuum.name(), "Kobold");
        assert_eq!(vacuum.unique_id(), "VR3-1");
        assert!(vacuum.available());
        assert_eq!(vacuum.state(), Some(LifecycleState::Cleaning));
        assert_eq!(vacuum.status().as_deref(), Some("Turbo Docking"));
        assert_eq!(vacuum.battery_level(), Some(61));
    }

    #[tokio::test]
    async fn vacuum_entity_swallows_command_failures() {
        let client = FakeClient::default();
        client.set_fail_commands(true);
        let robot = Arc::new(robot(&client));

        let vacuum = VacuumEntity::new(Arc::clone(&robot));
        vacuum.pause().await;
        vacuum.stop().await;
        vacuum.locate().await;

        assert_eq!(client.call_count("pause_cleaning"), 1);
        assert_eq!(client.call_count("stop_cleaning"), 1);
        assert_eq!(client.call_count("locate"), 1);
    }

    #[tokio::test]
    async fn battery_sensor_reads_charge() {
        let client = FakeClient::default();
        client.push_status_json(r#"{"state":1,"details":{"charge":73,"isDocked":true}}"#);
        let robot = Arc::new(robot(&client));
        robot.refresh().await;

        let sensor = BatterySensorEntity::new(Arc::clone(&robot));
        assert_eq!(sensor.name(), "Kobold Battery");
        assert_eq!(sensor.unique_id(), "VR3-1_battery");
        assert_eq!(sensor.device_class(), "battery");
        assert_eq!(sensor.unit_of_measurement(), "%");
        assert!(sensor.available());
        assert_eq!(sensor.state(), Some(73));
    }

    #[tokio::test]
    async fn schedule_switch_toggles_and_refreshes() {
        let client = FakeClient::default();
        client.push_status_json(r#"{"state":1,"details":{"isScheduleEnabled":false}}"#);
        client.push_status_json(r#"{"state":1,"details":{"isScheduleEnabled":true}}"#);
        let robot = Arc::new(robot(&client));
        robot.refresh().await;

        let switch = ScheduleSwitchEntity::new(Arc::clone(&robot));
        assert_eq!(switch.name(), "Kobold Schedule");
        assert_eq!(switch.unique_id(), "VR3-1_schedule");
        assert!(!switch.is_on());

        switch.turn_on().await;

        assert_eq!(client.call_count("enable_schedule"), 1);
        // Toggling requests a fresh status so the new state is visible.
        assert_eq!(client.call_count("fetch_status"), 2);
        assert!(switch.is_on());
    }

    #[tokio::test]
    async fn schedule_switch_failure_skips_refresh() {
        let client = FakeClient::default();
        client.push_status_json(r#"{"state":1,"details":{"isScheduleEnabled":true}}"#);
        let robot = Arc::new(robot(&client));
        robot.refresh().await;

        client.set_fail_commands(true);
        let switch = ScheduleSwitchEntity::new(Arc::clone(&robot));
        switch.turn_off().await;

        assert_eq!(client.call_count("disable_schedule"), 1);
        assert_eq!(client.call_count("fetch_status"), 1);
        assert!(switch.is_on());
    }
}

// ============================================================================
// Registry
// ============================================================================

mod registry {
    use super::*;

    #[tokio::test]
    async fn registry_shares_one_adapter_per_serial() {
        let client = FakeClient::default();
        let registry = RobotRegistry::new();
        let robot = registry.add(Robot::new(client.clone(), "Kobold", "VR3-1"));

        assert_eq!(registry.len(), 1);
        let looked_up = registry.get("VR3-1").unwrap();
        assert!(Arc::ptr_eq(&robot, &looked_up));
        assert!(registry.get("other").is_none());
    }

    #[tokio::test]
    async fn refresh_all_visits_every_robot() {
        let first = FakeClient::default();
        let second = FakeClient::default();
        let registry = RobotRegistry::new();
        registry.add(Robot::new(first.clone(), "Kobold", "VR3-1"));
        registry.add(Robot::new(second.clone(), "Upstairs Kobold", "VR3-2"));

        registry.refresh_all().await;

        assert_eq!(first.call_count("fetch_status"), 1);
        assert_eq!(second.call_count("fetch_status"), 1);
    }

    #[tokio::test]
    async fn removed_robot_is_no_longer_refreshed() {
        let client = FakeClient::default();
        let registry = RobotRegistry::new();
        registry.add(Robot::new(client.clone(), "Kobold", "VR3-1"));

        registry.remove("VR3-1");
        registry.refresh_all().await;

        assert!(registry.is_empty());
        assert_eq!(client.call_count("fetch_status"), 0);
    }
}
