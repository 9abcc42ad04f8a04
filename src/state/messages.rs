// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Human-readable messages for cloud alert and error codes.
//!
//! Codes the tables do not know are shown verbatim, so new firmware codes
//! still surface to the user instead of disappearing.

/// Resolves an alert code to a display message, falling back to the raw code.
#[must_use]
pub fn alert_message(code: &str) -> &str {
    match code {
        "ui_alert_dust_bin_full" | "dustbin_full" => "Please empty dust bin",
        "ui_alert_recovering_location" => "Returning to start",
        "ui_alert_battery_chargebasecommlost" => "Lost connection to charge base",
        "ui_alert_busy_charging" => "Busy charging",
        "ui_alert_charging_base" => "Base charging",
        "ui_alert_charging_power" => "Charging power",
        "ui_alert_connect_chargebase" => "Connect charge base",
        "ui_alert_info_thank_you" => "Thank you",
        "ui_alert_invalid" => "Invalid check robot",
        "ui_alert_old_error" => "Old error",
        "ui_alert_swupdate_fail" => "Update failed",
        "ui_alert_return_to_base" => "Returning to base",
        "ui_alert_return_to_start" => "Returning to start",
        "ui_alert_return_to_charge_base" => "Returning to charge base",
        "ui_alert_clean_completed_to_start" => "Cleaning completed",
        "maintenance_alert" => "Maintenance alert",
        "clean_completed_to_start" => "Cleaning completed",
        "nav_floorplan_not_created" => "No floorplan found",
        "nav_floorplan_load_fail" => "Failed to load floorplan",
        "nav_floorplan_localization_fail" => "Failed to load floorplan",
        "clean_incomplete_to_start" => "Cleaning incomplete",
        "log_copied" => "Logs copied",
        other => other,
    }
}

/// Resolves an error code to a display message, falling back to the raw code.
#[must_use]
pub fn error_message(code: &str) -> &str {
    match code {
        "ui_error_brush_stuck" => "Brush stuck",
        "ui_error_brush_overloaded" => "Brush overloaded",
        "ui_error_bumper_stuck" => "Bumper stuck",
        "ui_error_blower_overloaded" => "Blower overloaded",
        "ui_error_battery_overtemp" => "Battery overheated",
        "ui_error_battery_undertemp" => "Battery too cold",
        "ui_error_battery_critical"
        | "ui_error_battery_battundervoltlithiumsafety"
        | "ui_error_battery_invalidsensor"
        | "ui_error_battery_lithiumadapterfailure"
        | "ui_error_battery_mismatch"
        | "ui_error_battery_nothermistor"
        | "ui_error_battery_overvolt"
        | "ui_error_battery_undercurrent"
        | "ui_error_battery_undervolt" => "Replace battery",
        "ui_error_battery_unplugged" | "ui_error_check_battery_switch" => "Check battery",
        "ui_error_corrupt_scb" => "Call customer service, corrupt board",
        "ui_error_deck_debris" => "Deck debris",
        "ui_error_dflt_app" => "Check app",
        "ui_error_disconnect_chrg_cable" => "Disconnected charge cable",
        "ui_error_disconnect_usb_cable" => "Disconnected USB cable",
        "ui_error_dust_bin_missing" => "Dust bin missing",
        "ui_error_dust_bin_full" => "Please empty dust bin",
        "ui_error_dust_bin_emptied" => "Dust bin emptied",
        "ui_error_hardware_failure" => "Hardware failure",
        "ui_error_ldrop_stuck" | "ui_error_rdrop_stuck" => "Clear my path",
        "ui_error_lds_jammed" => "Laser jammed",
        "ui_error_lds_bad_packets" | "ui_error_lds_missed_packets" => "Check laser",
        "ui_error_lds_disconnected" => "Laser disconnected",
        "ui_error_lwheel_stuck" => "Left wheel stuck",
        "ui_error_rwheel_stuck" => "Right wheel stuck",
        "ui_error_navigation_backdrop_frontbump"
        | "ui_error_navigation_backdrop_leftbump"
        | "ui_error_navigation_backdrop_wheelextended"
        | "ui_error_navigation_noprogress"
        | "ui_error_navigation_origin_unclean"
        | "ui_error_navigation_pathproblems"
        | "ui_error_navigation_pinkycommsfail"
        | "ui_error_navigation_falling"
        | "ui_error_navigation_noexitstartarea" => "Clear my path",
        "ui_error_picked_up" => "Picked up",
        "ui_error_qa_fail" => "Check robot",
        "ui_error_reconnect_failed" => "Reconnect failed",
        "ui_error_stuck" => "Stuck!",
        "ui_error_vacuum_slip" => "Vacuum slipping",
        "ui_error_warning" => "Warning",
        "batt_base_connect_fail" => "Battery failed to connect to base",
        "batt_base_no_power" => "Battery base has no power",
        "batt_low" => "Battery low",
        "batt_on_base" => "Battery on base",
        "clean_tilt_on_start" => "Clean the tilt on start",
        "dustbin_full" => "Please empty dust bin",
        "dustbin_missing" => "Dust bin missing",
        "gen_picked_up" => "Picked up",
        "hw_fail" => "Hardware failure",
        "hw_tof_sensor_sensor" => "Hardware sensor disconnected",
        "lds_bad_packets" => "Laser reporting bad packets",
        "lds_deck_debris" => "Laser has debris",
        "lds_disconnected" => "Laser disconnected",
        "lds_jammed" => "Laser jammed",
        "lds_missed_packets" => "Laser missed packets",
        "maint_brush_stuck" => "Brush stuck",
        "maint_bumper_stuck" => "Bumper stuck",
        "maint_customer_support_qa" => "Contact customer support",
        "maint_vacuum_stall" => "Vacuum stalled",
        "maint_wheel_stuck" => "Wheel stuck",
        "nav_robot_falling" => "Clear my path",
        "nav_no_path" => "No path found",
        "nav_path_problem" => "Problem with path",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_error_code_is_mapped() {
        assert_eq!(error_message("ui_error_brush_stuck"), "Brush stuck");
        assert_eq!(error_message("ui_error_lwheel_stuck"), "Left wheel stuck");
    }

    #[test]
    fn unknown_error_code_falls_back_to_raw() {
        assert_eq!(
            error_message("ui_error_new_in_future_firmware"),
            "ui_error_new_in_future_firmware"
        );
    }

    #[test]
    fn known_alert_code_is_mapped() {
        assert_eq!(alert_message("ui_alert_dust_bin_full"), "Please empty dust bin");
        assert_eq!(alert_message("dustbin_full"), "Please empty dust bin");
    }

    #[test]
    fn unknown_alert_code_falls_back_to_raw() {
        assert_eq!(alert_message("some_future_alert"), "some_future_alert");
    }
}
