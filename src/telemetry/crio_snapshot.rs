// This file is part of the AEU simulator.
//
// Developed for the camera electrical ground-support equipment.
// See the COPYRIGHT file at the top-level directory of this distribution
// for details of code ownership.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use serde_json::{json, Map, Value};

use crate::crio::power_line_bank::LineValues;
use crate::enums::{IntSwitch, OperatingMode};

// One snapshot of the cRIO state with two projections: the front-panel
// LED view and the full data view. Both are derived from the same struct
// so that the overlapping fields can not disagree.

#[derive(Clone)]
pub struct CrioSnapshot {
    // Operating mode.
    pub mode: OperatingMode,
    // Secondary power status of the cameras.
    pub n_cam_power: IntSwitch,
    pub f_cam_power: IntSwitch,
    // Gated current and voltage readings of the cameras.
    pub n_cam_current: LineValues,
    pub f_cam_current: LineValues,
    pub n_cam_voltage: LineValues,
    pub f_cam_voltage: LineValues,
    // Gated clock readbacks.
    pub n_cam_clocks: (IntSwitch, IntSwitch),
    pub f_cam_clocks: (IntSwitch, IntSwitch, IntSwitch, IntSwitch),
    pub svm_clocks: (IntSwitch, IntSwitch, IntSwitch, IntSwitch),
}

impl CrioSnapshot {
    /// Get the front-panel LED view.
    ///
    /// # Returns
    /// Map from the LED name to its value. The mode LEDs are booleans,
    /// the others are 0 or 1.
    pub fn led_status(&self) -> Value {
        // Any secondary power output enabled.
        let output = Self::any_on(&[self.n_cam_power, self.f_cam_power]);

        let (clk_n_50mhz, clk_n_ccdread) = self.n_cam_clocks;
        let (clk_f_50mhz_nom, clk_f_50mhz_red, clk_f_ccdread_nom, clk_f_ccdread_red) =
            self.f_cam_clocks;
        let (clk_svm_50mhz_nom, clk_svm_50mhz_red, clk_heater_nom, clk_heater_red) =
            self.svm_clocks;

        let clk_50mhz = Self::any_on(&[
            clk_n_50mhz,
            clk_f_50mhz_nom,
            clk_f_50mhz_red,
            clk_svm_50mhz_nom,
            clk_svm_50mhz_red,
        ]);
        let clk_ccdread =
            Self::any_on(&[clk_n_ccdread, clk_f_ccdread_nom, clk_f_ccdread_red]);
        let clk_heater = Self::any_on(&[clk_heater_nom, clk_heater_red]);

        json!({
            "Standby": self.mode == OperatingMode::Standby,
            "Selftest": self.mode == OperatingMode::Selftest,
            "FC_TVAC": self.mode == OperatingMode::FcTvac,
            "Alignment": self.mode == OperatingMode::Alignment,
            "N-CAM": self.n_cam_power as u8,
            "F-CAM": self.f_cam_power as u8,
            "V_CCD": output as u8,
            "V_CLK": output as u8,
            "V_AN1": output as u8,
            "V_AN2": output as u8,
            "V_AN3": output as u8,
            "V_DIG": output as u8,
            "S_voltage_oor": IntSwitch::Off as u8,
            "S_current_oor": IntSwitch::Off as u8,
            "Sync_gf": IntSwitch::Off as u8,
            "Clk_50MHz": clk_50mhz as u8,
            "Clk_ccdread": clk_ccdread as u8,
            "Clk_heater": clk_heater as u8,
            "Clk_F_FEE_N": clk_f_ccdread_nom as u8,
            "Clk_F_FEE_R": clk_f_ccdread_red as u8,
            "TestPort": IntSwitch::Off as u8,
        })
    }

    /// Get the full data view: the per-line current and voltage telemetry
    /// of both cameras plus all the LED fields.
    ///
    /// # Returns
    /// Map from the signal name to its value.
    pub fn data(&self) -> Value {
        let mut data = Map::new();

        Self::insert_line_values(
            &mut data,
            &["I_N_CCD", "I_N_CLK", "I_N_AN1", "I_N_AN2", "I_N_AN3", "I_N_DIG"],
            &self.n_cam_current,
        );
        Self::insert_line_values(
            &mut data,
            &["I_F_CCD", "I_F_CLK", "I_F_AN1", "I_F_AN2", "I_F_AN3", "I_F_DIG"],
            &self.f_cam_current,
        );
        Self::insert_line_values(
            &mut data,
            &["V_N_CCD", "V_N_CLK", "V_N_AN1", "V_N_AN2", "V_N_AN3", "V_N_DIG"],
            &self.n_cam_voltage,
        );
        Self::insert_line_values(
            &mut data,
            &["V_F_CCD", "V_F_CLK", "V_F_AN1", "V_F_AN2", "V_F_AN3", "V_F_DIG"],
            &self.f_cam_voltage,
        );

        if let Value::Object(led_status) = self.led_status() {
            for (name, value) in led_status {
                data.insert(name, value);
            }
        }

        Value::Object(data)
    }

    /// Check if any of the switches is on.
    ///
    /// # Arguments
    /// * `switches` - Switches to check.
    ///
    /// # Returns
    /// On if any of the switches is on. Otherwise, off.
    fn any_on(switches: &[IntSwitch]) -> IntSwitch {
        if switches.iter().any(|switch| switch.is_on()) {
            IntSwitch::On
        } else {
            IntSwitch::Off
        }
    }

    /// Insert the six power line values into the map.
    ///
    /// # Arguments
    /// * `map` - Map to insert into.
    /// * `names` - Signal names in the line order.
    /// * `values` - Line values.
    fn insert_line_values(map: &mut Map<String, Value>, names: &[&str], values: &LineValues) {
        for (name, value) in names.iter().zip(values.iter()) {
            map.insert(String::from(*name), json!(value));
        }
    }
}
