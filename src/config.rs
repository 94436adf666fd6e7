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

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::constants::NUM_POWER_LINES;
use crate::crio::power_line_bank::LineValues;
use crate::utility::{get_parameter, get_parameter_array, get_parameter_table};

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct CrioCalibration {
    // Nominal current in ampere while the camera is powered on.
    pub n_cam_current: LineValues,
    pub f_cam_current: LineValues,
    // Nominal voltage in volt while the camera is powered on.
    pub n_cam_voltage: LineValues,
    pub f_cam_voltage: LineValues,
    // Default over-current protection thresholds in ampere.
    pub n_cam_ocp: LineValues,
    pub f_cam_ocp: LineValues,
    // Default over-voltage protection thresholds in volt.
    pub n_cam_ovp: LineValues,
    pub f_cam_ovp: LineValues,
    // Default under-voltage protection thresholds in volt.
    pub n_cam_uvp: LineValues,
    pub f_cam_uvp: LineValues,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct PsuCalibration {
    // Maximum voltage in volt and maximum current in ampere of the
    // channel.
    pub channel_info: (f64, f64),
    // Default current setpoint in ampere.
    pub current: f64,
    // Default voltage setpoint in volt.
    pub voltage: f64,
    // Default over-current protection limit in ampere.
    pub ocp: f64,
    // Default over-voltage protection limit in volt.
    pub ovp: f64,
    // Memory preset: voltage, current, OVP, OCP.
    pub memory_setting: (f64, f64, f64, f64),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct AwgCalibration {
    // Default output load in ohm per channel.
    pub output_load: f64,
    // Default amplitude in volt peak-to-peak per channel.
    pub amplitude: f64,
    // Default DC offset in volt per channel.
    pub dc_offset: f64,
    // Default duty cycle in percent per channel.
    pub duty_cycle: f64,
    // Default frequency in hertz per channel.
    pub frequency: f64,
    // Sync data strings for the N-CAM image cycle times, keyed by the
    // identifier (A-E).
    pub n_cam_sync_data: HashMap<String, String>,
    // Sync data string for the fixed F-CAM image cycle time, keyed by the
    // identifier (F).
    pub f_cam_sync_data: HashMap<String, String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct AeuCalibration {
    // Calibration filename.
    pub filename: String,
    pub crio: CrioCalibration,
    pub psu: PsuCalibration,
    pub awg: AwgCalibration,
}

impl AeuCalibration {
    /// Load the AEU calibration.
    ///
    /// # Arguments
    /// * `filepath` - The path to the calibration file.
    ///
    /// # Returns
    /// A new calibration object.
    pub fn new(filepath: &Path) -> Self {
        Self {
            filename: String::from(filepath.to_str().expect(&format!(
                "Should be able to convert {:?} to a string",
                filepath
            ))),
            crio: Self::read_crio(filepath),
            psu: Self::read_psu(filepath),
            awg: Self::read_awg(filepath),
        }
    }

    /// Read the cRIO calibration from the file.
    ///
    /// # Arguments
    /// * `filepath` - The path to the calibration file.
    ///
    /// # Returns
    /// The cRIO calibration.
    fn read_crio(filepath: &Path) -> CrioCalibration {
        CrioCalibration {
            n_cam_current: Self::read_line_values(filepath, "crio.n_cam_current"),
            f_cam_current: Self::read_line_values(filepath, "crio.f_cam_current"),
            n_cam_voltage: Self::read_line_values(filepath, "crio.n_cam_voltage"),
            f_cam_voltage: Self::read_line_values(filepath, "crio.f_cam_voltage"),
            n_cam_ocp: Self::read_line_values(filepath, "crio.n_cam_ocp"),
            f_cam_ocp: Self::read_line_values(filepath, "crio.f_cam_ocp"),
            n_cam_ovp: Self::read_line_values(filepath, "crio.n_cam_ovp"),
            f_cam_ovp: Self::read_line_values(filepath, "crio.f_cam_ovp"),
            n_cam_uvp: Self::read_line_values(filepath, "crio.n_cam_uvp"),
            f_cam_uvp: Self::read_line_values(filepath, "crio.f_cam_uvp"),
        }
    }

    /// Read the six power line values from the file.
    ///
    /// # Arguments
    /// * `filepath` - The path to the calibration file.
    /// * `key` - Key of the array. The order is CCD, CLK, AN1, AN2, AN3,
    /// DIG.
    ///
    /// # Returns
    /// The power line values.
    fn read_line_values(filepath: &Path, key: &str) -> LineValues {
        let values: Vec<f64> = get_parameter_array(filepath, key);
        assert!(values.len() == NUM_POWER_LINES);

        LineValues::from_iterator(values.iter().copied())
    }

    /// Read the PSU calibration from the file.
    ///
    /// # Arguments
    /// * `filepath` - The path to the calibration file.
    ///
    /// # Returns
    /// The PSU calibration.
    fn read_psu(filepath: &Path) -> PsuCalibration {
        let channel_info: Vec<f64> = get_parameter_array(filepath, "psu.channel_info");
        assert!(channel_info.len() == 2);

        let memory_setting: Vec<f64> = get_parameter_array(filepath, "psu.memory_setting");
        assert!(memory_setting.len() == 4);

        PsuCalibration {
            channel_info: (channel_info[0], channel_info[1]),
            current: get_parameter(filepath, "psu.current"),
            voltage: get_parameter(filepath, "psu.voltage"),
            ocp: get_parameter(filepath, "psu.ocp"),
            ovp: get_parameter(filepath, "psu.ovp"),
            memory_setting: (
                memory_setting[0],
                memory_setting[1],
                memory_setting[2],
                memory_setting[3],
            ),
        }
    }

    /// Read the AWG calibration from the file.
    ///
    /// # Arguments
    /// * `filepath` - The path to the calibration file.
    ///
    /// # Returns
    /// The AWG calibration.
    fn read_awg(filepath: &Path) -> AwgCalibration {
        AwgCalibration {
            output_load: get_parameter(filepath, "awg.output_load"),
            amplitude: get_parameter(filepath, "awg.amplitude"),
            dc_offset: get_parameter(filepath, "awg.dc_offset"),
            duty_cycle: get_parameter(filepath, "awg.duty_cycle"),
            frequency: get_parameter(filepath, "awg.frequency"),
            n_cam_sync_data: Self::read_sync_data(filepath, "awg.n_cam_sync_data"),
            f_cam_sync_data: Self::read_sync_data(filepath, "awg.f_cam_sync_data"),
        }
    }

    /// Read a sync data table from the file. The config crate lowercases
    /// the table keys, the identifiers are uppercase (A-F).
    ///
    /// # Arguments
    /// * `filepath` - The path to the calibration file.
    /// * `key` - Key of the table.
    ///
    /// # Returns
    /// Map from the identifier to the sync data string.
    fn read_sync_data(filepath: &Path, key: &str) -> HashMap<String, String> {
        get_parameter_table(filepath, key)
            .into_iter()
            .map(|(identifier, string)| (identifier.to_uppercase(), string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use std::f64::EPSILON;

    use crate::constants::DEFAULT_CALIBRATION_FILE;

    fn create_calibration() -> AeuCalibration {
        AeuCalibration::new(Path::new(DEFAULT_CALIBRATION_FILE))
    }

    #[test]
    fn test_new() {
        let calibration = create_calibration();

        assert_eq!(calibration.filename, DEFAULT_CALIBRATION_FILE);
    }

    #[test]
    fn test_read_crio() {
        let crio = create_calibration().crio;

        assert_relative_eq!(crio.n_cam_current[0], 0.105, epsilon = EPSILON);
        assert_relative_eq!(crio.n_cam_voltage[4], -6.65, epsilon = EPSILON);
        assert_relative_eq!(crio.f_cam_current[5], 2.379, epsilon = EPSILON);
        assert_relative_eq!(crio.f_cam_ovp[0], 38.0, epsilon = EPSILON);
        assert_relative_eq!(crio.n_cam_uvp[1], 15.7, epsilon = EPSILON);
    }

    #[test]
    fn test_read_psu() {
        let psu = create_calibration().psu;

        assert_relative_eq!(psu.channel_info.0, 35.0, epsilon = EPSILON);
        assert_relative_eq!(psu.channel_info.1, 1.0, epsilon = EPSILON);
        assert_relative_eq!(psu.current, 2.1, epsilon = EPSILON);
        assert_relative_eq!(psu.voltage, 32.5, epsilon = EPSILON);
        assert_relative_eq!(psu.ocp, 5.0, epsilon = EPSILON);
        assert_relative_eq!(psu.ovp, 13.0, epsilon = EPSILON);
        assert_relative_eq!(psu.memory_setting.0, 10.0, epsilon = EPSILON);
    }

    #[test]
    fn test_read_awg() {
        let awg = create_calibration().awg;

        assert_relative_eq!(awg.output_load, 50.0, epsilon = EPSILON);
        assert_relative_eq!(awg.frequency, 0.006667, epsilon = EPSILON);

        assert_eq!(awg.n_cam_sync_data.len(), 5);
        assert_eq!(awg.f_cam_sync_data.len(), 1);
        assert!(awg.n_cam_sync_data["B"].contains("N_CCD_READ_31_25"));
        assert!(awg.f_cam_sync_data["F"].contains("F_CCD_READ"));
    }
}
