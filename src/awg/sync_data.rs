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

use std::str::FromStr;

use crate::awg::arb_data::ArbDataFile;

/// Synchronisation settings of one image cycle time, parsed from a
/// calibration string such as:
///
/// `SyncData//(A | 25.00 | ArbDataFile//(N_CCD_READ_25) | ArbDataFile//(SVM_SYNC_CCD_READ_25) | 0.006667)`
#[derive(Clone, PartialEq, Debug)]
pub struct SyncData {
    // Identifier of the image cycle time (A-F).
    pub id: String,
    // Image cycle time in second.
    pub image_cycle_time: f64,
    // Waveform profile for Clk_ccdread.
    pub ccdread_arb_data: ArbDataFile,
    // Waveform profile for Clk_heater.
    pub heater_arb_data: ArbDataFile,
    // Frequency in hertz.
    pub frequency: f64,
}

impl SyncData {
    /// Parse the synchronisation settings from the calibration string.
    ///
    /// # Arguments
    /// * `sync_data_string` - Calibration string.
    ///
    /// # Returns
    /// The synchronisation settings.
    pub fn new(sync_data_string: &str) -> Self {
        let fields = sync_data_string
            .strip_prefix("SyncData//(")
            .and_then(|s| s.strip_suffix(')'))
            .expect(&format!(
                "{sync_data_string} should have the form SyncData//(...)"
            ));

        let fields: Vec<&str> = fields.split(" | ").collect();
        assert!(fields.len() == 5);

        Self {
            id: String::from(fields[0]),
            image_cycle_time: Self::parse_float(fields[1]),
            ccdread_arb_data: Self::parse_arb_data_file(fields[2]),
            heater_arb_data: Self::parse_arb_data_file(fields[3]),
            frequency: Self::parse_float(fields[4]),
        }
    }

    fn parse_float(field: &str) -> f64 {
        field
            .parse()
            .expect(&format!("{field} should parse as f64"))
    }

    /// Parse a `ArbDataFile//(<name>)` field.
    ///
    /// # Arguments
    /// * `field` - Field to parse.
    ///
    /// # Returns
    /// The waveform profile.
    fn parse_arb_data_file(field: &str) -> ArbDataFile {
        let name = field
            .strip_prefix("ArbDataFile//(")
            .and_then(|s| s.strip_suffix(')'))
            .expect(&format!("{field} should have the form ArbDataFile//(...)"));

        ArbDataFile::from_str(name).expect(&format!("{name} should name a waveform profile"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use std::f64::EPSILON;
    use std::path::Path;

    use crate::config::AeuCalibration;
    use crate::constants::DEFAULT_CALIBRATION_FILE;

    #[test]
    fn test_new() {
        let sync_data = SyncData::new(
            "SyncData//(A | 25.00 | ArbDataFile//(N_CCD_READ_25) | \
             ArbDataFile//(SVM_SYNC_CCD_READ_25) | 0.006667)",
        );

        assert_eq!(sync_data.id, "A");
        assert_relative_eq!(sync_data.image_cycle_time, 25.0, epsilon = EPSILON);
        assert_eq!(sync_data.ccdread_arb_data, ArbDataFile::NCcdRead25);
        assert_eq!(sync_data.heater_arb_data, ArbDataFile::SvmSyncCcdRead25);
        assert_relative_eq!(sync_data.frequency, 0.006667, epsilon = EPSILON);
    }

    #[test]
    #[should_panic(expected = "should have the form SyncData//(...)")]
    fn test_new_malformed() {
        SyncData::new("Sync//(A)");
    }

    #[test]
    fn test_new_from_calibration() {
        let calibration = AeuCalibration::new(Path::new(DEFAULT_CALIBRATION_FILE));

        // All of the shipped calibration strings parse.
        for (identifier, string) in calibration
            .awg
            .n_cam_sync_data
            .iter()
            .chain(calibration.awg.f_cam_sync_data.iter())
        {
            let sync_data = SyncData::new(string);

            assert_eq!(&sync_data.id, identifier);
        }

        let sync_data = SyncData::new(&calibration.awg.n_cam_sync_data["D"]);

        assert_relative_eq!(sync_data.image_cycle_time, 43.75, epsilon = EPSILON);
        assert_eq!(sync_data.ccdread_arb_data, ArbDataFile::NCcdRead4375);
        assert_eq!(sync_data.heater_arb_data, ArbDataFile::SvmSyncCcdRead4375);
    }
}
