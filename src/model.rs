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

use log::{debug, info};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::awg::arb_data::ArbDataStore;
use crate::awg::awg_simulator::AwgSimulator;
use crate::config::AeuCalibration;
use crate::constants::{NUM_AWG, NUM_PSU};
use crate::crio::crio_simulator::CrioSimulator;
use crate::psu::psu_simulator::PsuSimulator;

/// The full AEU bench: one cRIO, six PSUs and two AWGs. The instruments
/// are independent, this struct only wires them to the same calibration
/// and drives the demo loop.
pub struct AeuModel {
    pub calibration: AeuCalibration,
    pub crio: CrioSimulator,
    pub psus: Vec<PsuSimulator>,
    pub awgs: Vec<AwgSimulator>,
    // Flag to stop the application.
    pub stop: Arc<AtomicBool>,
}

impl AeuModel {
    /// AEU model.
    ///
    /// # Arguments
    /// * `calibration_file` - Path to the calibration file.
    /// * `arb_data_dir` - Path to the folder with the `.arb` files.
    ///
    /// # Returns
    /// A new AEU model.
    pub fn new(calibration_file: &Path, arb_data_dir: &Path) -> Self {
        let calibration = AeuCalibration::new(calibration_file);

        info!("AEU calibration: {}.", calibration.filename);

        let crio = CrioSimulator::new(&calibration.crio);

        let psus = (1..=NUM_PSU)
            .map(|psu_index| PsuSimulator::new(psu_index, &calibration.psu))
            .collect();

        let awgs = (1..=NUM_AWG)
            .map(|awg_index| {
                AwgSimulator::new(awg_index, &calibration.awg, ArbDataStore::new(arb_data_dir))
            })
            .collect();

        Self {
            calibration,
            crio,
            psus,
            awgs,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Connect all the instruments.
    pub fn connect(&mut self) {
        self.crio.connect();

        for psu in self.psus.iter_mut() {
            psu.connect();
        }

        for awg in self.awgs.iter_mut() {
            awg.connect();
        }
    }

    /// Disconnect all the instruments.
    pub fn disconnect(&mut self) {
        self.crio.disconnect();

        for psu in self.psus.iter_mut() {
            psu.disconnect();
        }

        for awg in self.awgs.iter_mut() {
            awg.disconnect();
        }
    }

    /// Log one round of telemetry.
    pub fn step(&self) {
        debug!("cRIO data: {}.", self.crio.get_data());

        for psu in self.psus.iter() {
            debug!(
                "PSU {}: {:.4} V, {:.4} A.",
                psu.get_psu_index(),
                psu.get_voltage(),
                psu.get_current()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::Ordering;

    use crate::constants::{DEFAULT_ARB_DATA_DIR, DEFAULT_CALIBRATION_FILE};
    use crate::enums::IntSwitch;

    fn create_model() -> AeuModel {
        AeuModel::new(
            Path::new(DEFAULT_CALIBRATION_FILE),
            Path::new(DEFAULT_ARB_DATA_DIR),
        )
    }

    #[test]
    fn test_new() {
        let model = create_model();

        // The calibration is parsed once and kept on the model.
        assert_eq!(model.calibration.filename, DEFAULT_CALIBRATION_FILE);
        assert_eq!(model.calibration.awg.n_cam_sync_data.len(), 5);

        assert_eq!(model.psus.len(), NUM_PSU);
        assert_eq!(model.awgs.len(), NUM_AWG);
        assert!(!model.stop.load(Ordering::Relaxed));

        assert_eq!(model.psus[0].get_psu_index(), 1);
        assert_eq!(model.psus[5].get_psu_index(), 6);
        assert_eq!(model.awgs[1].get_awg_index(), 2);
    }

    #[test]
    fn test_connect_and_disconnect() {
        let mut model = create_model();

        model.connect();

        assert!(model.crio.is_connected());
        assert!(model.psus.iter().all(|psu| psu.is_connected()));
        assert!(model.awgs.iter().all(|awg| awg.is_connected()));

        model.disconnect();

        assert!(!model.crio.is_connected());
        assert!(model.psus.iter().all(|psu| !psu.is_connected()));
        assert!(model.awgs.iter().all(|awg| !awg.is_connected()));
    }

    #[test]
    fn test_step() {
        let mut model = create_model();
        model.crio.set_n_cam_secondary_power_status(IntSwitch::On);

        // Only logs, nothing to assert beyond not panicking.
        model.step();
    }
}
