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

use log::info;
use signal_hook::{
    consts::{SIGINT, SIGTERM},
    flag::register,
};
use std::path::Path;
use std::sync::atomic::Ordering;
use std::thread::sleep;
use std::time::Duration;

use crate::awg::sync_data::SyncData;
use crate::enums::{ArbSlotId, IntSwitch, OperatingMode, Switch, Waveform};
use crate::model::AeuModel;

/// Run the application: bring up the N-CAM through the simulated bench
/// and log the telemetry periodically until SIGINT or SIGTERM.
///
/// # Arguments
/// * `calibration_file` - Path to the calibration file.
/// * `arb_data_dir` - Path to the folder with the `.arb` files.
/// * `period_millisecond` - Telemetry period in millisecond.
pub fn run(calibration_file: &Path, arb_data_dir: &Path, period_millisecond: u64) {
    let mut model = AeuModel::new(calibration_file, arb_data_dir);
    model.connect();

    power_up_n_cam(&mut model, "A");

    // Register the signals that stop the application
    for signal in [SIGTERM, SIGINT].iter() {
        let _ = register(*signal, model.stop.clone());
    }

    while !model.stop.load(Ordering::Relaxed) {
        model.step();

        sleep(Duration::from_millis(period_millisecond));
    }

    info!("Stopping the AEU simulator...");

    model.disconnect();
}

/// Power up the N-CAM: select the operating mode, configure AWG2 with
/// the synchronisation waveforms of the image cycle time, switch on the
/// secondary power and enable the clocks.
///
/// # Arguments
/// * `model` - AEU model.
/// * `image_cycle_time_id` - Identifier of the image cycle time (A-E).
pub fn power_up_n_cam(model: &mut AeuModel, image_cycle_time_id: &str) {
    let sync_data = SyncData::new(&model.calibration.awg.n_cam_sync_data[image_cycle_time_id]);

    info!(
        "Powering up the N-CAM with the image cycle time of {} s.",
        sync_data.image_cycle_time
    );

    model.crio.set_operating_mode(OperatingMode::FcTvac);

    // AWG2 generates Clk_ccdread on channel 1 and Clk_heater on channel
    // 2.
    let awg2 = &mut model.awgs[1];

    awg2.set_channel(1);
    awg2.set_waveform_type(Waveform::Arb);
    awg2.define_arb_waveform(
        ArbSlotId::Arb1,
        sync_data.ccdread_arb_data.as_ref(),
        Switch::Off,
    );
    awg2.load_arb_data(ArbSlotId::Arb1, sync_data.ccdread_arb_data);
    awg2.set_arb_waveform(ArbSlotId::Arb1);
    awg2.set_frequency(sync_data.frequency);
    awg2.set_output_status(Switch::On);

    awg2.set_channel(2);
    awg2.set_waveform_type(Waveform::Arb);
    awg2.define_arb_waveform(
        ArbSlotId::Arb2,
        sync_data.heater_arb_data.as_ref(),
        Switch::Off,
    );
    awg2.load_arb_data(ArbSlotId::Arb2, sync_data.heater_arb_data);
    awg2.set_arb_waveform(ArbSlotId::Arb2);
    awg2.set_frequency(sync_data.frequency);
    awg2.set_output_status(Switch::On);

    model
        .crio
        .set_n_cam_secondary_power_status(IntSwitch::On);
    model
        .crio
        .set_n_cam_clock_status(IntSwitch::On, IntSwitch::On);
    model.crio.set_svm_clock_status(
        IntSwitch::On,
        IntSwitch::Off,
        IntSwitch::On,
        IntSwitch::Off,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::constants::{DEFAULT_ARB_DATA_DIR, DEFAULT_CALIBRATION_FILE};
    use crate::enums::{CurrentQuality, VoltageQuality};

    #[test]
    fn test_power_up_n_cam() {
        let mut model = AeuModel::new(
            Path::new(DEFAULT_CALIBRATION_FILE),
            Path::new(DEFAULT_ARB_DATA_DIR),
        );

        power_up_n_cam(&mut model, "B");

        assert_eq!(model.crio.get_operating_mode(), OperatingMode::FcTvac);
        assert_eq!(
            model.crio.get_n_cam_secondary_power_status(),
            IntSwitch::On
        );
        assert_eq!(
            model.crio.get_n_cam_clock_status(),
            (IntSwitch::On, IntSwitch::On)
        );

        // The nominal readings sit inside of the calibrated protections.
        assert_eq!(
            model.crio.get_n_cam_voltage_quality(),
            [VoltageQuality::InsideRange; 6]
        );
        assert_eq!(
            model.crio.get_n_cam_current_quality(),
            [CurrentQuality::InsideRange; 6]
        );

        // AWG2 carries the 31.25 s waveforms.
        let awg2 = &model.awgs[1];

        assert_eq!(
            awg2.get_arb_def(ArbSlotId::Arb1),
            ("N_CCD_READ_31_25", Switch::Off, 1250)
        );
        assert_eq!(
            awg2.get_arb_def(ArbSlotId::Arb2),
            ("SVM_SYNC_CCD_READ_31_25", Switch::Off, 1250)
        );

        let led_status = model.crio.get_led_status();

        assert_eq!(led_status["FC_TVAC"], true);
        assert_eq!(led_status["N-CAM"], 1);
        assert_eq!(led_status["Clk_50MHz"], 1);
        assert_eq!(led_status["Clk_ccdread"], 1);
        assert_eq!(led_status["Clk_heater"], 1);
    }
}
