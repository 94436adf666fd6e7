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

use crate::config::PsuCalibration;
use crate::constants::NUM_PSU_CHANNELS;
use crate::enums::{IntSwitch, Memory, PriorityMode};
use crate::identity::DeviceIdentity;

pub struct PsuSimulator {
    // Index of the PSU (1-6), one instrument per secondary power line.
    psu_index: usize,
    // Selected channel. The PMX power supplies have a single channel.
    channel: i32,
    // Setpoints. The readback follows the setpoint when the output is
    // enabled, the PSU is an ideal source in this model.
    current: f64,
    voltage: f64,
    // Protection limits.
    ocp: f64,
    ovp: f64,
    output_status: IntSwitch,
    priority_mode: PriorityMode,
    // Maximum voltage and current of the channel.
    _channel_info: (f64, f64),
    // Memory preset returned for the A/B/C recall slots.
    _memory_setting: (f64, f64, f64, f64),
    is_connected: bool,
    _identity: DeviceIdentity,
}

impl PsuSimulator {
    /// PSU simulator: one power supply channel feeding one secondary
    /// power line.
    ///
    /// # Arguments
    /// * `psu_index` - Index of the PSU (1-6).
    /// * `calibration` - PSU calibration.
    ///
    /// # Returns
    /// A new PSU simulator with the calibrated default setpoints and the
    /// output enabled.
    pub fn new(psu_index: usize, calibration: &PsuCalibration) -> Self {
        Self {
            psu_index,
            channel: NUM_PSU_CHANNELS,

            current: calibration.current,
            voltage: calibration.voltage,
            ocp: calibration.ocp,
            ovp: calibration.ovp,
            output_status: IntSwitch::On,
            priority_mode: PriorityMode::ConstantVoltage,

            _channel_info: calibration.channel_info,
            _memory_setting: calibration.memory_setting,

            is_connected: true,
            _identity: DeviceIdentity::new(
                "KIKUSUI",
                "PMX18-5",
                "AB123456",
                "IFC01.00.0016 IOC01.00.0015",
            ),
        }
    }

    /// Get the device identity.
    pub fn get_id(&self) -> &DeviceIdentity {
        &self._identity
    }

    /// Get the index of the PSU (1-6).
    pub fn get_psu_index(&self) -> usize {
        self.psu_index
    }

    pub fn set_channel(&mut self, channel: i32) {
        self.channel = channel;
    }

    pub fn get_channel(&self) -> i32 {
        self.channel
    }

    /// Get the number of channels of the instrument.
    pub fn get_channel_list(&self) -> i32 {
        NUM_PSU_CHANNELS
    }

    /// Get the maximum voltage in volt and the maximum current in ampere
    /// of the channel.
    pub fn get_channel_info(&self) -> (f64, f64) {
        self._channel_info
    }

    pub fn set_current(&mut self, current: f64) {
        self.current = current;
    }

    /// Get the configured current setpoint in ampere.
    pub fn get_current_config(&self) -> f64 {
        self.current
    }

    pub fn set_voltage(&mut self, voltage: f64) {
        self.voltage = voltage;
    }

    /// Get the configured voltage setpoint in volt.
    pub fn get_voltage_config(&self) -> f64 {
        self.voltage
    }

    pub fn set_ocp(&mut self, ocp: f64) {
        self.ocp = ocp;
    }

    pub fn get_ocp(&self) -> f64 {
        self.ocp
    }

    pub fn set_ovp(&mut self, ovp: f64) {
        self.ovp = ovp;
    }

    pub fn get_ovp(&self) -> f64 {
        self.ovp
    }

    pub fn set_output_status(&mut self, output_status: IntSwitch) {
        info!("PSU {} output: {:?}", self.psu_index, output_status);

        self.output_status = output_status;
    }

    pub fn get_output_status(&self) -> IntSwitch {
        self.output_status
    }

    /// Get the measured current in ampere. The setpoint when the output
    /// is enabled. Otherwise, 0.
    pub fn get_current(&self) -> f64 {
        if self.output_status.is_on() {
            self.current
        } else {
            0.0
        }
    }

    /// Get the measured voltage in volt. The setpoint when the output is
    /// enabled. Otherwise, 0.
    pub fn get_voltage(&self) -> f64 {
        if self.output_status.is_on() {
            self.voltage
        } else {
            0.0
        }
    }

    pub fn set_priority_mode(&mut self, priority_mode: PriorityMode) {
        self.priority_mode = priority_mode;
    }

    pub fn get_priority_mode(&self) -> PriorityMode {
        self.priority_mode
    }

    /// No memory preset model is implemented beyond the fixed calibrated
    /// setting.
    pub fn recall_memory(&mut self, _memory: Memory) {}

    pub fn save_memory(&mut self, _memory: Memory) {}

    pub fn conf_settings(&mut self, _conf: bool) {}

    pub fn get_memory_config(&self) -> bool {
        true
    }

    /// Get the memory preset: voltage, current, OVP, OCP.
    pub fn get_memory_setting(&self, _memory: Memory) -> (f64, f64, f64, f64) {
        self._memory_setting
    }

    pub fn reset(&mut self) {}

    /// Self test result. No fault model is implemented.
    pub fn test(&self) -> i32 {
        0
    }

    /// Head of the error queue. The instrument placeholder answer.
    pub fn get_error_info(&self) -> (i32, String) {
        (-221, String::from("Settings conflict"))
    }

    pub fn clear(&mut self) {}

    pub fn clear_alarms(&mut self) {}

    pub fn questionable_status_register(&self) -> i32 {
        0
    }

    pub fn connect(&mut self) {
        self.is_connected = true;
    }

    pub fn disconnect(&mut self) {
        self.is_connected = false;
    }

    /// Reconnect keeps the configuration untouched.
    pub fn reconnect(&mut self) {
        self.is_connected = true;
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    pub fn is_simulator(&self) -> bool {
        true
    }
}
