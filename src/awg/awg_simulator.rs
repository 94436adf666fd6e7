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

use crate::awg::arb_data::{ArbDataFile, ArbDataStore};
use crate::config::AwgCalibration;
use crate::constants::{NUM_ARB_SLOTS, NUM_AWG_CHANNELS};
use crate::enums::{ArbSlotId, CounterSource, CounterType, Switch, Waveform};
use crate::identity::DeviceIdentity;

/// One ARB waveform memory slot.
#[derive(Clone, PartialEq, Debug)]
pub struct ArbSlot {
    pub name: String,
    pub interpolation: Switch,
    pub sample_count: usize,
    // Encoded binary block as sent to the instrument. Empty until data
    // is loaded.
    pub payload: Vec<u8>,
}

impl ArbSlot {
    fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            interpolation: Switch::Off,
            sample_count: 0,
            payload: Vec::new(),
        }
    }
}

pub struct AwgSimulator {
    // Index of the AWG (1-2). AWG1 generates Clk_50MHz and Clk_ccdread,
    // AWG2 generates the SVM clocks.
    awg_index: usize,
    // Selected channel (1-2), the context for the per-channel setters
    // and getters below.
    channel: usize,
    waveform_type: [Waveform; NUM_AWG_CHANNELS],
    output_load: [f64; NUM_AWG_CHANNELS],
    amplitude: [f64; NUM_AWG_CHANNELS],
    dc_offset: [f64; NUM_AWG_CHANNELS],
    duty_cycle: [f64; NUM_AWG_CHANNELS],
    frequency: [f64; NUM_AWG_CHANNELS],
    output_status: [Switch; NUM_AWG_CHANNELS],
    // ARB slot driving the channel output when the waveform type is Arb.
    arb: [ArbSlotId; NUM_AWG_CHANNELS],
    // Onboard ARB waveform memory.
    slots: [ArbSlot; NUM_ARB_SLOTS],
    counter_status: [Switch; NUM_AWG_CHANNELS],
    counter_source: [CounterSource; NUM_AWG_CHANNELS],
    counter_type: [CounterType; NUM_AWG_CHANNELS],
    store: ArbDataStore,
    is_connected: bool,
    _identity: DeviceIdentity,
}

impl AwgSimulator {
    /// AWG simulator: a two-channel arbitrary waveform generator with
    /// onboard ARB memory.
    ///
    /// # Arguments
    /// * `awg_index` - Index of the AWG (1-2).
    /// * `calibration` - AWG calibration with the channel defaults.
    /// * `store` - ARB data store that resolves the waveform profiles.
    ///
    /// # Returns
    /// A new AWG simulator with channel 1 selected, both outputs off and
    /// the four ARB slots named A-D, empty.
    pub fn new(awg_index: usize, calibration: &AwgCalibration, store: ArbDataStore) -> Self {
        Self {
            awg_index,
            channel: 1,

            waveform_type: [Waveform::Square; NUM_AWG_CHANNELS],
            output_load: [calibration.output_load; NUM_AWG_CHANNELS],
            amplitude: [calibration.amplitude; NUM_AWG_CHANNELS],
            dc_offset: [calibration.dc_offset; NUM_AWG_CHANNELS],
            duty_cycle: [calibration.duty_cycle; NUM_AWG_CHANNELS],
            frequency: [calibration.frequency; NUM_AWG_CHANNELS],
            output_status: [Switch::Off; NUM_AWG_CHANNELS],
            arb: [ArbSlotId::Arb1; NUM_AWG_CHANNELS],

            slots: [
                ArbSlot::new("A"),
                ArbSlot::new("B"),
                ArbSlot::new("C"),
                ArbSlot::new("D"),
            ],

            counter_status: [Switch::Off; NUM_AWG_CHANNELS],
            counter_source: [CounterSource::Ac; NUM_AWG_CHANNELS],
            counter_type: [CounterType::Frequency; NUM_AWG_CHANNELS],

            store,
            is_connected: true,
            _identity: DeviceIdentity::new(
                "THURLBY THANDAR",
                "TGF4162",
                "527758",
                "01.00 02.10 01.20",
            ),
        }
    }

    /// Get the device identity.
    pub fn get_id(&self) -> &DeviceIdentity {
        &self._identity
    }

    /// Get the index of the AWG (1-2).
    pub fn get_awg_index(&self) -> usize {
        self.awg_index
    }

    /// Select the active channel.
    ///
    /// # Arguments
    /// * `channel` - Channel (1-2).
    pub fn set_channel(&mut self, channel: usize) {
        assert!((1..=NUM_AWG_CHANNELS).contains(&channel));

        self.channel = channel;
    }

    pub fn get_channel(&self) -> usize {
        self.channel
    }

    // Index of the active channel into the per-channel arrays.
    fn index(&self) -> usize {
        self.channel - 1
    }

    pub fn set_waveform_type(&mut self, waveform_type: Waveform) {
        self.waveform_type[self.index()] = waveform_type;
    }

    pub fn get_waveform_type(&self) -> Waveform {
        self.waveform_type[self.index()]
    }

    /// Set the output load of the active channel.
    ///
    /// # Arguments
    /// * `load` - Output load in ohm.
    pub fn set_output_load(&mut self, load: f64) {
        self.output_load[self.index()] = load;
    }

    pub fn get_output_load(&self) -> f64 {
        self.output_load[self.index()]
    }

    /// Set the amplitude of the active channel.
    ///
    /// # Arguments
    /// * `amplitude` - Amplitude in volt peak-to-peak.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude[self.index()] = amplitude;
    }

    pub fn get_amplitude(&self) -> f64 {
        self.amplitude[self.index()]
    }

    pub fn set_dc_offset(&mut self, offset: f64) {
        self.dc_offset[self.index()] = offset;
    }

    pub fn get_dc_offset(&self) -> f64 {
        self.dc_offset[self.index()]
    }

    /// Set the duty cycle of the active channel.
    ///
    /// # Arguments
    /// * `duty_cycle` - Duty cycle in percent.
    pub fn set_duty_cycle(&mut self, duty_cycle: f64) {
        self.duty_cycle[self.index()] = duty_cycle;
    }

    pub fn get_duty_cycle(&self) -> f64 {
        self.duty_cycle[self.index()]
    }

    /// Set the frequency of the active channel.
    ///
    /// # Arguments
    /// * `frequency` - Frequency in hertz.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency[self.index()] = frequency;
    }

    pub fn get_frequency(&self) -> f64 {
        self.frequency[self.index()]
    }

    pub fn set_output_status(&mut self, output_status: Switch) {
        info!(
            "AWG {} channel {} output: {}",
            self.awg_index,
            self.channel,
            output_status.as_ref()
        );

        self.output_status[self.index()] = output_status;
    }

    pub fn get_output_status(&self) -> Switch {
        self.output_status[self.index()]
    }

    /// Select the ARB slot that drives the active channel when the
    /// waveform type is Arb.
    ///
    /// # Arguments
    /// * `arb` - ARB slot.
    pub fn set_arb_waveform(&mut self, arb: ArbSlotId) {
        self.arb[self.index()] = arb;
    }

    pub fn get_arb_waveform(&self) -> ArbSlotId {
        self.arb[self.index()]
    }

    /// Define an ARB slot: store the name and the interpolation and
    /// reset the sample count. The previously loaded payload is kept.
    ///
    /// # Arguments
    /// * `arb` - ARB slot.
    /// * `name` - Waveform name.
    /// * `interpolation` - Interpolation setting.
    pub fn define_arb_waveform(&mut self, arb: ArbSlotId, name: &str, interpolation: Switch) {
        let slot = &mut self.slots[arb as usize - 1];

        slot.name = String::from(name);
        slot.interpolation = interpolation;
        slot.sample_count = 0;
    }

    /// Load the waveform profile into an ARB slot: store the encoded
    /// payload and the sample count. The name and the interpolation are
    /// kept.
    ///
    /// # Arguments
    /// * `arb` - ARB slot.
    /// * `profile` - Waveform profile.
    pub fn load_arb_data(&mut self, arb: ArbSlotId, profile: ArbDataFile) {
        info!(
            "AWG {} {}: loading {}",
            self.awg_index,
            arb.as_ref(),
            profile.as_ref()
        );

        let data = self.store.load(profile);

        let slot = &mut self.slots[arb as usize - 1];
        slot.sample_count = data.len();
        slot.payload = data.encode();
    }

    /// Get the payload of an ARB slot.
    ///
    /// # Arguments
    /// * `arb` - ARB slot.
    ///
    /// # Returns
    /// The encoded payload. Empty if nothing was loaded.
    pub fn get_arb_data(&self, arb: ArbSlotId) -> &[u8] {
        &self.slots[arb as usize - 1].payload
    }

    /// Get the definition of an ARB slot.
    ///
    /// # Arguments
    /// * `arb` - ARB slot.
    ///
    /// # Returns
    /// (name, interpolation, sample count)
    pub fn get_arb_def(&self, arb: ArbSlotId) -> (&str, Switch, usize) {
        let slot = &self.slots[arb as usize - 1];

        (&slot.name, slot.interpolation, slot.sample_count)
    }

    pub fn set_counter_status(&mut self, counter_status: Switch) {
        self.counter_status[self.index()] = counter_status;
    }

    pub fn get_counter_status(&self) -> Switch {
        self.counter_status[self.index()]
    }

    pub fn set_counter_source(&mut self, counter_source: CounterSource) {
        self.counter_source[self.index()] = counter_source;
    }

    pub fn get_counter_source(&self) -> CounterSource {
        self.counter_source[self.index()]
    }

    pub fn set_counter_type(&mut self, counter_type: CounterType) {
        self.counter_type[self.index()] = counter_type;
    }

    pub fn get_counter_type(&self) -> CounterType {
        self.counter_type[self.index()]
    }

    /// No event counting model is implemented, the counter always reads
    /// a single count.
    pub fn get_counter_value(&self) -> f64 {
        1.0
    }

    /// Align the phase of the two channels.
    pub fn align(&mut self) {}

    pub fn reset(&mut self) {}

    pub fn clear_status(&mut self) {}

    /// No fault model is implemented.
    pub fn execution_error_register(&self) -> i32 {
        0
    }

    pub fn query_error_register(&self) -> i32 {
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
