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

use nalgebra::SVector;

use crate::constants::NUM_POWER_LINES;
use crate::enums::{CurrentQuality, IntSwitch, VoltageQuality};

/// Values of the six secondary power lines of one camera. The order is:
/// CCD, CLK, AN1, AN2, AN3, DIG.
pub type LineValues = SVector<f64, NUM_POWER_LINES>;

#[derive(Clone)]
pub struct PowerLineBank {
    // Secondary power is on or not.
    pub power_status: IntSwitch,
    // Over-current protection thresholds in ampere.
    pub ocp: LineValues,
    // Over-voltage protection thresholds in volt.
    pub ovp: LineValues,
    // Under-voltage protection thresholds in volt.
    pub uvp: LineValues,
    // Nominal current in ampere while powered on.
    _nominal_current: LineValues,
    // Nominal voltage in volt while powered on.
    _nominal_voltage: LineValues,
}

impl PowerLineBank {
    /// Power line bank of one camera.
    ///
    /// # Arguments
    /// * `nominal_current` - Nominal current in ampere while powered on.
    /// * `nominal_voltage` - Nominal voltage in volt while powered on.
    /// * `ocp` - Default over-current protection thresholds in ampere.
    /// * `ovp` - Default over-voltage protection thresholds in volt.
    /// * `uvp` - Default under-voltage protection thresholds in volt.
    ///
    /// # Returns
    /// A new power line bank, powered off.
    pub fn new(
        nominal_current: LineValues,
        nominal_voltage: LineValues,
        ocp: LineValues,
        ovp: LineValues,
        uvp: LineValues,
    ) -> Self {
        Self {
            power_status: IntSwitch::Off,

            ocp,
            ovp,
            uvp,

            _nominal_current: nominal_current,
            _nominal_voltage: nominal_voltage,
        }
    }

    /// Get the measured current of the six power lines.
    ///
    /// # Returns
    /// Nominal current in ampere if the secondary power is on. Otherwise,
    /// all zeros.
    pub fn get_current(&self) -> LineValues {
        if self.power_status.is_on() {
            self._nominal_current
        } else {
            LineValues::zeros()
        }
    }

    /// Get the measured voltage of the six power lines.
    ///
    /// # Returns
    /// Nominal voltage in volt if the secondary power is on. Otherwise,
    /// all zeros.
    pub fn get_voltage(&self) -> LineValues {
        if self.power_status.is_on() {
            self._nominal_voltage
        } else {
            LineValues::zeros()
        }
    }

    /// Get the quality of the measured voltages with respect to the
    /// configured protections. The comparison is done on the magnitudes so
    /// that the negative AN3 line is treated the same way as the others. A
    /// threshold set exactly to the measured value is not a violation.
    ///
    /// # Returns
    /// Voltage quality of the six power lines.
    pub fn get_voltage_quality(&self) -> [VoltageQuality; NUM_POWER_LINES] {
        let voltage = self.get_voltage();

        let mut quality = [VoltageQuality::InsideRange; NUM_POWER_LINES];
        for index in 0..NUM_POWER_LINES {
            quality[index] =
                Self::evaluate_voltage(voltage[index], self.uvp[index], self.ovp[index]);
        }

        quality
    }

    /// Evaluate the quality of a single voltage.
    ///
    /// # Arguments
    /// * `voltage` - Measured voltage in volt.
    /// * `uvp` - Under-voltage protection threshold in volt.
    /// * `ovp` - Over-voltage protection threshold in volt.
    ///
    /// # Returns
    /// Voltage quality.
    fn evaluate_voltage(voltage: f64, uvp: f64, ovp: f64) -> VoltageQuality {
        if voltage.abs() < uvp.abs() {
            VoltageQuality::UvpDetected
        } else if voltage.abs() > ovp.abs() {
            VoltageQuality::OvpDetected
        } else {
            VoltageQuality::InsideRange
        }
    }

    /// Get the quality of the measured currents with respect to the
    /// configured protection. As for the voltages, the comparison is done
    /// on the magnitudes. There is no under-current case.
    ///
    /// # Returns
    /// Current quality of the six power lines.
    pub fn get_current_quality(&self) -> [CurrentQuality; NUM_POWER_LINES] {
        let current = self.get_current();

        let mut quality = [CurrentQuality::InsideRange; NUM_POWER_LINES];
        for index in 0..NUM_POWER_LINES {
            if current[index].abs() > self.ocp[index].abs() {
                quality[index] = CurrentQuality::OcpDetected;
            }
        }

        quality
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_power_line_bank() -> PowerLineBank {
        PowerLineBank::new(
            LineValues::from_row_slice(&[0.105, 0.208, 0.190, 0.058, -0.224, 0.553]),
            LineValues::from_row_slice(&[34.70, 16.05, 6.65, 6.65, -6.65, 4.55]),
            LineValues::from_row_slice(&[0.211, 0.295, 0.380, 0.116, -0.4469, 1.023]),
            LineValues::from_row_slice(&[39.0, 18.0, 7.5, 7.5, -7.5, 5.2]),
            LineValues::from_row_slice(&[34.0, 15.7, 6.5, 6.5, -6.5, 4.45]),
        )
    }

    #[test]
    fn test_get_current() {
        let mut bank = create_power_line_bank();

        // Powered off.
        assert_eq!(bank.get_current(), LineValues::zeros());

        // Powered on.
        bank.power_status = IntSwitch::On;

        let current = bank.get_current();

        assert_eq!(current[0], 0.105);
        assert_eq!(current[4], -0.224);

        // Powered off again.
        bank.power_status = IntSwitch::Off;

        assert_eq!(bank.get_current(), LineValues::zeros());
    }

    #[test]
    fn test_get_voltage() {
        let mut bank = create_power_line_bank();

        assert_eq!(bank.get_voltage(), LineValues::zeros());

        bank.power_status = IntSwitch::On;

        let voltage = bank.get_voltage();

        assert_eq!(voltage[0], 34.70);
        assert_eq!(voltage[4], -6.65);
    }

    #[test]
    fn test_get_voltage_quality() {
        let mut bank = create_power_line_bank();
        bank.power_status = IntSwitch::On;

        // Inside of range with the default protections.
        assert_eq!(
            bank.get_voltage_quality(),
            [VoltageQuality::InsideRange; NUM_POWER_LINES]
        );

        // A threshold equal to the measured value is not a violation.
        let voltage = bank.get_voltage();
        bank.ovp = voltage;
        bank.uvp = voltage;

        assert_eq!(
            bank.get_voltage_quality(),
            [VoltageQuality::InsideRange; NUM_POWER_LINES]
        );

        // OVP detected when the ceiling magnitude drops below the
        // measured magnitude. The sign of the threshold does not matter.
        bank.ovp = voltage.map(|value| value.signum() * (value.abs() - 1.0));

        assert_eq!(
            bank.get_voltage_quality(),
            [VoltageQuality::OvpDetected; NUM_POWER_LINES]
        );

        // UVP detected when the floor magnitude exceeds the measured
        // magnitude.
        bank.ovp = LineValues::from_element(100.0);
        bank.uvp = voltage.map(|value| value.signum() * (value.abs() + 1.0));

        assert_eq!(
            bank.get_voltage_quality(),
            [VoltageQuality::UvpDetected; NUM_POWER_LINES]
        );
    }

    #[test]
    fn test_get_current_quality() {
        let mut bank = create_power_line_bank();
        bank.power_status = IntSwitch::On;

        assert_eq!(
            bank.get_current_quality(),
            [CurrentQuality::InsideRange; NUM_POWER_LINES]
        );

        // A threshold equal to the measured value is not a violation.
        bank.ocp = bank.get_current();

        assert_eq!(
            bank.get_current_quality(),
            [CurrentQuality::InsideRange; NUM_POWER_LINES]
        );

        // OCP detected when the limit magnitude drops below the measured
        // magnitude.
        bank.ocp = bank.get_current() * 0.5;

        assert_eq!(
            bank.get_current_quality(),
            [CurrentQuality::OcpDetected; NUM_POWER_LINES]
        );
    }

    #[test]
    fn test_quality_while_powered_off() {
        let mut bank = create_power_line_bank();

        // With the power off the readings are zero, which the default UVP
        // floors flag as an under-voltage.
        assert_eq!(
            bank.get_voltage_quality(),
            [VoltageQuality::UvpDetected; NUM_POWER_LINES]
        );

        assert_eq!(
            bank.get_current_quality(),
            [CurrentQuality::InsideRange; NUM_POWER_LINES]
        );

        // Powering on restores the nominal readings.
        bank.power_status = IntSwitch::On;

        assert_eq!(
            bank.get_voltage_quality(),
            [VoltageQuality::InsideRange; NUM_POWER_LINES]
        );
    }
}
