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

use crate::enums::IntSwitch;

// The clock registers keep the commanded bits even while the gating power
// bank is off. The readback is forced to all-off instead, so powering the
// camera back on restores the previously stored configuration.

/// Clock signals distributed to the N-CAM.
#[derive(Clone, Copy)]
pub struct NCamClocks {
    pub clk_50mhz: IntSwitch,
    pub clk_ccdread: IntSwitch,
}

/// Clock signals distributed to the F-CAM (nominal and redundant).
#[derive(Clone, Copy)]
pub struct FCamClocks {
    pub clk_50mhz_nom: IntSwitch,
    pub clk_50mhz_red: IntSwitch,
    pub clk_ccdread_nom: IntSwitch,
    pub clk_ccdread_red: IntSwitch,
}

/// Clock signals distributed to the SVM (nominal and redundant).
#[derive(Clone, Copy)]
pub struct SvmClocks {
    pub clk_50mhz_nom: IntSwitch,
    pub clk_50mhz_red: IntSwitch,
    pub clk_heater_nom: IntSwitch,
    pub clk_heater_red: IntSwitch,
}

impl NCamClocks {
    /// Create a new register with all clocks off.
    ///
    /// # Returns
    /// A new register.
    pub fn new() -> Self {
        Self {
            clk_50mhz: IntSwitch::Off,
            clk_ccdread: IntSwitch::Off,
        }
    }

    /// Read back the register.
    ///
    /// # Arguments
    /// * `is_gated` - All-off readback regardless of the stored bits.
    ///
    /// # Returns
    /// (clk_50mhz, clk_ccdread)
    pub fn read(&self, is_gated: bool) -> (IntSwitch, IntSwitch) {
        if is_gated {
            (IntSwitch::Off, IntSwitch::Off)
        } else {
            (self.clk_50mhz, self.clk_ccdread)
        }
    }
}

impl FCamClocks {
    /// Create a new register with all clocks off.
    ///
    /// # Returns
    /// A new register.
    pub fn new() -> Self {
        Self {
            clk_50mhz_nom: IntSwitch::Off,
            clk_50mhz_red: IntSwitch::Off,
            clk_ccdread_nom: IntSwitch::Off,
            clk_ccdread_red: IntSwitch::Off,
        }
    }

    /// Read back the register.
    ///
    /// # Arguments
    /// * `is_gated` - All-off readback regardless of the stored bits.
    ///
    /// # Returns
    /// (clk_50mhz_nom, clk_50mhz_red, clk_ccdread_nom, clk_ccdread_red)
    pub fn read(&self, is_gated: bool) -> (IntSwitch, IntSwitch, IntSwitch, IntSwitch) {
        if is_gated {
            (
                IntSwitch::Off,
                IntSwitch::Off,
                IntSwitch::Off,
                IntSwitch::Off,
            )
        } else {
            (
                self.clk_50mhz_nom,
                self.clk_50mhz_red,
                self.clk_ccdread_nom,
                self.clk_ccdread_red,
            )
        }
    }
}

impl SvmClocks {
    /// Create a new register with all clocks off.
    ///
    /// # Returns
    /// A new register.
    pub fn new() -> Self {
        Self {
            clk_50mhz_nom: IntSwitch::Off,
            clk_50mhz_red: IntSwitch::Off,
            clk_heater_nom: IntSwitch::Off,
            clk_heater_red: IntSwitch::Off,
        }
    }

    /// Read back the register.
    ///
    /// # Arguments
    /// * `is_gated` - All-off readback regardless of the stored bits.
    ///
    /// # Returns
    /// (clk_50mhz_nom, clk_50mhz_red, clk_heater_nom, clk_heater_red)
    pub fn read(&self, is_gated: bool) -> (IntSwitch, IntSwitch, IntSwitch, IntSwitch) {
        if is_gated {
            (
                IntSwitch::Off,
                IntSwitch::Off,
                IntSwitch::Off,
                IntSwitch::Off,
            )
        } else {
            (
                self.clk_50mhz_nom,
                self.clk_50mhz_red,
                self.clk_heater_nom,
                self.clk_heater_red,
            )
        }
    }
}
