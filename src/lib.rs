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

//! # AEU Simulator
//!
//! This library simulates the AEU ground-support equipment of the camera:
//! the cRIO power and clock controller, the six PSU channels and the two
//! arbitrary waveform generators.
pub mod application;
pub mod awg;
pub mod config;
pub mod constants;
pub mod crio;
pub mod enums;
pub mod identity;
pub mod model;
pub mod psu;
pub mod telemetry;
pub mod utility;
