// Number of secondary power lines per camera. The order of the rail values
// is always: CCD, CLK, AN1, AN2, AN3, DIG.
pub const NUM_POWER_LINES: usize = 6;

// Number of PSU channels (one instrument per channel).
pub const NUM_PSU: usize = 6;

// Each PSU is a single-channel instrument.
pub const NUM_PSU_CHANNELS: i32 = 1;

// Number of AWG units and channels per unit.
pub const NUM_AWG: usize = 2;
pub const NUM_AWG_CHANNELS: usize = 2;

// Number of ARB waveform memory slots per AWG unit.
pub const NUM_ARB_SLOTS: usize = 4;

// Number of protection timing parameters on the cRIO: trip and start-up
// times for OVP/UVP/OCP, per camera, per power line.
// 2 (trip, start-up) x 3 (OVP, UVP, OCP) x 2 (N-CAM, F-CAM) x 6 (lines).
pub const NUM_PROTECTION_TIMES: usize = 72;

// Default locations of the calibration file and the ARB data folder.
pub const DEFAULT_CALIBRATION_FILE: &str = "config/calibration.yaml";
pub const DEFAULT_ARB_DATA_DIR: &str = "data/arbdata";
