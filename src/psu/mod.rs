pub mod psu_simulator;
