pub mod clock_register;
pub mod crio_simulator;
pub mod power_line_bank;
