pub mod arb_data;
pub mod awg_simulator;
pub mod sync_data;
