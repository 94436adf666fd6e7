pub mod crio_snapshot;
