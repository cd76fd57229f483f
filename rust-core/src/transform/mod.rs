//! Winding transform: centroid estimation and winding-number sweeps

pub mod centroid;
pub mod config;
pub mod sweep;

pub use centroid::{centroid, Centroid};
pub use config::SweepConfig;
pub use sweep::{WindingSweep, WindingSweepResult, WoundSignal};
