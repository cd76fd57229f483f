//! Winding Analyzer - Centroid-Based Frequency Estimation Core
//! 
//! Winds a sampled signal around the unit circle at trial winding numbers and
//! tracks the centroid of the result; its magnitude peaks at the signal's
//! angular frequencies. Optional Python bindings drive an interactive front end.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod signal;
pub mod transform;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{WindingError, WindingResult};
pub use signal::Signal;
pub use transform::{centroid, Centroid, SweepConfig, WindingSweep, WindingSweepResult, WoundSignal};
