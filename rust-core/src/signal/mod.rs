//! Sampled signals fed into the winding transform

pub mod samples;

pub use samples::Signal;
