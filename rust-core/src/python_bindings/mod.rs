//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;
use crate::error::WindingError;

mod transform_bindings;

impl From<WindingError> for PyErr {
    fn from(err: WindingError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Install a stderr log subscriber
/// 
/// RUST_LOG takes precedence over `level`. Calls after the first are ignored.
#[pyfunction]
#[pyo3(signature = (level="info"))]
fn init_logging(level: &str) -> PyResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| PyValueError::new_err(format!("Invalid log level '{}': {}", level, e)))?;
    
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
    
    Ok(())
}

/// Python module definition
#[pymodule]
fn winding_analyzer(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<transform_bindings::PyWindingAnalyzer>()?;
    m.add_function(wrap_pyfunction!(transform_bindings::py_centroid, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    
    Ok(())
}
