//! Python bindings for the winding transform

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1, ToPyArray};
use crate::signal::Signal;
use crate::transform::{centroid, SweepConfig, WindingSweep};
use crate::transform::config::DEFAULT_SAMPLE_COUNT;

/// Winding analyzer exposed to Python
/// 
/// Owns the signal and its precomputed sweep; `wind_at` is called once per
/// slider change.
#[pyclass(name = "WindingAnalyzer")]
pub struct PyWindingAnalyzer {
    sweep: WindingSweep,
}

#[pymethods]
impl PyWindingAnalyzer {
    /// Create an analyzer and compute its sweep
    /// 
    /// Args:
    ///     y: Signal values as numpy array
    ///     x: Signal domain (defaults to 0..len(y))
    ///     min_winding: Lower bound of the winding domain
    ///     max_winding: Upper bound of the winding domain
    ///     sample_count: Number of sweep samples (>= 2)
    /// 
    /// Raises:
    ///     ValueError: on mismatched/empty input or an invalid domain
    #[new]
    #[pyo3(signature = (y, x=None, min_winding=0.0, max_winding=1.0, sample_count=DEFAULT_SAMPLE_COUNT))]
    fn new(
        y: PyReadonlyArray1<f64>,
        x: Option<PyReadonlyArray1<f64>>,
        min_winding: f64,
        max_winding: f64,
        sample_count: usize,
    ) -> PyResult<Self> {
        let y = y.as_array().to_vec();
        let signal = match x {
            Some(x) => Signal::new(x.as_array().to_vec(), y)?,
            None => Signal::from_samples(y)?,
        };
        let config = SweepConfig::new(min_winding, max_winding, sample_count)?;
        
        Ok(Self {
            sweep: WindingSweep::new(signal, config)?,
        })
    }
    
    /// Wind the signal at a winding number
    /// 
    /// Args:
    ///     winding: Any real winding number
    /// 
    /// Returns:
    ///     Tuple of (angles, radii, (centroid_angle, centroid_magnitude))
    fn wind_at<'py>(
        &self,
        py: Python<'py>,
        winding: f64,
    ) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>, (f64, f64))> {
        let wound = self.sweep.wind_at(winding);
        
        Ok((
            PyArray1::from_vec(py, wound.angles),
            PyArray1::from_vec(py, wound.radii),
            (wound.centroid.angle, wound.centroid.magnitude),
        ))
    }
    
    /// Winding numbers of the sweep grid
    fn sweep_windings<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(self.sweep.sweep_result().windings().to_pyarray(py))
    }
    
    /// Centroid magnitudes of the sweep grid
    fn sweep_magnitudes<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(self.sweep.sweep_result().magnitudes().to_pyarray(py))
    }
    
    /// Midpoint of the winding domain
    fn initial_winding(&self) -> f64 {
        self.sweep.config().initial_winding()
    }
    
    /// (winding, magnitude) of the sweep maximum
    fn peak(&self) -> (f64, f64) {
        self.sweep.sweep_result().peak()
    }
    
    /// Local maxima of the sweep as (winding, magnitude), strongest first
    fn local_maxima(&self) -> Vec<(f64, f64)> {
        self.sweep.sweep_result().local_maxima()
    }
    
    /// Sweep grid index closest to a winding number
    fn nearest_index(&self, winding: f64) -> usize {
        self.sweep.sweep_result().nearest_index(winding)
    }
    
    /// Signal domain samples
    fn signal_x<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(self.sweep.signal().x().to_pyarray(py))
    }
    
    /// Signal value samples
    fn signal_y<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(self.sweep.signal().y().to_pyarray(py))
    }
    
    /// Number of signal samples
    fn num_samples(&self) -> usize {
        self.sweep.signal().len()
    }
    
    /// Get min/max winding and sample count
    fn get_domain(&self) -> (f64, f64, usize) {
        let config = self.sweep.config();
        (config.min_winding, config.max_winding, config.sample_count)
    }
}

/// Centroid of polar samples
/// 
/// Args:
///     angles: Sample angles in radians
///     radii: Sample radii
/// 
/// Returns:
///     Tuple of (angle, magnitude)
#[pyfunction]
#[pyo3(name = "centroid")]
pub fn py_centroid(
    angles: PyReadonlyArray1<f64>,
    radii: PyReadonlyArray1<f64>,
) -> PyResult<(f64, f64)> {
    let c = centroid(&angles.as_array().to_vec(), &radii.as_array().to_vec())?;
    Ok((c.angle, c.magnitude))
}
