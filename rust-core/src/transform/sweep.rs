//! Winding-number sweeps
//! 
//! Winding a signal at winding number w maps each sample (x, y) to the polar
//! point (w * x, y). The magnitude of the centroid of those points peaks when w
//! matches an angular frequency present in the signal, the continuous analog of
//! a Fourier coefficient's magnitude at w.
//! 
//! Angles are linear (w * x, never pre-wrapped into [0, 2π)).

use super::centroid::{centroid_of, Centroid};
use super::config::SweepConfig;
use crate::error::WindingResult;
use crate::signal::Signal;
use ndarray::{Array1, ArrayView1};
use tracing::{debug, trace, warn};

/// A signal wound onto the circle at one winding number
#[derive(Debug, Clone, PartialEq)]
pub struct WoundSignal {
    /// Winding number used
    pub winding: f64,
    
    /// Polar angles w * x
    pub angles: Vec<f64>,
    
    /// Polar radii (the signal's y values)
    pub radii: Vec<f64>,
    
    /// Centroid of the wound points
    pub centroid: Centroid,
}

/// Magnitude-vs-winding-number curve over a fixed domain
#[derive(Debug, Clone, PartialEq)]
pub struct WindingSweepResult {
    windings: Array1<f64>,
    magnitudes: Array1<f64>,
}

impl WindingSweepResult {
    /// Winding numbers of the grid, increasing
    pub fn windings(&self) -> ArrayView1<'_, f64> {
        self.windings.view()
    }
    
    /// Centroid magnitude at each grid point
    pub fn magnitudes(&self) -> ArrayView1<'_, f64> {
        self.magnitudes.view()
    }
    
    /// Number of grid points
    pub fn len(&self) -> usize {
        self.windings.len()
    }
    
    /// Whether the grid has no points (never true for a built sweep)
    pub fn is_empty(&self) -> bool {
        self.windings.is_empty()
    }
    
    /// (winding, magnitude) at grid index `k`
    pub fn get(&self, k: usize) -> Option<(f64, f64)> {
        Some((*self.windings.get(k)?, *self.magnitudes.get(k)?))
    }
    
    /// Iterate (winding, magnitude) pairs in grid order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.windings
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
    }
    
    /// Grid point with the largest magnitude (first one on ties)
    pub fn peak(&self) -> (f64, f64) {
        let start = (self.windings[0], self.magnitudes[0]);
        self.iter().skip(1).fold(start, |best, point| {
            if point.1 > best.1 {
                point
            } else {
                best
            }
        })
    }
    
    /// Interior grid points strictly above both neighbours, strongest first
    /// 
    /// These are the dominant frequency estimates. Plateaus and the domain
    /// edges are not reported.
    pub fn local_maxima(&self) -> Vec<(f64, f64)> {
        let m = &self.magnitudes;
        let mut maxima: Vec<(f64, f64)> = (1..self.len().saturating_sub(1))
            .filter(|&k| m[k] > m[k - 1] && m[k] > m[k + 1])
            .map(|k| (self.windings[k], m[k]))
            .collect();
        
        maxima.sort_by(|a, b| b.1.total_cmp(&a.1));
        maxima
    }
    
    /// Grid index closest to winding number `w`, clamped to the domain
    /// 
    /// Used to place the active-winding marker on the curve.
    pub fn nearest_index(&self, w: f64) -> usize {
        let last = self.len() - 1;
        let (first_w, last_w) = (self.windings[0], self.windings[last]);
        
        if last_w == first_w || w.is_nan() || w <= first_w {
            return 0;
        }
        if w >= last_w {
            return last;
        }
        
        // Halved so wide domains do not overflow
        let t = (0.5 * w - 0.5 * first_w) / (0.5 * last_w - 0.5 * first_w);
        ((t * last as f64).round() as usize).min(last)
    }
}

/// Signal plus its precomputed sweep over a winding domain
/// 
/// Immutable after construction: `wind_at` only reads the owned signal, so one
/// sweep can serve any number of callers.
#[derive(Debug, Clone)]
pub struct WindingSweep {
    signal: Signal,
    config: SweepConfig,
    result: WindingSweepResult,
}

impl WindingSweep {
    /// Validate the configuration and compute the full sweep eagerly
    /// 
    /// # Arguments
    /// * `signal` - Signal to analyze
    /// * `config` - Winding domain and resolution
    /// 
    /// # Errors
    /// Any `SweepConfig::validate` failure.
    pub fn new(signal: Signal, config: SweepConfig) -> WindingResult<Self> {
        config.validate()?;
        
        if config.is_degenerate() {
            warn!(
                winding = config.min_winding,
                "winding domain is a single point; every sweep sample is identical"
            );
        }
        
        let windings = Array1::from_shape_fn(config.sample_count, |k| config.winding_at(k));
        let magnitudes = sweep_magnitudes(&signal, &windings);
        let result = WindingSweepResult { windings, magnitudes };
        
        let (peak_winding, peak_magnitude) = result.peak();
        debug!(
            samples = signal.len(),
            min_winding = config.min_winding,
            max_winding = config.max_winding,
            sample_count = config.sample_count,
            peak_winding,
            peak_magnitude,
            "winding sweep computed"
        );
        
        Ok(Self {
            signal,
            config,
            result,
        })
    }
    
    /// Convenience constructor from raw domain bounds
    pub fn with_domain(
        signal: Signal,
        min_winding: f64,
        max_winding: f64,
        sample_count: usize,
    ) -> WindingResult<Self> {
        Self::new(
            signal,
            SweepConfig {
                min_winding,
                max_winding,
                sample_count,
            },
        )
    }
    
    /// Wind the signal at `w` and compute the centroid
    /// 
    /// Any real `w` is accepted, including values outside the swept domain.
    pub fn wind_at(&self, w: f64) -> WoundSignal {
        let angles: Vec<f64> = self.signal.x().iter().map(|&x| w * x).collect();
        let radii = self.signal.y().to_vec();
        let centroid = centroid_of(angles.iter().copied().zip(radii.iter().copied()));
        
        trace!(winding = w, angle = centroid.angle, magnitude = centroid.magnitude, "wound signal");
        
        WoundSignal {
            winding: w,
            angles,
            radii,
            centroid,
        }
    }
    
    /// Centroid at `w` without materializing the wound points
    pub fn centroid_at(&self, w: f64) -> Centroid {
        wound_centroid(&self.signal, w)
    }
    
    /// Precomputed sweep
    pub fn sweep_result(&self) -> &WindingSweepResult {
        &self.result
    }
    
    /// Analyzed signal
    pub fn signal(&self) -> &Signal {
        &self.signal
    }
    
    /// Sweep configuration
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }
}

fn wound_centroid(signal: &Signal, w: f64) -> Centroid {
    centroid_of(
        signal
            .x()
            .iter()
            .zip(signal.y().iter())
            .map(|(&x, &y)| (w * x, y)),
    )
}

/// Each grid point is independent; the parallel build splits them across rayon
#[cfg(feature = "parallel")]
fn sweep_magnitudes(signal: &Signal, windings: &Array1<f64>) -> Array1<f64> {
    let mut magnitudes = windings.clone();
    magnitudes.par_mapv_inplace(|w| wound_centroid(signal, w).magnitude);
    magnitudes
}

#[cfg(not(feature = "parallel"))]
fn sweep_magnitudes(signal: &Signal, windings: &Array1<f64>) -> Array1<f64> {
    windings.mapv(|w| wound_centroid(signal, w).magnitude)
}
