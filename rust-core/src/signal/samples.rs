//! Immutable (x, y) sample sequences
//! 
//! x is the signal's domain (time, position, ...), y its value. Evenly spaced,
//! increasing x is the usual case but not required.

use crate::error::{WindingError, WindingResult};
use tracing::warn;

/// Sampled real-valued signal
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// Domain samples
    x: Vec<f64>,
    
    /// Value samples (used as polar radius once wound)
    y: Vec<f64>,
}

impl Signal {
    /// Create a signal from paired domain and value samples
    /// 
    /// # Arguments
    /// * `x` - Domain samples
    /// * `y` - Value samples, same length as `x`
    /// 
    /// # Errors
    /// `LengthMismatch` if the lengths differ, `EmptySignal` if both are empty.
    /// Mismatched input is never truncated.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> WindingResult<Self> {
        if x.len() != y.len() {
            return Err(WindingError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if y.is_empty() {
            return Err(WindingError::EmptySignal);
        }
        
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            warn!(len = y.len(), "signal contains non-finite samples");
        }
        
        Ok(Self { x, y })
    }
    
    /// Create a signal whose domain is the sample index 0..n-1
    pub fn from_samples(y: Vec<f64>) -> WindingResult<Self> {
        let x = (0..y.len()).map(|i| i as f64).collect();
        Self::new(x, y)
    }
    
    /// Domain samples
    pub fn x(&self) -> &[f64] {
        &self.x
    }
    
    /// Value samples
    pub fn y(&self) -> &[f64] {
        &self.y
    }
    
    /// Number of samples (always >= 1)
    pub fn len(&self) -> usize {
        self.y.len()
    }
    
    /// Whether the signal has no samples (never true for a built signal)
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
    
    /// Mean of the value samples
    pub fn mean(&self) -> f64 {
        self.y.iter().sum::<f64>() / self.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_signal_new() {
        let signal = Signal::new(vec![0.0, 0.5, 1.0], vec![2.0, -1.0, 3.0]).unwrap();
        
        assert_eq!(signal.len(), 3);
        assert!(!signal.is_empty());
        assert_eq!(signal.x(), &[0.0, 0.5, 1.0]);
        assert_eq!(signal.y(), &[2.0, -1.0, 3.0]);
        assert!((signal.mean() - 4.0 / 3.0).abs() < 1e-12);
    }
    
    #[test]
    fn test_signal_length_mismatch() {
        let result = Signal::new(vec![0.0, 1.0, 2.0], vec![1.0, 1.0, 1.0, 1.0]);
        
        assert_eq!(result, Err(WindingError::LengthMismatch { x_len: 3, y_len: 4 }));
    }
    
    #[test]
    fn test_signal_empty() {
        assert_eq!(Signal::new(vec![], vec![]), Err(WindingError::EmptySignal));
        assert_eq!(Signal::from_samples(vec![]), Err(WindingError::EmptySignal));
    }
    
    #[test]
    fn test_signal_default_domain() {
        let signal = Signal::from_samples(vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        
        // Domain defaults to the index sequence
        assert_eq!(signal.x(), &[0.0, 1.0, 2.0, 3.0]);
    }
    
    #[test]
    fn test_signal_unsorted_domain() {
        // Unsorted, uneven x is still a valid signal
        let signal = Signal::new(vec![3.0, -1.0, 0.25], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(signal.len(), 3);
    }
}
