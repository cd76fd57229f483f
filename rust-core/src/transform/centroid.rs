//! Centroid of polar samples
//! 
//! Each (angle, radius) pair is treated as a point in the plane; the centroid is
//! their arithmetic mean, reported back in polar form. Negative radii are valid
//! and reflect the point through the origin.

use crate::error::{WindingError, WindingResult};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Centroid of a set of polar samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    /// Angle in (-π, π]
    pub angle: f64,
    
    /// Distance from the origin (>= 0)
    pub magnitude: f64,
}

impl Centroid {
    /// Build from the mean point in Cartesian form
    fn from_mean(mean: Complex64) -> Self {
        let (magnitude, angle) = mean.to_polar();
        
        // atan2 of a signed zero is ±0 or ±π; pin the degenerate case to 0
        let angle = if magnitude == 0.0 {
            0.0
        } else if angle <= -PI {
            PI
        } else {
            angle
        };
        
        Self { angle, magnitude }
    }
    
    /// Centroid as an (x, y) point
    pub fn to_cartesian(&self) -> (f64, f64) {
        let point = Complex64::from_polar(self.magnitude, self.angle);
        (point.re, point.im)
    }
}

/// Compute the centroid of polar samples
/// 
/// # Arguments
/// * `angles` - Sample angles in radians (any range, not pre-wrapped)
/// * `radii` - Sample radii, same length as `angles`
/// 
/// # Errors
/// `LengthMismatch` if the lengths differ, `EmptySignal` if there are no samples.
/// All-zero radii are not an error: the result has magnitude 0 and angle 0.
pub fn centroid(angles: &[f64], radii: &[f64]) -> WindingResult<Centroid> {
    if angles.len() != radii.len() {
        return Err(WindingError::LengthMismatch {
            x_len: angles.len(),
            y_len: radii.len(),
        });
    }
    if angles.is_empty() {
        return Err(WindingError::EmptySignal);
    }
    
    Ok(centroid_of(angles.iter().copied().zip(radii.iter().copied())))
}

/// Centroid of (angle, radius) pairs; callers guarantee at least one pair
/// 
/// Zero radii are skipped so an overflowed (infinite) angle on them cannot turn
/// the sum into NaN. A non-zero radius at a non-finite angle still yields NaN.
pub(crate) fn centroid_of<I>(pairs: I) -> Centroid
where
    I: ExactSizeIterator<Item = (f64, f64)>,
{
    let n = pairs.len();
    debug_assert!(n > 0);
    
    let sum: Complex64 = pairs
        .filter(|&(_, r)| r != 0.0)
        .map(|(theta, r)| Complex64::from_polar(r, theta))
        .sum();
    
    Centroid::from_mean(sum / n as f64)
}
