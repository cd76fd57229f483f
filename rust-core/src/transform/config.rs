//! Sweep configuration

use crate::error::{WindingError, WindingResult};

/// Default sweep resolution (dense enough for a smooth displayed curve)
pub const DEFAULT_SAMPLE_COUNT: usize = 5000;

/// Winding-number domain and resolution of a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Lower bound of the winding domain (inclusive)
    pub min_winding: f64,
    
    /// Upper bound of the winding domain (inclusive)
    pub max_winding: f64,
    
    /// Number of evenly spaced winding numbers (>= 2)
    pub sample_count: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_winding: 0.0,
            max_winding: 1.0,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl SweepConfig {
    /// Create a validated sweep configuration
    pub fn new(min_winding: f64, max_winding: f64, sample_count: usize) -> WindingResult<Self> {
        let config = Self {
            min_winding,
            max_winding,
            sample_count,
        };
        config.validate()?;
        Ok(config)
    }
    
    /// Check the domain and resolution
    /// 
    /// # Errors
    /// `TooFewSamples` when `sample_count < 2`, `InvalidDomain` when
    /// `max_winding < min_winding` or either bound is NaN or infinite.
    pub fn validate(&self) -> WindingResult<()> {
        if self.sample_count < 2 {
            return Err(WindingError::TooFewSamples(self.sample_count));
        }
        if !self.min_winding.is_finite()
            || !self.max_winding.is_finite()
            || self.max_winding < self.min_winding
        {
            return Err(WindingError::InvalidDomain {
                min_winding: self.min_winding,
                max_winding: self.max_winding,
            });
        }
        Ok(())
    }
    
    /// Midpoint of the domain, where an interactive session starts
    pub fn initial_winding(&self) -> f64 {
        0.5 * self.min_winding + 0.5 * self.max_winding
    }
    
    /// Spacing between adjacent grid points (0 for a single-point domain)
    /// 
    /// Infinite when the domain is wider than `f64::MAX`; `winding_at` does
    /// not go through it.
    pub fn step(&self) -> f64 {
        (self.max_winding - self.min_winding) / (self.sample_count.max(2) - 1) as f64
    }
    
    /// Whether both bounds coincide
    pub fn is_degenerate(&self) -> bool {
        self.min_winding == self.max_winding
    }
    
    /// Winding number of grid point `k`
    /// 
    /// The first point is exactly `min_winding` and the last exactly
    /// `max_winding`. Interior points interpolate without forming
    /// `max - min`, which overflows for very wide domains.
    pub fn winding_at(&self, k: usize) -> f64 {
        if k == 0 {
            self.min_winding
        } else if k + 1 >= self.sample_count {
            self.max_winding
        } else {
            let t = k as f64 / (self.sample_count - 1) as f64;
            self.min_winding * (1.0 - t) + self.max_winding * t
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_default_config() {
        let config = SweepConfig::default();
        
        assert_eq!(config.sample_count, 5000);
        assert!(config.validate().is_ok());
        assert!((config.initial_winding() - 0.5).abs() < 1e-12);
    }
    
    #[test]
    fn test_grid_points() {
        let config = SweepConfig::new(4.0, 11.0, 8).unwrap();
        
        assert!((config.step() - 1.0).abs() < 1e-12);
        assert_eq!(config.winding_at(0), 4.0);
        assert!((config.winding_at(3) - 7.0).abs() < 1e-12);
        assert_eq!(config.winding_at(7), 11.0);
    }
    
    #[test]
    fn test_last_point_pinned() {
        let config = SweepConfig::new(0.1, 0.7, 7).unwrap();
        assert_eq!(config.winding_at(6), 0.7);
    }
    
    #[test]
    fn test_degenerate_domain() {
        let config = SweepConfig::new(2.0, 2.0, 3).unwrap();
        
        assert!(config.is_degenerate());
        assert_eq!(config.step(), 0.0);
        assert_eq!(config.winding_at(1), 2.0);
    }
    
    #[test]
    fn test_invalid_config() {
        assert_eq!(SweepConfig::new(0.0, 1.0, 1), Err(WindingError::TooFewSamples(1)));
        assert_eq!(SweepConfig::new(0.0, 1.0, 0), Err(WindingError::TooFewSamples(0)));
        assert!(matches!(
            SweepConfig::new(1.0, 0.0, 10),
            Err(WindingError::InvalidDomain { .. })
        ));
        assert!(SweepConfig::new(f64::NAN, 1.0, 10).is_err());
        assert!(matches!(
            SweepConfig::new(0.0, f64::INFINITY, 3),
            Err(WindingError::InvalidDomain { .. })
        ));
        assert!(matches!(
            SweepConfig::new(f64::NEG_INFINITY, 0.0, 3),
            Err(WindingError::InvalidDomain { .. })
        ));
        assert!(SweepConfig::new(f64::NEG_INFINITY, f64::INFINITY, 3).is_err());
    }
    
    #[test]
    fn test_wide_domain_grid() {
        let config = SweepConfig::new(-f64::MAX, f64::MAX, 3).unwrap();
        
        assert_eq!(config.winding_at(0), -f64::MAX);
        assert_eq!(config.winding_at(1), 0.0);
        assert_eq!(config.winding_at(2), f64::MAX);
        assert_eq!(config.initial_winding(), 0.0);
        
        let config = SweepConfig::new(-f64::MAX, f64::MAX, 9).unwrap();
        for k in 1..9 {
            assert!(config.winding_at(k).is_finite());
            assert!(config.winding_at(k) > config.winding_at(k - 1));
        }
    }
}
