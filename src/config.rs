//! Configuration Module
//!
//! Construction parameters for the cache: capacity and load factor.

use crate::error::{CacheError, Result};

/// Load factor used when none is given. 0.75-0.8 keeps collision chains
/// short enough for near-constant time operations.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.78;

/// Cache construction parameters.
///
/// Both values are fixed for the lifetime of the cache built from them.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of live entries the cache can hold
    pub capacity: usize,
    /// Ratio of capacity to table length; lower values reduce expected
    /// chain length at the cost of memory
    pub load_factor: f64,
}

impl CacheConfig {
    /// Creates a config with the given capacity and the default load factor.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Replaces the load factor.
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks that the parameters can produce a working cache.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfig` if the capacity is zero or the
    /// load factor is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "capacity must be positive".to_string(),
            ));
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 {
            return Err(CacheError::InvalidConfig(format!(
                "load factor must be a positive number, got {}",
                self.load_factor
            )));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.load_factor, DEFAULT_LOAD_FACTOR);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_new() {
        let config = CacheConfig::new(50);
        assert_eq!(config.capacity, 50);
        assert_eq!(config.load_factor, DEFAULT_LOAD_FACTOR);
    }

    #[test]
    fn test_config_with_load_factor() {
        let config = CacheConfig::new(50).with_load_factor(0.5);
        assert_eq!(config.load_factor, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_capacity() {
        let config = CacheConfig::new(0);
        assert!(matches!(
            config.validate(),
            Err(CacheError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_rejects_bad_load_factor() {
        for bad in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = CacheConfig::new(10).with_load_factor(bad);
            assert!(
                matches!(config.validate(), Err(CacheError::InvalidConfig(_))),
                "load factor {} should be rejected",
                bad
            );
        }
    }
}
