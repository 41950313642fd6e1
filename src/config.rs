//! Construction parameters for [`HashMap`](crate::HashMap).

use crate::error::{Error, Result};

/// Number of buckets a map starts with when none is requested.
pub const DEFAULT_CAPACITY: usize = 16;

/// Maximum `len / capacity` ratio a map tolerates before it grows.
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// Smallest accepted threshold. Each entry costs `1 / threshold` buckets, so
/// anything lower turns the first insert into a huge bucket allocation.
pub const MIN_LOAD_FACTOR_THRESHOLD: f64 = 0.01;

/// Bucket count and resize threshold for a [`HashMap`](crate::HashMap).
///
/// ```
/// use chained_hashmap::{HashMap, HashMapConfig};
///
/// let config = HashMapConfig::default()
///     .with_initial_capacity(4)
///     .with_load_factor_threshold(0.5);
/// let map: HashMap<&str, u32> = HashMap::with_config(config).unwrap();
/// assert_eq!(map.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HashMapConfig {
    /// Buckets allocated up front. Must be at least 1.
    pub initial_capacity: usize,
    /// Ratio above which an insert of a new key grows the table first.
    /// Must be finite and at least [`MIN_LOAD_FACTOR_THRESHOLD`].
    pub load_factor_threshold: f64,
}

impl Default for HashMapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
        }
    }
}

impl HashMapConfig {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_load_factor_threshold(mut self, threshold: f64) -> Self {
        self.load_factor_threshold = threshold;
        self
    }

    /// Checks the parameters without building anything.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::invalid_configuration(
                "initial capacity must be at least 1",
            ));
        }
        // is_finite is false for NaN.
        let t = self.load_factor_threshold;
        if !t.is_finite() || t < MIN_LOAD_FACTOR_THRESHOLD {
            return Err(Error::invalid_configuration(format!(
                "load factor threshold must be finite and at least {}, got {}",
                MIN_LOAD_FACTOR_THRESHOLD, self.load_factor_threshold
            )));
        }
        Ok(())
    }
}
