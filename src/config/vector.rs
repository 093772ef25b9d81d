//! Configuration for the dynamic array.

use super::{parse_env_var, Config};
use crate::error::{CollError, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted growth factor
pub const MAX_GROWTH_FACTOR: f64 = 4.0;

/// Vector growth configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorConfig {
    /// Capacity of the first allocation
    pub initial_capacity: usize,
    /// Multiplier applied to the capacity when the buffer is full
    pub growth_factor: f64,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            growth_factor: 2.0,
        }
    }
}

impl VectorConfig {
    /// Capacity to grow to when at least `required` slots are needed and
    /// `current` are allocated.
    pub fn next_capacity(&self, current: usize, required: usize) -> usize {
        let grown = (current as f64 * self.growth_factor).ceil();
        let grown = if grown >= usize::MAX as f64 {
            usize::MAX
        } else {
            grown as usize
        };
        required.max(grown).max(self.initial_capacity)
    }
}

impl Config for VectorConfig {
    fn validate(&self) -> Result<()> {
        if !(self.growth_factor > 1.0 && self.growth_factor <= MAX_GROWTH_FACTOR) {
            return Err(CollError::configuration(format!(
                "growth_factor {} must be in (1.0, {}]",
                self.growth_factor, MAX_GROWTH_FACTOR
            )));
        }
        if self.initial_capacity > isize::MAX as usize {
            return Err(CollError::configuration("initial_capacity exceeds isize::MAX"));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.initial_capacity = parse_env_var(
            &format!("{}VECTOR_INITIAL_CAPACITY", prefix),
            config.initial_capacity,
        );
        config.growth_factor = parse_env_var(
            &format!("{}VECTOR_GROWTH_FACTOR", prefix),
            config.growth_factor,
        );
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            initial_capacity: 64,
            growth_factor: 2.0,
        }
    }

    fn memory_preset() -> Self {
        Self {
            initial_capacity: 0,
            growth_factor: 1.5,
        }
    }

    fn debug_preset() -> Self {
        Self::default()
    }
}
