//! Configuration for the AVL tree and the containers built on it.

use super::{parse_env_bool, parse_env_var, Config};
use crate::error::{CollError, Result};
use crate::memory::MAX_SLOTS;
use serde::{Deserialize, Serialize};

/// Tree configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Number of node slots reserved up front
    pub initial_capacity: usize,
    /// Run a full structural check after every mutation
    pub verify_invariants: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            verify_invariants: false,
        }
    }
}

impl TreeConfig {
    /// Default configuration with `capacity` node slots reserved
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            ..Self::default()
        }
    }
}

impl Config for TreeConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_capacity > MAX_SLOTS {
            return Err(CollError::configuration(format!(
                "initial_capacity {} exceeds the slot limit {}",
                self.initial_capacity, MAX_SLOTS
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.initial_capacity = parse_env_var(
            &format!("{}TREE_INITIAL_CAPACITY", prefix),
            config.initial_capacity,
        );
        config.verify_invariants = parse_env_bool(
            &format!("{}TREE_VERIFY_INVARIANTS", prefix),
            config.verify_invariants,
        );
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            initial_capacity: 1024,
            verify_invariants: false,
        }
    }

    fn memory_preset() -> Self {
        Self {
            initial_capacity: 0,
            verify_invariants: false,
        }
    }

    fn debug_preset() -> Self {
        Self {
            initial_capacity: 0,
            verify_invariants: true,
        }
    }
}
