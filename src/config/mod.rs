//! Configuration APIs for stdcoll containers
//!
//! Containers work with their defaults out of the box; the types in this
//! module exist for callers that want to pre-size storage, tune vector
//! growth, or switch on structural self-checks while debugging.
//!
//! # Configuration Types
//!
//! - [`TreeConfig`]: node arena sizing and invariant verification for the
//!   AVL tree behind `Map`, `Set` and `MultiSet`
//! - [`VectorConfig`]: initial capacity and growth factor for `Vector`
//!
//! # Presets
//!
//! ```rust
//! use stdcoll::config::{Config, TreeConfig};
//!
//! let config = TreeConfig::debug_preset();
//! assert!(config.verify_invariants);
//! ```
//!
//! # Environment Initialization
//!
//! ```rust
//! use stdcoll::config::{Config, VectorConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads STDCOLL_VECTOR_INITIAL_CAPACITY and STDCOLL_VECTOR_GROWTH_FACTOR
//! let config = VectorConfig::from_env()?;
//! assert!(config.growth_factor > 1.0);
//! # Ok(())
//! # }
//! ```

use crate::error::{CollError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::fmt;
use std::path::Path;

pub mod tree;
pub mod vector;

#[cfg(test)]
mod tests;

pub use tree::TreeConfig;
pub use vector::{VectorConfig, MAX_GROWTH_FACTOR};

/// Default environment variable prefix
pub const ENV_PREFIX: &str = "STDCOLL_";

/// Common configuration trait providing validation, environment initialization,
/// presets and JSON persistence.
pub trait Config: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables using the
    /// [`ENV_PREFIX`] prefix.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables keep their default value. The result is
    /// validated before it is returned.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Configuration tuned for throughput, trading memory for fewer reallocations.
    fn performance_preset() -> Self;

    /// Configuration tuned for a small footprint.
    fn memory_preset() -> Self;

    /// Configuration that enables every structural self-check.
    fn debug_preset() -> Self;

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|e| CollError::configuration(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path.as_ref(), serialized)?;
        log::debug!("Saved configuration to {}", path.as_ref().display());
        Ok(())
    }

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| CollError::configuration(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        log::debug!("Loaded configuration from {}: {:?}", path.as_ref().display(), config);
        Ok(config)
    }
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean environment variable.
///
/// Accepts "true", "1", "yes", "on" (case-insensitive) as true, everything
/// else as false.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}
