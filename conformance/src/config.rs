//! Sweep configuration: which moduli to check and under which policy.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! whatever the caller overrides (the CLI applies its flags last).
//!
//! ```toml
//! moduli = [2, 3, 5, 7, 11, 13]
//! policy = "unchecked"
//! ```

use std::path::Path;

use affine_plane::ModulusPolicy;
use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

/// Moduli checked when nothing else is configured. Composite entries are
/// skipped under [`ModulusPolicy::PrimeOnly`].
pub const DEFAULT_MODULI: [u64; 16] = [2, 3, 4, 5, 7, 8, 10, 11, 13, 16, 17, 19, 23, 29, 31, 50];

/// Invalid sweep configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The modulus list is empty.
    #[error("sweep configuration lists no moduli")]
    NoModuli,
}

/// Moduli and policy for one conformance run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Moduli in the order they are checked.
    pub moduli: Vec<u64>,
    /// Whether composite moduli are computed or skipped.
    pub policy: ModulusPolicy,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            moduli: DEFAULT_MODULI.to_vec(),
            policy: ModulusPolicy::PrimeOnly,
        }
    }
}

impl SweepConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, unknown keys, or an empty modulus list.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("invalid sweep configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Checks the configuration is runnable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoModuli`] for an empty modulus list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.moduli.is_empty() {
            return Err(ConfigError::NoModuli);
        }
        Ok(())
    }
}
