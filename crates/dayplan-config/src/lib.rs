//! Seed file parsing and validation for dayplan
//!
//! The seed is an optional TOML file read once at startup: demo settings
//! plus an initial event list. It is never written back; schedule
//! mutations live and die with the process.
//!
//! Supports:
//! - Versioned schema
//! - `H:MM:SS` time strings with caller-side range checks
//! - Validation with clear error messages

mod schema;
mod seed;
mod validation;

pub use schema::*;
pub use seed::*;
pub use validation::*;

use std::path::Path;
use thiserror::Error;

/// Seed file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read seed file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("Unsupported seed version: {0}")]
    UnsupportedVersion(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Current supported seed version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Load and validate a seed from a TOML file
pub fn load_seed(path: impl AsRef<Path>) -> ConfigResult<Seed> {
    let content = std::fs::read_to_string(path)?;
    parse_seed(&content)
}

/// Parse and validate a seed from a TOML string
pub fn parse_seed(content: &str) -> ConfigResult<Seed> {
    let raw: RawSeed = toml::from_str(content)?;

    if raw.config_version != CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(raw.config_version));
    }

    let errors = validate_seed(&raw);
    if !errors.is_empty() {
        return Err(ConfigError::ValidationFailed { errors });
    }

    Ok(Seed::from_raw(raw))
}
