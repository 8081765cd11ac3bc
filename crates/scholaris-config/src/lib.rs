//! Configuration models and JSON5 config loading.
//!
//! This crate owns the Scholaris config schema, its defaults, and the
//! file-loading path used by the server binary. Missing files fall back to
//! defaults; present files are parsed as JSON5 and validated.

mod error;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Configuration schema models.
pub use model::{AgentConfig, ScholarisConfig, SearchConfig, ServerConfig};

use log::{debug, info};
use std::fs;
use std::path::Path;

/// Load and validate config from a JSON5 file.
pub fn load(path: &Path) -> Result<ScholarisConfig, ConfigError> {
    info!("loading config (path={})", path.display());
    let contents = fs::read_to_string(path)?;
    let config: ScholarisConfig = json5::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Load config from an optional path, falling back to defaults.
///
/// `None`, or a path that does not exist, yields the default config; a
/// present file that fails to parse or validate is an error.
pub fn load_or_default(path: Option<&Path>) -> Result<ScholarisConfig, ConfigError> {
    let Some(path) = path else {
        debug!("no config path given, using defaults");
        return Ok(ScholarisConfig::default());
    };
    if !path.exists() {
        debug!("config file missing, using defaults (path={})", path.display());
        return Ok(ScholarisConfig::default());
    }
    load(path)
}
