//! Application configuration.
//!
//! Accrual parameters and the default-entry catalog are loaded from a TOML
//! file when one exists; the compiled-in defaults cover the common case of
//! running with no config file at all.

use crate::datemath::normalize_to_day_start;
use crate::errors::{Error, Result};
use crate::models::Entry;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Builtin default-entry catalog
pub mod catalog;

/// Accrual start date used whenever nothing valid is persisted or
/// configured.
pub const DEFAULT_START_DATE: &str = "2025-01-01";

/// Hours in one working day of leave.
pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;

/// Configuration structure representing the entire config.toml file.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Default accrual start date, `YYYY-MM-DD`
    #[serde(default = "default_start_date")]
    pub start_date: String,
    /// Hours in one working day of leave
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,
    /// Default entry catalog; replaces the builtin list when present
    #[serde(default = "catalog::builtin_catalog")]
    pub defaults: Vec<Entry>,
}

fn default_start_date() -> String {
    DEFAULT_START_DATE.to_string()
}

fn default_hours_per_day() -> f64 {
    DEFAULT_HOURS_PER_DAY
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            hours_per_day: default_hours_per_day(),
            defaults: catalog::builtin_catalog(),
        }
    }
}

impl AppConfig {
    /// Checks that the configured values are usable: the start date must be
    /// a valid calendar day and the working day must have positive length.
    ///
    /// # Errors
    /// Returns `Error::Config` for an unparseable `start_date` or a
    /// non-positive `hours_per_day`.
    pub fn validate(&self) -> Result<()> {
        if normalize_to_day_start(&self.start_date).is_none() {
            return Err(Error::Config {
                message: format!("Invalid start_date (expected YYYY-MM-DD): {}", self.start_date),
            });
        }

        if self.hours_per_day <= 0.0 {
            return Err(Error::Config {
                message: format!("hours_per_day must be positive, got {}", self.hours_per_day),
            });
        }

        Ok(())
    }
}

/// Loads application configuration from a TOML file.
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read, the TOML is invalid,
/// or the values fail validation.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let config: AppConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    config.validate()?;
    info!(
        "Loaded config: start_date={}, hours_per_day={}, {} default entries",
        config.start_date,
        config.hours_per_day,
        config.defaults.len()
    );
    Ok(config)
}

/// Loads configuration from the default location (./config.toml), falling
/// back to the builtin defaults when no file exists there.
///
/// # Errors
/// Returns `Error::Config` if a file exists but cannot be parsed or
/// validated — a broken config file should be fixed, not silently ignored.
pub fn load_default_config() -> Result<AppConfig> {
    if Path::new("config.toml").exists() {
        load_config("config.toml")
    } else {
        Ok(AppConfig::default())
    }
}
