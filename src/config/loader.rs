//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configurations from YAML files.

use chrono_tz::Tz;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{RateTable, SpecialDayCalendar};

use super::types::{CalendarConfig, EngineConfig, EngineMetadata};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and exposes the validated base rate, special-day calendar and limits.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml    # Name, currency, base rate, limits, time zone
/// └── calendar.yaml  # Sundays and holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Base rate: {}", loader.rates().base_rate());
/// # Ok::<(), shift_pay_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The base rate is not positive, the shift limit is zero, or the
    ///   time zone is unknown
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let metadata = Self::load_yaml::<EngineMetadata>(&engine_path)?;

        let calendar_path = path.join("calendar.yaml");
        let calendar = Self::load_yaml::<CalendarConfig>(&calendar_path)?;

        let config = Self::build(metadata, calendar, &engine_path)?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Validates the raw files and assembles an [`EngineConfig`].
    fn build(
        metadata: EngineMetadata,
        calendar: CalendarConfig,
        engine_path: &Path,
    ) -> EngineResult<EngineConfig> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: engine_path.display().to_string(),
            message,
        };

        let rates = RateTable::new(metadata.base_rate).map_err(|e| parse_error(e.to_string()))?;

        if metadata.max_shift_hours == 0 {
            return Err(parse_error("max_shift_hours must be positive".to_string()));
        }

        let time_zone = match metadata.time_zone.as_deref() {
            Some(name) => Some(
                name.parse::<Tz>()
                    .map_err(|e| parse_error(format!("unknown time zone '{}': {}", name, e)))?,
            ),
            None => None,
        };

        let calendar: SpecialDayCalendar = calendar.to_calendar();
        Ok(EngineConfig::new(metadata, calendar, rates, time_zone))
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Returns the special-day calendar.
    pub fn calendar(&self) -> &SpecialDayCalendar {
        self.config.calendar()
    }

    /// Returns the configured rate table.
    pub fn rates(&self) -> &RateTable {
        self.config.rates()
    }

    /// Returns the configured time zone, if any.
    pub fn time_zone(&self) -> Option<Tz> {
        self.config.time_zone()
    }
}
