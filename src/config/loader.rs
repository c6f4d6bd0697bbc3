//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay
//! rates from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};

use super::types::PayRates;

/// Loads and provides access to the pay-rate configuration.
///
/// # File format
///
/// ```text
/// salary_per_hour: "12.77"
/// evening_bonus: "1.33"
/// expected_working_hours: 120
/// tax_rate: "0.05"
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_tracker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("config/rates.yaml").unwrap();
/// println!("Hourly rate: ${}", loader.rates().salary_per_hour);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: PayRates,
}

impl ConfigLoader {
    /// Loads pay rates from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ConfigNotFound`] when the file cannot be
    /// read and [`TrackerError::ConfigParseError`] when it contains
    /// invalid YAML or is missing required fields.
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rates = serde_yaml::from_str(&content).map_err(|e| TrackerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { rates })
    }

    /// Creates a loader carrying the documented default rates.
    pub fn with_defaults() -> Self {
        Self {
            rates: PayRates::default(),
        }
    }

    /// Returns the loaded pay rates.
    pub fn rates(&self) -> &PayRates {
        &self.rates
    }
}
