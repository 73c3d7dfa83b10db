//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the deduction
//! scheme from YAML.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{DeductionRates, SchemeConfig, SchemeFile, SchemeMetadata};

/// Loads and provides access to the deduction scheme configuration.
///
/// # Directory Structure
///
/// ```text
/// config/hu_2025/
/// └── scheme.yaml   # Scheme metadata and deduction rates
/// ```
///
/// # Example
///
/// ```no_run
/// use net_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hu_2025")?;
/// println!("Loaded scheme: {}", loader.scheme().name);
/// # Ok::<(), net_pay_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SchemeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `scheme.yaml` is missing, is not valid YAML, lacks a
    /// required field, or holds a rate outside its permitted range.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let scheme_path = path.as_ref().join("scheme.yaml");
        let file = Self::load_yaml::<SchemeFile>(&scheme_path)?;

        Self::validate_rates(&file.rates)?;

        info!(
            scheme = %file.scheme.code,
            effective_date = %file.scheme.effective_date,
            "Loaded deduction scheme"
        );

        Ok(Self {
            config: SchemeConfig::new(file.scheme, file.rates),
        })
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

    /// Rejects fractions outside [0, 1] and a non-positive overtime multiplier.
    fn validate_rates(rates: &DeductionRates) -> EngineResult<()> {
        for (name, value) in rates.fractions() {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(EngineError::InvalidRate {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if rates.overtime_multiplier <= Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                name: "overtime_multiplier".to_string(),
                value: rates.overtime_multiplier.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the underlying scheme configuration.
    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        self.config.scheme()
    }

    /// Returns the deduction rates.
    pub fn rates(&self) -> &DeductionRates {
        self.config.rates()
    }
}
