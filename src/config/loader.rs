//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax
//! configurations from YAML files and validating the bracket tables.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{TaxBracket, TaxConfig, TaxProfile, TaxYearRates};

/// Loads and provides access to the tax configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides lookups by tax year. The bracket table of every year is
/// validated at load time, so the calculation code can treat it as
/// well-formed.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/th-pit/
/// ├── profile.yaml    # Jurisdiction metadata
/// └── years/
///     └── 2024.yaml   # Brackets, allowances and caps for 2024
/// ```
///
/// # Example
///
/// ```no_run
/// use tax_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/th-pit").unwrap();
///
/// let rules = loader.latest();
/// println!("Latest configured year: {}", rules.tax_year);
///
/// let rules = loader.year(2024).unwrap();
/// println!("Brackets: {}", rules.brackets.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/th-pit")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any year's bracket table violates its structural invariants
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load profile.yaml
        let profile_path = path.join("profile.yaml");
        let profile = Self::load_yaml::<TaxProfile>(&profile_path)?;

        // Load all year files from the years directory
        let years_dir = path.join("years");
        let years = Self::load_years(&years_dir)?;

        for year in &years {
            validate_brackets(year.tax_year, &year.brackets)?;
        }

        let config = TaxConfig::new(profile, years);

        Ok(Self { config })
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

    /// Loads all year files from the years directory.
    fn load_years(years_dir: &Path) -> EngineResult<Vec<TaxYearRates>> {
        let years_dir_str = years_dir.display().to_string();

        if !years_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: years_dir_str,
            });
        }

        let entries = fs::read_dir(years_dir).map_err(|_| EngineError::ConfigNotFound {
            path: years_dir_str.clone(),
        })?;

        let mut years = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: years_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let year = Self::load_yaml::<TaxYearRates>(&path)?;
                years.push(year);
            }
        }

        if years.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no year files found)", years_dir_str),
            });
        }

        Ok(years)
    }

    /// Returns the underlying tax configuration.
    pub fn config(&self) -> &TaxConfig {
        &self.config
    }

    /// Returns the profile metadata.
    pub fn profile(&self) -> &TaxProfile {
        self.config.profile()
    }

    /// Gets the rule set for a specific tax year.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TaxYearNotFound`] if the year has no
    /// configuration file.
    pub fn year(&self, tax_year: i32) -> EngineResult<&TaxYearRates> {
        self.config
            .year(tax_year)
            .ok_or(EngineError::TaxYearNotFound { tax_year })
    }

    /// Returns the most recent configured year.
    pub fn latest(&self) -> &TaxYearRates {
        // load() rejects directories without year files, so the year list
        // is never empty here.
        match self.config.latest() {
            Some(year) => year,
            None => unreachable!("configuration loaded without year files"),
        }
    }
}

/// Validates the structural invariants of a bracket table.
///
/// A valid table is non-empty, starts at zero, is ascending and contiguous
/// (`bracket[i].max + 1 == bracket[i + 1].min`), keeps every rate in
/// `[0, 1)`, and is unbounded only in its final bracket.
pub fn validate_brackets(tax_year: i32, brackets: &[TaxBracket]) -> EngineResult<()> {
    let invalid = |message: String| EngineError::InvalidBracketTable { tax_year, message };

    let Some(first) = brackets.first() else {
        return Err(invalid("bracket table is empty".to_string()));
    };

    if first.min != Decimal::ZERO {
        return Err(invalid(format!(
            "first bracket must start at 0, starts at {}",
            first.min
        )));
    }

    for bracket in brackets {
        if bracket.rate < Decimal::ZERO || bracket.rate >= Decimal::ONE {
            return Err(invalid(format!(
                "rate {} for bracket starting at {} is outside [0, 1)",
                bracket.rate, bracket.min
            )));
        }
        if let Some(max) = bracket.max {
            if max < bracket.min {
                return Err(invalid(format!(
                    "bracket {}..{} has its bounds reversed",
                    bracket.min, max
                )));
            }
        }
    }

    for pair in brackets.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        match current.max {
            Some(max) => {
                if next.min != max + Decimal::ONE {
                    return Err(invalid(format!(
                        "bracket starting at {} is not contiguous with bound {}",
                        next.min, max
                    )));
                }
            }
            None => {
                return Err(invalid(format!(
                    "unbounded bracket starting at {} is not last",
                    current.min
                )));
            }
        }
    }

    // The windows pass guarantees every earlier bracket is bounded.
    if brackets.last().is_some_and(|last| last.max.is_some()) {
        return Err(invalid("last bracket must be unbounded".to_string()));
    }

    Ok(())
}
