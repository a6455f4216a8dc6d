//! Error types for the Personal Income Tax Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading and querying tax
//! configuration. The calculation functions themselves are pure and
//! infallible; malformed user input never produces an error, it defaults
//! to zero.

use thiserror::Error;

/// The main error type for the Personal Income Tax Engine.
///
/// All configuration operations in the engine return this error type,
/// making it easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tax_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A bracket table violated its structural invariants.
    #[error("Invalid bracket table for tax year {tax_year}: {message}")]
    InvalidBracketTable {
        /// The tax year whose bracket table is invalid.
        tax_year: i32,
        /// A description of the violated invariant.
        message: String,
    },

    /// No configuration exists for the requested tax year.
    #[error("Tax year not configured: {tax_year}")]
    TaxYearNotFound {
        /// The tax year that was requested.
        tax_year: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_bracket_table_displays_year_and_message() {
        let error = EngineError::InvalidBracketTable {
            tax_year: 2024,
            message: "brackets are not contiguous".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid bracket table for tax year 2024: brackets are not contiguous"
        );
    }

    #[test]
    fn test_tax_year_not_found_displays_year() {
        let error = EngineError::TaxYearNotFound { tax_year: 1999 };
        assert_eq!(error.to_string(), "Tax year not configured: 1999");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
