//! Error types for the Net Pay Engine.
//!
//! The calculation core is total and never fails. These errors cover the
//! shells around it: loading the scheme configuration and validating
//! requests that arrive over HTTP.

use thiserror::Error;

/// The main error type for the Net Pay Engine.
///
/// # Example
///
/// ```
/// use net_pay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/scheme.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/scheme.yaml");
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

    /// A configured rate is outside its permitted range.
    #[error("Invalid rate '{name}': {value}")]
    InvalidRate {
        /// The name of the rate in the configuration.
        name: String,
        /// The offending value, as written.
        value: String,
    },

    /// A request field failed validation.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
