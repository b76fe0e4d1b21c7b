//! Error types for the salary inflation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving CPI data and
//! adjusting salaries.

use thiserror::Error;

/// The main error type for the salary inflation engine.
///
/// Most degraded-data conditions (remote fetch failures, cache I/O problems,
/// missing data points) are recovered inside the CPI resolver and never reach
/// callers. The variants that do surface are configuration problems, invalid
/// requests, and the rare case where no usable index value can be produced.
///
/// # Example
///
/// ```
/// use salary_inflation::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/resolver.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/resolver.yaml");
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

    /// A request field failed validation.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The remote time-series provider could not deliver a usable payload.
    #[error("Failed to fetch series '{series_id}': {message}")]
    SeriesFetch {
        /// The series identifier that was requested.
        series_id: String,
        /// A description of the failure.
        message: String,
    },

    /// The persistent series cache could not be read or written.
    #[error("Series cache I/O failed at '{path}': {message}")]
    CacheIo {
        /// The cache file path.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// No usable index value could be produced for a year.
    #[error("CPI index unavailable for {year}: {message}")]
    IndexUnavailable {
        /// The year being resolved.
        year: i32,
        /// A description of why no value could be produced.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
