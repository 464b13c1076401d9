//! Error types for the rental pricing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while configuring rules and
//! computing statements.

use thiserror::Error;

/// The main error type for the rental pricing engine.
///
/// All operations in the engine return this error type. None of the
/// variants are recoverable at the point they are raised; they are
/// surfaced to the immediate caller.
///
/// # Example
///
/// ```
/// use rental_engine::error::EngineError;
///
/// let error = EngineError::UnknownCategory {
///     category: "DOCUMENTARY".to_string(),
/// };
/// assert_eq!(error.to_string(), "No pricing rule exists for category DOCUMENTARY");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A category has no registered pricing rule.
    #[error("No pricing rule exists for category {category}")]
    UnknownCategory {
        /// The category that could not be resolved.
        category: String,
    },

    /// A rental was created with a duration of zero days.
    #[error("Invalid duration for rental '{title}': {days_rented} days (must be at least 1)")]
    InvalidDuration {
        /// The title of the rejected rental.
        title: String,
        /// The rejected duration.
        days_rented: u32,
    },

    /// A pricing rule is malformed and was rejected at registration time.
    #[error("Invalid pricing rule for category {category}: {message}")]
    InvalidRuleDefinition {
        /// The category the rule was registered under.
        category: String,
        /// A description of what made the rule invalid.
        message: String,
    },

    /// A rental item field was invalid.
    #[error("Invalid rental field '{field}': {message}")]
    InvalidRentalItem {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A price or point total exceeded the range the engine can represent.
    #[error("Arithmetic overflow while {operation}")]
    AmountOverflow {
        /// What was being calculated when the overflow occurred.
        operation: String,
    },

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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
