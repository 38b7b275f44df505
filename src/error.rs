//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure outside the calculation core. The calculation functions
//! themselves are total on their typed inputs and never return these.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Registry, store, service, configuration and API code all return this
/// error type, so callers can handle failures consistently.
///
/// # Example
///
/// ```
/// use shift_payroll::error::PayrollError;
///
/// let error = PayrollError::DuplicateEmployeeName {
///     name: "Yamada Taro".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee name already registered: Yamada Taro");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
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

    /// A time-of-day string was not a valid 24-hour `HH:MM` value.
    #[error("Invalid clock time '{value}': {message}")]
    InvalidClockTime {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Another employee already uses this name.
    #[error("Employee name already registered: {name}")]
    DuplicateEmployeeName {
        /// The conflicting name.
        name: String,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// A work entry submission was invalid.
    #[error("Invalid work entry field '{field}': {message}")]
    InvalidWorkEntry {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No work entry exists with the given identifier.
    #[error("Work entry not found: {id}")]
    WorkEntryNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// Reading or writing the persistence store failed.
    #[error("Storage error at '{path}': {message}")]
    Storage {
        /// The key or file involved.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// The logging subscriber could not be installed.
    #[error("Failed to initialise logging: {message}")]
    LoggingInit {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
