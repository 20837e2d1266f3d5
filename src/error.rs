//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Raised when the amount filter text cannot be understood.
///
/// This is never fatal: the filter engine drops the amount clause and hands
/// the error back to the caller as a warning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputFormatError {
    /// Text contained a `-` but was not two decimals around it
    #[error("Invalid amount range format. Use min-max, e.g. 100-500.")]
    InvalidRange { input: String },

    /// Text was not a decimal
    #[error("Invalid amount value.")]
    InvalidAmount { input: String },
}

impl InputFormatError {
    /// The raw text that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidRange { input } | Self::InvalidAmount { input } => input,
        }
    }
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input outside the amount filter (dates, flags)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
