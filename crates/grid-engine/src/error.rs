//! Error types for grid-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// A date identifier (day id, day-view path segment) could not be parsed.
    #[error("Invalid date '{input}': expected format {expected}")]
    InvalidDateFormat {
        input: String,
        expected: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A computed date falls outside the supported calendar.
    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
