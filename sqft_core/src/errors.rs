//! # Error Types
//!
//! Structured error types for sqft_core. Worksheet operations themselves never
//! fail (bad numbers coerce to zero, stale row ids are ignored), so these
//! errors only cover the edges: parsing field names and front-end commands,
//! and producing JSON output.
//!
//! ## Example
//!
//! ```rust
//! use sqft_core::errors::{SheetError, SheetResult};
//!
//! fn parse_row_id(raw: &str) -> SheetResult<u64> {
//!     raw.parse().map_err(|_| SheetError::invalid_row_id(raw))
//! }
//!
//! assert!(parse_row_id("x").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sqft_core operations
pub type SheetResult<T> = Result<T, SheetError>;

/// Structured error type for worksheet front ends.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SheetError {
    /// Unknown input field name
    #[error("Invalid field: '{field}' (expected 'height' or 'width')")]
    InvalidField { field: String },

    /// A row id could not be parsed
    #[error("Invalid row id: '{value}'")]
    InvalidRowId { value: String },

    /// Unknown front-end command
    #[error("Unknown command: '{command}'")]
    InvalidCommand { command: String },

    /// A command is missing an argument
    #[error("Missing argument for '{command}': {argument}")]
    MissingArgument { command: String, argument: String },

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// Terminal or stream I/O error
    #[error("I/O error: {operation} - {reason}")]
    Io { operation: String, reason: String },
}

impl SheetError {
    /// Create an InvalidField error
    pub fn invalid_field(field: impl Into<String>) -> Self {
        SheetError::InvalidField { field: field.into() }
    }

    /// Create an InvalidRowId error
    pub fn invalid_row_id(value: impl Into<String>) -> Self {
        SheetError::InvalidRowId { value: value.into() }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(command: impl Into<String>) -> Self {
        SheetError::InvalidCommand {
            command: command.into(),
        }
    }

    /// Create a MissingArgument error
    pub fn missing_argument(command: impl Into<String>, argument: impl Into<String>) -> Self {
        SheetError::MissingArgument {
            command: command.into(),
            argument: argument.into(),
        }
    }

    /// Create an Io error
    pub fn io(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        SheetError::Io {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SheetError::InvalidField { .. } => "INVALID_FIELD",
            SheetError::InvalidRowId { .. } => "INVALID_ROW_ID",
            SheetError::InvalidCommand { .. } => "INVALID_COMMAND",
            SheetError::MissingArgument { .. } => "MISSING_ARGUMENT",
            SheetError::Serialization { .. } => "SERIALIZATION_ERROR",
            SheetError::Io { .. } => "IO_ERROR",
        }
    }
}

impl From<serde_json::Error> for SheetError {
    fn from(e: serde_json::Error) -> Self {
        SheetError::Serialization {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for SheetError {
    fn from(e: std::io::Error) -> Self {
        SheetError::io(format!("{:?}", e.kind()), e.to_string())
    }
}
