//! # Error Types
//!
//! Structured error types for stock_core. Every error is local to a single
//! row or call: nothing here is fatal to the process and nothing is worth
//! retrying, since every operation is deterministic.
//!
//! Incomplete rows (a required measurement that is zero, negative or blank)
//! are *not* errors. Calculators report them as `Ok(None)` and the form host
//! simply omits the row.
//!
//! ## Example
//!
//! ```rust
//! use stock_core::errors::{CalcError, CalcResult};
//! use stock_core::profiles::ProfileFamily;
//!
//! fn pick_size(size_mm: u32) -> CalcResult<u32> {
//!     if size_mm % 10 != 0 {
//!         return Err(CalcError::unknown_size(ProfileFamily::Heb, size_mm));
//!     }
//!     Ok(size_mm)
//! }
//!
//! assert_eq!(pick_size(205).unwrap_err().error_code(), "UNKNOWN_SIZE");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profiles::ProfileFamily;

/// Result type alias for stock_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and form-host operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, inconsistent, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Nominal size is not a key of the family's coefficient table
    #[error("Unknown size {size} mm for profile family {family}")]
    UnknownSize { family: ProfileFamily, size: u32 },

    /// Module key does not name a panel module
    #[error("Unknown module: {name}")]
    UnknownModule { name: String },

    /// Field is not part of the module's field set
    #[error("Module '{module}' has no field '{field}'")]
    UnknownField { module: String, field: String },

    /// Row index outside 1..=max
    #[error("Row {row} is out of range (1..={max})")]
    RowOutOfRange { row: usize, max: usize },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/CSV serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownSize error
    pub fn unknown_size(family: ProfileFamily, size: u32) -> Self {
        CalcError::UnknownSize { family, size }
    }

    /// Create an UnknownModule error
    pub fn unknown_module(name: impl Into<String>) -> Self {
        CalcError::UnknownModule { name: name.into() }
    }

    /// Create an UnknownField error
    pub fn unknown_field(module: impl Into<String>, field: impl Into<String>) -> Self {
        CalcError::UnknownField {
            module: module.into(),
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownSize { .. } => "UNKNOWN_SIZE",
            CalcError::UnknownModule { .. } => "UNKNOWN_MODULE",
            CalcError::UnknownField { .. } => "UNKNOWN_FIELD",
            CalcError::RowOutOfRange { .. } => "ROW_OUT_OF_RANGE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}

impl From<csv::Error> for CalcError {
    fn from(e: csv::Error) -> Self {
        CalcError::serialization(format!("CSV: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::unknown_size(ProfileFamily::Npu, 90);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("UnknownSize"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_module("x").error_code(), "UNKNOWN_MODULE");
        assert_eq!(CalcError::unknown_size(ProfileFamily::Heb, 1).error_code(), "UNKNOWN_SIZE");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_unknown_size_message() {
        let error = CalcError::unknown_size(ProfileFamily::Heb, 210);
        assert_eq!(error.to_string(), "Unknown size 210 mm for profile family HEB");
    }
}
