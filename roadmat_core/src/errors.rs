//! # Error Types
//!
//! Structured error types for roadmat_core. These errors are designed to be
//! informative for both humans and tooling, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use roadmat_core::errors::{CalcError, CalcResult};
//!
//! fn require_location(location: &str) -> CalcResult<()> {
//!     if location.trim().is_empty() {
//!         return Err(CalcError::missing_field("location"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_location("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for roadmat_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for scoring and catalog operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by the CLI and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A project parameter is outside its enumerated set (strict policy only)
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A catalog entry is incomplete or out of range
    #[error("Malformed material profile '{material}': {reason}")]
    MalformedProfile { material: String, reason: String },

    /// Material not found in catalog
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// A division or factor product would not produce a finite result
    #[error("Degenerate arithmetic in {calculation}: {reason}")]
    DegenerateArithmetic { calculation: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidParameter error
    pub fn invalid_parameter(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MalformedProfile error
    pub fn malformed_profile(material: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::MalformedProfile {
            material: material.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a DegenerateArithmetic error
    pub fn degenerate_arithmetic(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DegenerateArithmetic {
            calculation: calculation.into(),
            reason: reason.into(),
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

    /// Errors caused by the request itself rather than by the catalog or environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidParameter { .. } | CalcError::MissingField { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidParameter { .. } => "INVALID_PARAMETER",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::MalformedProfile { .. } => "MALFORMED_PROFILE",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::DegenerateArithmetic { .. } => "DEGENERATE_ARITHMETIC",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
