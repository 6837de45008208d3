//! Custom error types for outlay
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for outlay operations
#[derive(Error, Debug)]
pub enum OutlayError {
    /// A ledger line could not be parsed
    #[error("Format error: {0}")]
    Format(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors (settings file)
    #[error("JSON error: {0}")]
    Json(String),
}

impl OutlayError {
    /// Create a format error for a specific ledger line (1-based)
    pub fn malformed_line(line_number: usize, reason: impl Into<String>) -> Self {
        Self::Format(format!("line {}: {}", line_number, reason.into()))
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for OutlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OutlayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for outlay operations
pub type OutlayResult<T> = Result<T, OutlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutlayError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_malformed_line_error() {
        let err = OutlayError::malformed_line(3, "expected 3 fields, found 1");
        assert_eq!(
            err.to_string(),
            "Format error: line 3: expected 3 fields, found 1"
        );
        assert!(err.is_format());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let outlay_err: OutlayError = io_err.into();
        assert!(outlay_err.is_io());
    }
}
