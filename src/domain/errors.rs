//! Domain error types
//!
//! This module defines the error hierarchy for Leadbook. Errors are
//! classified by kind so that the HTTP layer can map them to status codes
//! in one place. They never expose third-party driver types.

use thiserror::Error;

/// Main Leadbook error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum LeadbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input failed a validation rule; the message is user-facing
    #[error("{0}")]
    Validation(String),

    /// A requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// A write would violate a uniqueness rule
    #[error("{0}")]
    Conflict(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(String),

    /// Whole-batch import failures (the payload cannot be processed at all)
    #[error("{0}")]
    Import(#[from] ImportError),

    /// Network/connection errors
    #[error("Connection error: {0}")]
    Connection(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Fatal import errors
///
/// Each of these rejects an import before any row is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// Payload was absent or not text
    #[error("CSV data is required")]
    MissingPayload,

    /// Fewer than two lines after trimming
    #[error("CSV must contain at least a header row and one data row")]
    TooFewLines,

    /// Header row does not resolve to every required canonical field
    #[error(
        "Missing required fields: {}. Please ensure your CSV has columns for first name, last name, and email.",
        .0.join(", ")
    )]
    MissingRequiredColumns(Vec<String>),
}

// Conversion from std::io::Error
impl From<std::io::Error> for LeadbookError {
    fn from(err: std::io::Error) -> Self {
        LeadbookError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LeadbookError {
    fn from(err: serde_json::Error) -> Self {
        LeadbookError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LeadbookError {
    fn from(err: toml::de::Error) -> Self {
        LeadbookError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leadbook_error_display() {
        let err = LeadbookError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_user_facing_messages_are_unprefixed() {
        let err = LeadbookError::Validation("Invalid email format".to_string());
        assert_eq!(err.to_string(), "Invalid email format");

        let err = LeadbookError::Conflict("A lead with this email already exists".to_string());
        assert_eq!(err.to_string(), "A lead with this email already exists");
    }

    #[test]
    fn test_import_error_messages() {
        assert_eq!(
            ImportError::TooFewLines.to_string(),
            "CSV must contain at least a header row and one data row"
        );
        assert_eq!(
            ImportError::MissingRequiredColumns(vec![
                "first_name".to_string(),
                "email".to_string()
            ])
            .to_string(),
            "Missing required fields: first_name, email. Please ensure your CSV has columns for first name, last name, and email."
        );
    }

    #[test]
    fn test_import_error_conversion() {
        let err: LeadbookError = ImportError::MissingPayload.into();
        assert!(matches!(err, LeadbookError::Import(_)));
        assert_eq!(err.to_string(), "CSV data is required");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: LeadbookError = io_err.into();
        assert!(matches!(err, LeadbookError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: LeadbookError = json_err.into();
        assert!(matches!(err, LeadbookError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: LeadbookError = toml_err.into();
        assert!(matches!(err, LeadbookError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_leadbook_error_implements_std_error() {
        let err = LeadbookError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
