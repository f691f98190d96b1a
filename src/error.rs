//! Error types for aws-cmdlets
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use thiserror::Error;

/// The main error type for aws-cmdlets
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Remote Operation Errors
    // ============================================================================
    /// Transport or service failure reported by an operation call
    #[error("{operation} failed{}: {message}", code_suffix(.code))]
    Service {
        operation: String,
        code: Option<String>,
        message: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a service error without an AWS error code
    pub fn service(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            operation: operation.into(),
            code: None,
            message: message.into(),
        }
    }

    /// Map an AWS SDK error into a service error, keeping the error code and
    /// the full source chain.
    pub fn from_sdk<E>(operation: impl Into<String>, err: E) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
    {
        Self::Service {
            operation: operation.into(),
            code: err.code().map(String::from),
            message: DisplayErrorContext(&err).to_string(),
        }
    }

    /// AWS error code, when the failure came from a service response
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Check if this error was raised by a remote operation call
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(" ({c})")).unwrap_or_default()
}

/// Result type alias for aws-cmdlets
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_argument("max_items", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'max_items': must be positive"
        );

        let err = Error::service("DescribeImages", "connection reset");
        assert_eq!(err.to_string(), "DescribeImages failed: connection reset");
    }

    #[test]
    fn test_service_error_with_code() {
        let err = Error::Service {
            operation: "ListAccounts".to_string(),
            code: Some("ThrottledClientException".to_string()),
            message: "slow down".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ListAccounts failed (ThrottledClientException): slow down"
        );
        assert_eq!(err.code(), Some("ThrottledClientException"));
        assert!(err.is_service());
        assert!(!Error::config("x").is_service());
        assert_eq!(Error::config("x").code(), None);
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(err.to_string().starts_with("IO error:"));
    }
}
