//! Common types used throughout aws-cmdlets
//!
//! Shared type definitions and type aliases used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Output Format
// ============================================================================

/// How messages are rendered on stdout
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output (one message per line)
    #[default]
    Json,
    /// Indented, human-readable JSON
    Pretty,
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for messages written to the output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_serde() {
        let format: OutputFormat = serde_yaml::from_str("pretty").unwrap();
        assert_eq!(format, OutputFormat::Pretty);
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_log_level_to_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
        assert_eq!(
            serde_json::to_string(&LogLevel::Info).unwrap(),
            "\"INFO\""
        );
    }
}
