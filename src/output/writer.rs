//! Message types and the stdout writer

use crate::error::Result;
use crate::services::OperationInfo;
use crate::types::{JsonValue, LogLevel, OutputFormat};
use serde::Serialize;
use std::io::Write;

/// Result of a credentials check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    /// Credentials resolved and the call was accepted
    Succeeded,
    /// The identity call failed
    Failed,
}

/// A single line of output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Message {
    /// One result item
    Record {
        /// AWS operation that produced the item
        operation: String,
        /// The projected item
        record: JsonValue,
    },
    /// Token to pass back via `--starting-token`
    #[serde(rename_all = "camelCase")]
    NextToken {
        /// AWS operation the token belongs to
        operation: String,
        /// Opaque continuation token
        next_token: String,
    },
    /// Outcome of `check`
    ConnectionStatus {
        /// Whether the check passed
        status: ConnectionStatus,
        /// Caller identity or the failure reason
        message: String,
    },
    /// Supported operations, for `list`
    Catalog {
        /// One entry per command
        operations: Vec<OperationInfo>,
    },
    /// Log line
    Log {
        /// Severity
        level: LogLevel,
        /// Log text
        message: String,
    },
}

impl Message {
    /// Create a record message from any serializable item
    pub fn record<T: Serialize>(operation: impl Into<String>, item: &T) -> Result<Self> {
        Ok(Self::Record {
            operation: operation.into(),
            record: serde_json::to_value(item)?,
        })
    }

    /// Create a next-token message
    pub fn next_token(operation: impl Into<String>, token: impl Into<String>) -> Self {
        Self::NextToken {
            operation: operation.into(),
            next_token: token.into(),
        }
    }

    /// Create a connection status message
    pub fn connection(status: ConnectionStatus, message: impl Into<String>) -> Self {
        Self::ConnectionStatus {
            status,
            message: message.into(),
        }
    }

    /// Create a warning log
    pub fn warn(message: impl Into<String>) -> Self {
        Self::Log {
            level: LogLevel::Warn,
            message: message.into(),
        }
    }
}

/// Writes messages to a sink in the configured format
pub struct OutputWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> OutputWriter<W> {
    /// Create a writer
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Write one message and flush
    pub fn write(&mut self, message: &Message) -> Result<()> {
        match self.format {
            OutputFormat::Json => serde_json::to_writer(&mut self.out, message)?,
            OutputFormat::Pretty => serde_json::to_writer_pretty(&mut self.out, message)?,
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    /// Write a record for `operation`
    pub fn record<T: Serialize>(&mut self, operation: &str, item: &T) -> Result<()> {
        self.write(&Message::record(operation, item)?)
    }

    /// Write the next token, if there is one
    pub fn next_token(&mut self, operation: &str, token: Option<&str>) -> Result<()> {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => self.write(&Message::next_token(operation, token)),
            None => Ok(()),
        }
    }

    /// Consume the writer, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}
