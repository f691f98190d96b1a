//! Output module
//!
//! Everything written to stdout is a `Message`. Records and next tokens come
//! from paged commands; `check` and `list` write their own message kinds.
//! `OutputWriter` renders them as JSON lines or pretty JSON and flushes
//! after each one so pipelines see records as pages arrive.

mod writer;

pub use writer::{ConnectionStatus, Message, OutputWriter};

#[cfg(test)]
mod tests;
