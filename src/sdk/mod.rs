//! AWS SDK plumbing
//!
//! Everything that touches the SDK but is not specific to one service:
//! - `AwsSettings` / `load_sdk_config` - shared `SdkConfig` construction
//! - `SdkField` / `to_utc` - projection helpers for SDK output shapes

mod client;
mod convert;

pub use client::{load_sdk_config, AwsSettings, DEFAULT_REGION};
pub use convert::{opt_utc, to_utc, SdkField};

#[cfg(test)]
mod tests;
