// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # aws-cmdlets
//!
//! Auto-paginating list and describe commands for a handful of AWS services.
//!
//! ## Features
//!
//! - **One paging driver**: every command goes through `PaginatedFetcher`,
//!   which forwards continuation tokens, honours an item cap and can hand
//!   paging back to the caller
//! - **Partial results**: a failure on a later page keeps the items already
//!   written when a cap is set
//! - **Streaming output**: records are written as each page arrives
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use aws_cmdlets::pagination::{PaginatedFetcher, PagingOptions};
//! use aws_cmdlets::sdk::{load_sdk_config, AwsSettings};
//! use aws_cmdlets::services::ecr_public::{DescribeRepositories, DescribeRepositoriesParams};
//!
//! #[tokio::main]
//! async fn main() -> aws_cmdlets::Result<()> {
//!     let config = load_sdk_config(&AwsSettings::with_region("us-east-1")).await;
//!     let operation = DescribeRepositories::new(&config);
//!
//!     let (repositories, summary) = PaginatedFetcher::new(&operation)
//!         .with_options(PagingOptions::new().max_items(50))
//!         .collect(DescribeRepositoriesParams::default())
//!         .await?;
//!
//!     println!("{} repositories ({:?})", repositories.len(), summary.stop_reason);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          CLI / Runner                        │
//! │   settings + flags → PagingOptions → execute → OutputWriter  │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────┴────────────────────────────────┐
//! │                       PaginatedFetcher                       │
//! │   FetchSession: token forwarding, cap, page-size hint        │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────┬───────────────┼──────────────┬─────────────────┐
//! │ ECR Public  │    Chime      │  Free Tier   │      STS        │
//! │ 3 describes │ ListAccounts  │ GetUsage     │ CallerIdentity  │
//! └─────────────┴───────────────┴──────────────┴─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Paging driver
pub mod pagination;

/// Shared AWS SDK configuration and conversions
pub mod sdk;

/// Per-service operations
pub mod services;

/// Output messages and writer
pub mod output;

/// Settings file
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use pagination::{PagedOperation, PaginatedFetcher, PagingOptions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
