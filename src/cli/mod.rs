//! CLI module
//!
//! Command-line interface for the AWS cmdlets.
//!
//! # Commands
//!
//! - `check` - Verify credentials with `sts get-caller-identity`
//! - `list` - Show supported operations and their page limits
//! - `ecr-public describe-repositories|describe-images|describe-image-tags`
//! - `chime list-accounts`
//! - `free-tier get-free-tier-usage`
//! - `sts get-caller-identity`

mod commands;
mod runner;

pub use commands::{
    ChimeCommand, Cli, Commands, EcrPublicCommand, FreeTierCommand, PagingArgs, StsCommand,
};
pub use runner::{check, execute, Runner};
