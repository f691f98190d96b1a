//! CLI commands and argument parsing

use crate::config::{Overrides, PagingDefaults};
use crate::pagination::PagingOptions;
use crate::types::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Auto-paginating AWS cmdlets
#[derive(Parser, Debug)]
#[command(name = "aws-cmdlets")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true, env = "AWS_CMDLETS_CONFIG")]
    pub config: Option<PathBuf>,

    /// AWS region
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Endpoint override for every service client
    #[arg(long, global = true)]
    pub endpoint_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Global flags that override the settings file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
            format: self.format,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify credentials
    Check,

    /// List supported operations
    List,

    /// Amazon ECR Public
    #[command(subcommand)]
    EcrPublic(EcrPublicCommand),

    /// Amazon Chime
    #[command(subcommand)]
    Chime(ChimeCommand),

    /// AWS Free Tier
    #[command(subcommand)]
    FreeTier(FreeTierCommand),

    /// AWS Security Token Service
    #[command(subcommand)]
    Sts(StsCommand),
}

/// `ecr-public` operations
#[derive(Subcommand, Debug)]
pub enum EcrPublicCommand {
    /// List public repositories
    DescribeRepositories {
        /// Registry ID (defaults to the caller's registry)
        #[arg(long)]
        registry_id: Option<String>,

        /// Only these repositories
        #[arg(long, num_args = 1..)]
        repository_names: Vec<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List images in a repository
    DescribeImages {
        /// Registry ID (defaults to the caller's registry)
        #[arg(long)]
        registry_id: Option<String>,

        /// Repository to list
        #[arg(long)]
        repository_name: String,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List image tags in a repository
    DescribeImageTags {
        /// Registry ID (defaults to the caller's registry)
        #[arg(long)]
        registry_id: Option<String>,

        /// Repository to list
        #[arg(long)]
        repository_name: String,

        #[command(flatten)]
        paging: PagingArgs,
    },
}

/// `chime` operations
#[derive(Subcommand, Debug)]
pub enum ChimeCommand {
    /// List Chime accounts
    ListAccounts {
        /// Filter by account name
        #[arg(long)]
        name: Option<String>,

        /// Filter by user email
        #[arg(long)]
        user_email: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },
}

/// `free-tier` operations
#[derive(Subcommand, Debug)]
pub enum FreeTierCommand {
    /// Show Free Tier usage
    GetFreeTierUsage {
        #[command(flatten)]
        paging: PagingArgs,
    },
}

/// `sts` operations
#[derive(Subcommand, Debug)]
pub enum StsCommand {
    /// Show the identity behind the configured credentials
    GetCallerIdentity,
}

/// Paging flags shared by every paged operation
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingArgs {
    /// Stop after this many items
    #[arg(long)]
    pub max_items: Option<i64>,

    /// Items to request per call
    #[arg(long)]
    pub page_size: Option<i32>,

    /// Resume from a token printed by an earlier `--no-paginate` run
    #[arg(long)]
    pub starting_token: Option<String>,

    /// Fetch a single page and print the next token
    #[arg(long)]
    pub no_paginate: bool,
}

impl PagingArgs {
    /// Build paging options, filling gaps from the settings file
    pub fn to_options(&self, defaults: &PagingDefaults) -> PagingOptions {
        PagingOptions {
            max_items: self.max_items.or(defaults.max_items),
            page_size: self.page_size.or(defaults.page_size),
            starting_token: self.starting_token.clone(),
            caller_controls_paging: self.no_paginate,
        }
    }
}
