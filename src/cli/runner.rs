//! CLI runner - executes commands

use crate::cli::commands::{
    ChimeCommand, Cli, Commands, EcrPublicCommand, FreeTierCommand, StsCommand,
};
use crate::config::{PagingDefaults, Settings};
use crate::error::Result;
use crate::output::{ConnectionStatus, Message, OutputWriter};
use crate::pagination::{FetchSummary, PagedOperation, PaginatedFetcher, PagingOptions};
use crate::sdk::load_sdk_config;
use crate::services::catalog;
use crate::services::chime::{ListAccounts, ListAccountsParams};
use crate::services::ecr_public::{
    DescribeImageTags, DescribeImageTagsParams, DescribeImages, DescribeImagesParams,
    DescribeRepositories, DescribeRepositoriesParams,
};
use crate::services::free_tier::{GetFreeTierUsage, GetFreeTierUsageParams};
use crate::services::sts::GetCallerIdentity;
use aws_config::SdkConfig;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing to stdout
    pub async fn run(&self) -> Result<()> {
        let settings = self.settings()?;
        let mut writer = OutputWriter::new(io::stdout(), settings.format);
        self.run_with(&settings, &mut writer).await
    }

    /// Settings file merged with the global flags
    pub fn settings(&self) -> Result<Settings> {
        let settings = Settings::load(self.cli.config.as_deref())?;
        Ok(settings.with_overrides(self.cli.overrides()))
    }

    /// Run the CLI command against an explicit writer
    pub async fn run_with<W: Write>(
        &self,
        settings: &Settings,
        writer: &mut OutputWriter<W>,
    ) -> Result<()> {
        match &self.cli.command {
            Commands::List => writer.write(&Message::Catalog {
                operations: catalog(),
            }),
            Commands::Check => {
                let config = load_sdk_config(&settings.aws()).await;
                check(&GetCallerIdentity::new(&config), writer).await
            }
            Commands::EcrPublic(command) => {
                let config = load_sdk_config(&settings.aws()).await;
                ecr_public(command, &config, &settings.paging, writer).await
            }
            Commands::Chime(command) => {
                let config = load_sdk_config(&settings.aws()).await;
                chime(command, &config, &settings.paging, writer).await
            }
            Commands::FreeTier(command) => {
                let config = load_sdk_config(&settings.aws()).await;
                free_tier(command, &config, &settings.paging, writer).await
            }
            Commands::Sts(command) => {
                let config = load_sdk_config(&settings.aws()).await;
                sts(command, &config, writer).await
            }
        }
    }
}

/// Run one paged operation, writing each record as it arrives
///
/// In caller-controlled mode the next token follows the records. A partial
/// result is reported with a `LOG` warning after the records.
pub async fn execute<O, W>(
    operation: &O,
    params: O::Params,
    options: PagingOptions,
    writer: &mut OutputWriter<W>,
) -> Result<FetchSummary>
where
    O: PagedOperation,
    O::Item: Serialize,
    W: Write,
{
    let name = operation.name();
    debug!(operation = name, ?options, "Executing");

    let summary = PaginatedFetcher::new(operation)
        .with_options(options)
        .run(params, |item| writer.record(name, &item))
        .await?;

    writer.next_token(name, summary.next_token.as_deref())?;
    if summary.is_partial() {
        writer.write(&Message::warn(format!(
            "{name} stopped after {} items: a later page failed",
            summary.items_emitted
        )))?;
    }
    Ok(summary)
}

/// Report whether the configured credentials work
///
/// A failed identity call is written as a `FAILED` status, not returned.
pub async fn check<W: Write>(
    operation: &GetCallerIdentity,
    writer: &mut OutputWriter<W>,
) -> Result<()> {
    let message = match operation.call().await {
        Ok(identity) => Message::connection(
            ConnectionStatus::Succeeded,
            format!(
                "Authenticated as {}",
                identity.arn.as_deref().unwrap_or("unknown principal")
            ),
        ),
        Err(e) => {
            warn!(error = %e, "Credential check failed");
            Message::connection(ConnectionStatus::Failed, format!("Connection failed: {e}"))
        }
    };
    writer.write(&message)
}

async fn ecr_public<W: Write>(
    command: &EcrPublicCommand,
    config: &SdkConfig,
    defaults: &PagingDefaults,
    writer: &mut OutputWriter<W>,
) -> Result<()> {
    match command {
        EcrPublicCommand::DescribeRepositories {
            registry_id,
            repository_names,
            paging,
        } => {
            let params = DescribeRepositoriesParams {
                registry_id: registry_id.clone(),
                repository_names: repository_names.clone(),
            };
            let operation = DescribeRepositories::new(config);
            execute(&operation, params, paging.to_options(defaults), writer).await?;
        }
        EcrPublicCommand::DescribeImages {
            registry_id,
            repository_name,
            paging,
        } => {
            let params = DescribeImagesParams {
                registry_id: registry_id.clone(),
                repository_name: repository_name.clone(),
            };
            let operation = DescribeImages::new(config);
            execute(&operation, params, paging.to_options(defaults), writer).await?;
        }
        EcrPublicCommand::DescribeImageTags {
            registry_id,
            repository_name,
            paging,
        } => {
            let params = DescribeImageTagsParams {
                registry_id: registry_id.clone(),
                repository_name: repository_name.clone(),
            };
            let operation = DescribeImageTags::new(config);
            execute(&operation, params, paging.to_options(defaults), writer).await?;
        }
    }
    Ok(())
}

async fn chime<W: Write>(
    command: &ChimeCommand,
    config: &SdkConfig,
    defaults: &PagingDefaults,
    writer: &mut OutputWriter<W>,
) -> Result<()> {
    match command {
        ChimeCommand::ListAccounts {
            name,
            user_email,
            paging,
        } => {
            let params = ListAccountsParams {
                name: name.clone(),
                user_email: user_email.clone(),
            };
            let operation = ListAccounts::new(config);
            execute(&operation, params, paging.to_options(defaults), writer).await?;
        }
    }
    Ok(())
}

async fn free_tier<W: Write>(
    command: &FreeTierCommand,
    config: &SdkConfig,
    defaults: &PagingDefaults,
    writer: &mut OutputWriter<W>,
) -> Result<()> {
    match command {
        FreeTierCommand::GetFreeTierUsage { paging } => {
            let operation = GetFreeTierUsage::new(config);
            execute(
                &operation,
                GetFreeTierUsageParams,
                paging.to_options(defaults),
                writer,
            )
            .await?;
        }
    }
    Ok(())
}

async fn sts<W: Write>(
    command: &StsCommand,
    config: &SdkConfig,
    writer: &mut OutputWriter<W>,
) -> Result<()> {
    match command {
        StsCommand::GetCallerIdentity => {
            let operation = GetCallerIdentity::new(config);
            execute(&operation, (), PagingOptions::default(), writer).await?;
        }
    }
    Ok(())
}
