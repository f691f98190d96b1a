//! Settings file
//!
//! Optional YAML file supplying defaults for the global flags and the
//! paging flags. Every field may be omitted.
//!
//! ```yaml
//! region: eu-west-1
//! profile: dev
//! endpoint_url: http://localhost:4566
//! format: pretty
//! paging:
//!   max_items: 500
//!   page_size: 100
//! ```
//!
//! Precedence is command-line flag, then settings file, then built-in default.

use crate::error::{Error, Result};
use crate::pagination::PagingOptions;
use crate::sdk::AwsSettings;
use crate::types::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

// ============================================================================
// Settings
// ============================================================================

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// AWS region
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    pub profile: Option<String>,

    /// Endpoint override for every service client
    pub endpoint_url: Option<String>,

    /// Output format
    pub format: OutputFormat,

    /// Defaults for the paging flags
    pub paging: PagingDefaults,
}

/// Paging defaults applied when the flags are absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagingDefaults {
    /// Default item cap
    pub max_items: Option<i64>,

    /// Default page size
    pub page_size: Option<i32>,
}

impl PagingDefaults {
    /// Paging options with only the cap and page size set
    pub fn to_options(&self) -> PagingOptions {
        PagingOptions {
            max_items: self.max_items,
            page_size: self.page_size,
            ..PagingOptions::default()
        }
    }
}

/// Values from the command line that take precedence over the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--region`
    pub region: Option<String>,
    /// `--profile`
    pub profile: Option<String>,
    /// `--endpoint-url`
    pub endpoint_url: Option<String>,
    /// `--format`
    pub format: Option<OutputFormat>,
}

impl Settings {
    /// Load settings from `path`, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let settings = Self::from_yaml_str(&content)?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Parse settings from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges
    ///
    /// Uses the same rules as the command-line paging flags.
    pub fn validate(&self) -> Result<()> {
        self.paging.to_options().validate().map_err(|err| match err {
            Error::InvalidArgument { field, message } => {
                Error::invalid_argument(format!("paging.{field}"), message)
            }
            other => other,
        })
    }

    /// Apply command-line values on top of the file
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.region.is_some() {
            self.region = overrides.region;
        }
        if overrides.profile.is_some() {
            self.profile = overrides.profile;
        }
        if overrides.endpoint_url.is_some() {
            self.endpoint_url = overrides.endpoint_url;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }

    /// Connection settings for the SDK clients
    pub fn aws(&self) -> AwsSettings {
        AwsSettings {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}
