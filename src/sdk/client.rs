//! Shared SDK configuration
//!
//! Region, profile and endpoint come from settings; credentials, signing,
//! retries and transport are left to the default `aws-config` chain.

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::debug;

/// Region used when neither settings nor the environment name one
pub const DEFAULT_REGION: &str = "us-east-1";

/// Connection settings for every service client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsSettings {
    /// Explicit region; falls back to the default provider chain
    pub region: Option<String>,
    /// Named profile from the shared config files
    pub profile: Option<String>,
    /// Endpoint override (local emulators, VPC endpoints)
    pub endpoint_url: Option<String>,
}

impl AwsSettings {
    /// Create settings for a region
    pub fn with_region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Self::default()
        }
    }

    /// Region provider: explicit region, then the default chain, then `us-east-1`
    fn region_provider(&self) -> RegionProviderChain {
        RegionProviderChain::first_try(self.region.clone().map(Region::new))
            .or_default_provider()
            .or_else(DEFAULT_REGION)
    }
}

/// Load the shared SDK configuration
pub async fn load_sdk_config(settings: &AwsSettings) -> SdkConfig {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(settings.region_provider());

    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(endpoint_url) = &settings.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    let config = loader.load().await;
    debug!(
        region = ?config.region(),
        profile = ?settings.profile,
        endpoint_url = ?settings.endpoint_url,
        "Loaded AWS SDK config"
    );
    config
}
