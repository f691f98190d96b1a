//! AWS Free Tier

use crate::error::{Error, Result};
use crate::pagination::{Page, PageLimits, PageRequest, PagedOperation};
use crate::sdk::SdkField;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_freetier::types::FreeTierUsage;
use aws_sdk_freetier::Client;
use serde::Serialize;

/// `MaxResults` bounds for `GetFreeTierUsage`
pub const LIMITS: PageLimits = PageLimits::new(1, 1000);

/// `GetFreeTierUsage` takes no selection parameters here
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetFreeTierUsageParams;

/// Free Tier usage for one service/usage type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeTierUsageRecord {
    /// AWS service name
    pub service: Option<String>,
    /// API operation
    pub operation: Option<String>,
    /// Usage type
    pub usage_type: Option<String>,
    /// Region the usage is counted in
    pub region: Option<String>,
    /// Usage so far this month
    pub actual_usage_amount: Option<f64>,
    /// Forecast for the month
    pub forecasted_usage_amount: Option<f64>,
    /// Free Tier allowance
    pub limit: Option<f64>,
    /// Unit of the amounts
    pub unit: Option<String>,
    /// Offer description
    pub description: Option<String>,
    /// `Always Free`, `12 Months Free`, ...
    pub free_tier_type: Option<String>,
}

impl From<&FreeTierUsage> for FreeTierUsageRecord {
    fn from(usage: &FreeTierUsage) -> Self {
        Self {
            service: usage.service().into_field(),
            operation: usage.operation().into_field(),
            usage_type: usage.usage_type().into_field(),
            region: usage.region().into_field(),
            actual_usage_amount: usage.actual_usage_amount().into_field(),
            forecasted_usage_amount: usage.forecasted_usage_amount().into_field(),
            limit: usage.limit().into_field(),
            unit: usage.unit().into_field(),
            description: usage.description().into_field(),
            free_tier_type: usage.free_tier_type().into_field(),
        }
    }
}

/// `free-tier get-free-tier-usage`
#[derive(Debug, Clone)]
pub struct GetFreeTierUsage {
    client: Client,
}

impl GetFreeTierUsage {
    /// AWS operation name
    pub const NAME: &'static str = "GetFreeTierUsage";

    /// Create from a shared SDK config
    pub fn new(config: &SdkConfig) -> Self {
        Self::from_client(Client::new(config))
    }

    /// Create from an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PagedOperation for GetFreeTierUsage {
    type Params = GetFreeTierUsageParams;
    type Item = FreeTierUsageRecord;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn limits(&self) -> PageLimits {
        LIMITS
    }

    async fn fetch_page(
        &self,
        request: &PageRequest<GetFreeTierUsageParams>,
    ) -> Result<Page<FreeTierUsageRecord>> {
        let output = self
            .client
            .get_free_tier_usage()
            .set_next_token(request.continuation_token.clone())
            .set_max_results(request.page_size_hint)
            .send()
            .await
            .map_err(|e| Error::from_sdk(Self::NAME, e))?;

        let items = output
            .free_tier_usages()
            .iter()
            .map(FreeTierUsageRecord::from)
            .collect();
        Ok(Page::from_parts(items, output.next_token().into_field()))
    }
}
