//! AWS Security Token Service
//!
//! `GetCallerIdentity` is not paged; it is modelled as an operation that
//! always returns a single, final page so it shares the output path.

use crate::error::{Error, Result};
use crate::pagination::{Page, PageRequest, PagedOperation};
use crate::sdk::SdkField;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sts::Client;
use serde::Serialize;

/// Who the configured credentials belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerIdentity {
    /// Unique ID of the calling entity
    pub user_id: Option<String>,
    /// AWS account ID
    pub account: Option<String>,
    /// ARN of the calling entity
    pub arn: Option<String>,
}

/// `sts get-caller-identity`
#[derive(Debug, Clone)]
pub struct GetCallerIdentity {
    client: Client,
}

impl GetCallerIdentity {
    /// AWS operation name
    pub const NAME: &'static str = "GetCallerIdentity";

    /// Create from a shared SDK config
    pub fn new(config: &SdkConfig) -> Self {
        Self::from_client(Client::new(config))
    }

    /// Create from an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Call `GetCallerIdentity` directly
    pub async fn call(&self) -> Result<CallerIdentity> {
        let output = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| Error::from_sdk(Self::NAME, e))?;

        Ok(CallerIdentity {
            user_id: output.user_id().into_field(),
            account: output.account().into_field(),
            arn: output.arn().into_field(),
        })
    }
}

#[async_trait]
impl PagedOperation for GetCallerIdentity {
    type Params = ();
    type Item = CallerIdentity;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn fetch_page(&self, _request: &PageRequest<()>) -> Result<Page<CallerIdentity>> {
        Ok(Page::last(vec![self.call().await?]))
    }
}
