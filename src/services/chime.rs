//! Amazon Chime

use crate::error::{Error, Result};
use crate::pagination::{Page, PageLimits, PageRequest, PagedOperation};
use crate::sdk::{opt_utc, SdkField};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_chime::types::Account;
use aws_sdk_chime::Client;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// `MaxResults` bounds for `ListAccounts`
pub const LIST_ACCOUNTS_LIMITS: PageLimits = PageLimits::new(1, 200);

/// Parameters for `ListAccounts`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAccountsParams {
    /// Exact account name to match
    pub name: Option<String>,
    /// Only accounts containing this user
    pub user_email: Option<String>,
}

/// A Chime account
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    /// Chime account ID
    pub account_id: Option<String>,
    /// Owning AWS account
    pub aws_account_id: Option<String>,
    /// Account name
    pub name: Option<String>,
    /// `Team`, `EnterpriseDirectory`, ...
    pub account_type: Option<String>,
    /// Creation time
    pub created_timestamp: Option<DateTime<Utc>>,
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id().into_field(),
            aws_account_id: account.aws_account_id().into_field(),
            name: account.name().into_field(),
            account_type: account.account_type().map(|t| t.as_str().to_string()),
            created_timestamp: opt_utc(account.created_timestamp()),
        }
    }
}

/// `chime list-accounts`
#[derive(Debug, Clone)]
pub struct ListAccounts {
    client: Client,
}

impl ListAccounts {
    /// AWS operation name
    pub const NAME: &'static str = "ListAccounts";

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
impl PagedOperation for ListAccounts {
    type Params = ListAccountsParams;
    type Item = AccountRecord;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn limits(&self) -> PageLimits {
        LIST_ACCOUNTS_LIMITS
    }

    async fn fetch_page(
        &self,
        request: &PageRequest<ListAccountsParams>,
    ) -> Result<Page<AccountRecord>> {
        let params = &request.params;
        let output = self
            .client
            .list_accounts()
            .set_name(params.name.clone())
            .set_user_email(params.user_email.clone())
            .set_next_token(request.continuation_token.clone())
            .set_max_results(request.page_size_hint)
            .send()
            .await
            .map_err(|e| Error::from_sdk(Self::NAME, e))?;

        let items = output.accounts().iter().map(AccountRecord::from).collect();
        Ok(Page::from_parts(items, output.next_token().into_field()))
    }
}
