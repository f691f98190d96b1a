//! Service adapters
//!
//! One `PagedOperation` per supported AWS call. Each adapter maps its
//! parameters onto the SDK fluent builder and projects the response into a
//! serializable record.
//!
//! | Service    | Operations                                                        |
//! |------------|-------------------------------------------------------------------|
//! | ECR Public | DescribeRepositories, DescribeImages, DescribeImageTags           |
//! | Chime      | ListAccounts                                                      |
//! | Free Tier  | GetFreeTierUsage                                                  |
//! | STS        | GetCallerIdentity (single call)                                   |

pub mod chime;
pub mod ecr_public;
pub mod free_tier;
pub mod sts;

use crate::pagination::PageLimits;
use serde::Serialize;

/// Catalog entry describing one supported operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationInfo {
    /// CLI service group (e.g. `ecr-public`)
    pub service: &'static str,
    /// CLI command (e.g. `describe-repositories`)
    pub command: &'static str,
    /// AWS operation name
    pub operation: &'static str,
    /// Page-size bounds; `None` for single-call operations
    pub limits: Option<PageLimits>,
}

/// Every operation this crate exposes
pub fn catalog() -> Vec<OperationInfo> {
    vec![
        OperationInfo {
            service: "ecr-public",
            command: "describe-repositories",
            operation: ecr_public::DescribeRepositories::NAME,
            limits: Some(ecr_public::LIMITS),
        },
        OperationInfo {
            service: "ecr-public",
            command: "describe-images",
            operation: ecr_public::DescribeImages::NAME,
            limits: Some(ecr_public::LIMITS),
        },
        OperationInfo {
            service: "ecr-public",
            command: "describe-image-tags",
            operation: ecr_public::DescribeImageTags::NAME,
            limits: Some(ecr_public::LIMITS),
        },
        OperationInfo {
            service: "chime",
            command: "list-accounts",
            operation: chime::ListAccounts::NAME,
            limits: Some(chime::LIST_ACCOUNTS_LIMITS),
        },
        OperationInfo {
            service: "free-tier",
            command: "get-free-tier-usage",
            operation: free_tier::GetFreeTierUsage::NAME,
            limits: Some(free_tier::LIMITS),
        },
        OperationInfo {
            service: "sts",
            command: "get-caller-identity",
            operation: sts::GetCallerIdentity::NAME,
            limits: None,
        },
    ]
}

/// `None` for an empty list so the field is omitted from the request
pub(crate) fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

#[cfg(test)]
mod tests;
