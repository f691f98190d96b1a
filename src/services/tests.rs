//! Tests for service adapters
//!
//! Record projections are checked against SDK shapes built in memory; the
//! request side is exercised end to end in `tests/integration_tests.rs`.

use super::chime::AccountRecord;
use super::ecr_public::{ImageRecord, ImageTagRecord, RepositoryRecord};
use super::free_tier::FreeTierUsageRecord;
use super::sts::CallerIdentity;
use super::*;
use aws_sdk_chime::types::{Account, AccountType};
use aws_sdk_ecrpublic::primitives::DateTime as SdkDateTime;
use aws_sdk_ecrpublic::types::{ImageDetail, ImageTagDetail, ReferencedImageDetail, Repository};
use aws_sdk_freetier::types::FreeTierUsage;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_catalog_lists_every_command_once() {
    let entries = catalog();
    assert_eq!(entries.len(), 6);

    let mut commands: Vec<_> = entries
        .iter()
        .map(|e| format!("{} {}", e.service, e.command))
        .collect();
    commands.sort();
    commands.dedup();
    assert_eq!(commands.len(), 6);

    let sts = entries.iter().find(|e| e.service == "sts").unwrap();
    assert_eq!(sts.operation, "GetCallerIdentity");
    assert!(sts.limits.is_none());

    let chime = entries.iter().find(|e| e.service == "chime").unwrap();
    assert_eq!(chime.limits, Some(PageLimits::new(1, 200)));
}

#[test]
fn test_catalog_serializes_camel_case() {
    let entry = &catalog()[0];
    let value = serde_json::to_value(entry).unwrap();
    assert_eq!(value["service"], "ecr-public");
    assert_eq!(value["limits"]["maxPageSize"], 1000);
}

#[test]
fn test_non_empty() {
    assert_eq!(non_empty(&[]), None);
    assert_eq!(
        non_empty(&["a".to_string()]),
        Some(vec!["a".to_string()])
    );
}

#[test]
fn test_repository_projection() {
    let repository = Repository::builder()
        .repository_name("web")
        .repository_arn("arn:aws:ecr-public::123456789012:repository/web")
        .registry_id("123456789012")
        .repository_uri("public.ecr.aws/abc123/web")
        .created_at(SdkDateTime::from_secs(1_600_000_000))
        .build();

    let record = RepositoryRecord::from(&repository);

    assert_eq!(record.repository_name.as_deref(), Some("web"));
    assert_eq!(record.registry_id.as_deref(), Some("123456789012"));
    assert_eq!(
        record.created_at,
        Some(Utc.timestamp_opt(1_600_000_000, 0).unwrap())
    );

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["repositoryUri"], "public.ecr.aws/abc123/web");
    assert_eq!(value["createdAt"], "2020-09-13T12:26:40Z");
}

#[test]
fn test_image_projection_keeps_tag_order() {
    let image = ImageDetail::builder()
        .repository_name("web")
        .image_digest("sha256:aaaa")
        .image_tags("latest")
        .image_tags("v1.2.0")
        .image_size_in_bytes(2048)
        .build();

    let record = ImageRecord::from(&image);

    assert_eq!(record.image_tags, vec!["latest".to_string(), "v1.2.0".to_string()]);
    assert_eq!(record.image_size_in_bytes, Some(2048));
    assert_eq!(record.image_pushed_at, None);
}

#[test]
fn test_image_projection_without_tags() {
    let image = ImageDetail::builder().image_digest("sha256:bbbb").build();

    let record = ImageRecord::from(&image);

    assert!(record.image_tags.is_empty());
    assert_eq!(record.repository_name, None);
}

#[test]
fn test_image_tag_projection() {
    let tag = ImageTagDetail::builder()
        .image_tag("latest")
        .image_detail(
            ReferencedImageDetail::builder()
                .image_digest("sha256:cccc")
                .image_size_in_bytes(512)
                .build(),
        )
        .build();

    let record = ImageTagRecord::from(&tag);

    assert_eq!(record.image_tag.as_deref(), Some("latest"));
    assert_eq!(record.image_digest.as_deref(), Some("sha256:cccc"));
    assert_eq!(record.image_size_in_bytes, Some(512));
}

#[test]
fn test_image_tag_projection_without_detail() {
    let tag = ImageTagDetail::builder().image_tag("orphan").build();

    let record = ImageTagRecord::from(&tag);

    assert_eq!(record.image_digest, None);
    assert_eq!(record.image_pushed_at, None);
}

#[test]
fn test_caller_identity_serialization() {
    let identity = CallerIdentity {
        user_id: Some("AIDAEXAMPLE".to_string()),
        account: Some("123456789012".to_string()),
        arn: Some("arn:aws:iam::123456789012:user/dev".to_string()),
    };

    assert_eq!(
        serde_json::to_value(&identity).unwrap(),
        json!({
            "userId": "AIDAEXAMPLE",
            "account": "123456789012",
            "arn": "arn:aws:iam::123456789012:user/dev"
        })
    );
}

#[test]
fn test_account_projection() {
    let account = Account::builder()
        .aws_account_id("123456789012")
        .account_id("a1b2c3")
        .name("engineering")
        .account_type(AccountType::EnterpriseDirectory)
        .created_timestamp(SdkDateTime::from_secs(1_600_000_000))
        .build()
        .unwrap();

    let record = AccountRecord::from(&account);

    assert_eq!(record.account_id.as_deref(), Some("a1b2c3"));
    assert_eq!(record.aws_account_id.as_deref(), Some("123456789012"));
    assert_eq!(record.account_type.as_deref(), Some("EnterpriseDirectory"));
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "accountId": "a1b2c3",
            "awsAccountId": "123456789012",
            "name": "engineering",
            "accountType": "EnterpriseDirectory",
            "createdTimestamp": "2020-09-13T12:26:40Z"
        })
    );
}

#[test]
fn test_account_projection_without_type() {
    let account = Account::builder()
        .aws_account_id("123456789012")
        .account_id("a1b2c3")
        .name("engineering")
        .build()
        .unwrap();

    let record = AccountRecord::from(&account);

    assert_eq!(record.account_type, None);
    assert_eq!(record.created_timestamp, None);
}

#[test]
fn test_free_tier_usage_projection() {
    let usage = FreeTierUsage::builder()
        .service("Amazon Elastic Compute Cloud")
        .operation("RunInstances")
        .usage_type("USW2-BoxUsage:freetrial")
        .region("us-west-2")
        .actual_usage_amount(120.5)
        .forecasted_usage_amount(300.0)
        .limit(750.0)
        .unit("Hrs")
        .description("750 hours of t2.micro per month")
        .free_tier_type("12 Months Free")
        .build();

    let record = FreeTierUsageRecord::from(&usage);

    assert_eq!(record.service.as_deref(), Some("Amazon Elastic Compute Cloud"));
    assert_eq!(record.actual_usage_amount, Some(120.5));
    assert_eq!(record.limit, Some(750.0));

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["usageType"], "USW2-BoxUsage:freetrial");
    assert_eq!(value["forecastedUsageAmount"], 300.0);
    assert_eq!(value["freeTierType"], "12 Months Free");
}
