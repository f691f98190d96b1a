//! Tests for SDK plumbing

use super::*;
use aws_smithy_types::DateTime as SdkDateTime;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

#[test]
fn test_sdk_field_strings() {
    let required: &str = "acct-1";
    let present: Option<&str> = Some("arn:aws:iam::123:user/me");
    let absent: Option<&str> = None;

    assert_eq!(required.into_field(), Some("acct-1".to_string()));
    assert_eq!(present.into_field(), Some("arn:aws:iam::123:user/me".to_string()));
    assert_eq!(absent.into_field(), None);
}

#[test]
fn test_sdk_field_numbers() {
    assert_eq!(12.5f64.into_field(), Some(12.5));
    assert_eq!(Some(3i64).into_field(), Some(3));
    assert_eq!(None::<f64>.into_field(), None);
    assert_eq!(true.into_field(), Some(true));
}

#[test]
fn test_to_utc() {
    let timestamp = SdkDateTime::from_secs(1_700_000_000);
    assert_eq!(
        to_utc(&timestamp),
        Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
    );
    assert_eq!(opt_utc(None), None);
    assert_eq!(
        opt_utc(Some(&SdkDateTime::from_secs(0))),
        Some(Utc.timestamp_opt(0, 0).unwrap())
    );
}

#[test]
fn test_aws_settings_with_region() {
    let settings = AwsSettings::with_region("eu-west-1");
    assert_eq!(settings.region.as_deref(), Some("eu-west-1"));
    assert!(settings.profile.is_none());
    assert!(settings.endpoint_url.is_none());
    assert_eq!(DEFAULT_REGION, "us-east-1");
}

#[tokio::test]
async fn test_load_sdk_config_applies_settings() {
    let settings = AwsSettings {
        region: Some("ap-southeast-2".to_string()),
        profile: None,
        endpoint_url: Some("http://localhost:4566".to_string()),
    };

    let config = load_sdk_config(&settings).await;

    assert_eq!(
        config.region().map(|r| r.as_ref().to_string()),
        Some("ap-southeast-2".to_string())
    );
    assert_eq!(config.endpoint_url(), Some("http://localhost:4566"));
}
