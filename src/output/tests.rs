//! Tests for output module

use super::*;
use crate::types::OutputFormat;
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Repo {
    repository_name: &'static str,
}

fn lines(bytes: Vec<u8>) -> Vec<Value> {
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_record_message_shape() {
    let repo = Repo {
        repository_name: "web",
    };
    let message = Message::record("DescribeRepositories", &repo).unwrap();

    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({
            "type": "RECORD",
            "operation": "DescribeRepositories",
            "record": {"repositoryName": "web"}
        })
    );
}

#[test]
fn test_next_token_message_shape() {
    let message = Message::next_token("ListAccounts", "abc==");

    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({"type": "NEXT_TOKEN", "operation": "ListAccounts", "nextToken": "abc=="})
    );
}

#[test]
fn test_connection_and_log_shapes() {
    let status = Message::connection(ConnectionStatus::Failed, "expired token");
    assert_eq!(
        serde_json::to_value(&status).unwrap(),
        json!({"type": "CONNECTION_STATUS", "status": "FAILED", "message": "expired token"})
    );

    let log = Message::warn("partial");
    assert_eq!(
        serde_json::to_value(&log).unwrap(),
        json!({"type": "LOG", "level": "WARN", "message": "partial"})
    );
}

#[test]
fn test_json_writer_one_line_per_message() {
    let mut writer = OutputWriter::new(Vec::new(), OutputFormat::Json);
    for name in ["a", "b"] {
        let repo = Repo {
            repository_name: name,
        };
        writer.record("DescribeRepositories", &repo).unwrap();
    }
    writer.next_token("DescribeRepositories", Some("t2")).unwrap();

    let output = lines(writer.into_inner());
    assert_eq!(output.len(), 3);
    assert_eq!(output[0]["record"]["repositoryName"], "a");
    assert_eq!(output[1]["record"]["repositoryName"], "b");
    assert_eq!(output[2]["nextToken"], "t2");
}

#[test]
fn test_next_token_skipped_when_absent_or_empty() {
    let mut writer = OutputWriter::new(Vec::new(), OutputFormat::Json);
    writer.next_token("ListAccounts", None).unwrap();
    writer.next_token("ListAccounts", Some("")).unwrap();

    assert!(writer.into_inner().is_empty());
}

#[test]
fn test_pretty_writer_indents() {
    let mut writer = OutputWriter::new(Vec::new(), OutputFormat::Pretty);
    writer.write(&Message::warn("hello")).unwrap();

    let text = String::from_utf8(writer.into_inner()).unwrap();
    assert!(text.contains("\n  \"type\": \"LOG\""));
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["message"], "hello");
}

#[test]
fn test_catalog_message_shape() {
    let message = Message::Catalog {
        operations: crate::services::catalog(),
    };

    let value = serde_json::to_value(&message).unwrap();
    assert_eq!(value["type"], "CATALOG");
    assert_eq!(value["operations"].as_array().unwrap().len(), 6);
    assert_eq!(value["operations"][3]["operation"], "ListAccounts");
}
