use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::object_keys::{copy_source, decode_notification_key};

pub const DEFAULT_DESTINATION_BUCKET: &str = "destination-bucket-yourname";

/// The subset of an S3 event notification the backup needs.
///
/// Every other notification field (event name, region, object size, etag)
/// is accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3NotificationEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3NotificationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3NotificationRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3Object {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub source_bucket: String,
    pub source_key: String,
    pub destination_bucket: String,
    pub destination_key: String,
}

impl CopyRequest {
    pub fn copy_source(&self) -> String {
        copy_source(&self.source_bucket, &self.source_key)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackupStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackupResponse {
    pub status: BackupStatus,
    pub message: String,
}

impl BackupResponse {
    pub fn success(key: &str) -> Self {
        Self {
            status: BackupStatus::Success,
            message: format!("File {key} backed up successfully."),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: BackupStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == BackupStatus::Success
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("malformed S3 notification: {0}")]
    MalformedEvent(String),
    #[error("S3 notification contains no records")]
    NoRecords,
    #[error("S3 notification record has an empty bucket name")]
    EmptyBucketName,
    #[error("S3 notification record has an empty object key")]
    EmptyObjectKey,
    #[error("object key '{key}' could not be decoded: {reason}")]
    UndecodableKey { key: String, reason: String },
    #[error("destination bucket must be configured")]
    EmptyDestinationBucket,
}

pub fn parse_notification(event: Value) -> Result<S3NotificationEvent, ContractError> {
    serde_json::from_value(event).map_err(|error| ContractError::MalformedEvent(error.to_string()))
}

/// Resolves the copy for the first record of a notification.
///
/// The object keeps its key in the destination bucket. Records after the
/// first are not inspected.
pub fn copy_request_for_event(
    event: &S3NotificationEvent,
    destination_bucket: &str,
) -> Result<CopyRequest, ContractError> {
    if destination_bucket.trim().is_empty() {
        return Err(ContractError::EmptyDestinationBucket);
    }

    let record = event.records.first().ok_or(ContractError::NoRecords)?;
    let source_bucket = record.s3.bucket.name.trim();
    if source_bucket.is_empty() {
        return Err(ContractError::EmptyBucketName);
    }
    if record.s3.object.key.is_empty() {
        return Err(ContractError::EmptyObjectKey);
    }

    let key = decode_notification_key(&record.s3.object.key)?;
    Ok(CopyRequest {
        source_bucket: source_bucket.to_string(),
        source_key: key.clone(),
        destination_bucket: destination_bucket.trim().to_string(),
        destination_key: key,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn notification(bucket: &str, key: &str) -> Value {
        json!({
            "Records": [{
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-east-1",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "bucket": {"name": bucket, "arn": format!("arn:aws:s3:::{bucket}")},
                    "object": {"key": key, "size": 1024, "eTag": "d41d8cd98f00b204e9800998ecf8427e"}
                }
            }]
        })
    }

    #[test]
    fn parses_full_notification_and_ignores_extra_fields() {
        let event = parse_notification(notification("source-bucket", "docs/report.pdf"))
            .expect("notification should parse");

        assert_eq!(event.records.len(), 1);
        assert_eq!(event.records[0].s3.bucket.name, "source-bucket");
        assert_eq!(event.records[0].s3.object.key, "docs/report.pdf");
    }

    #[test]
    fn missing_records_parse_as_empty() {
        let event = parse_notification(json!({})).expect("empty object should parse");
        assert!(event.records.is_empty());
    }

    #[test]
    fn rejects_non_object_payload() {
        let error = parse_notification(json!("not an event")).expect_err("string should fail");
        assert!(matches!(error, ContractError::MalformedEvent(_)));
    }

    #[test]
    fn rejects_record_without_object_key() {
        let error = parse_notification(json!({
            "Records": [{"s3": {"bucket": {"name": "source-bucket"}, "object": {}}}]
        }))
        .expect_err("missing key should fail");
        assert!(error.to_string().contains("malformed S3 notification"));
    }

    #[test]
    fn copy_request_keeps_key_and_targets_destination() {
        let event = parse_notification(notification("source-bucket", "docs/report.pdf"))
            .expect("notification should parse");

        let request =
            copy_request_for_event(&event, "backup-bucket").expect("request should resolve");

        assert_eq!(
            request,
            CopyRequest {
                source_bucket: "source-bucket".to_string(),
                source_key: "docs/report.pdf".to_string(),
                destination_bucket: "backup-bucket".to_string(),
                destination_key: "docs/report.pdf".to_string(),
            }
        );
        assert_eq!(request.copy_source(), "source-bucket/docs/report.pdf");
    }

    #[test]
    fn copy_request_uses_decoded_key() {
        let event = parse_notification(notification("source-bucket", "inbox/q1+summary.txt"))
            .expect("notification should parse");

        let request =
            copy_request_for_event(&event, "backup-bucket").expect("request should resolve");

        assert_eq!(request.source_key, "inbox/q1 summary.txt");
        assert_eq!(request.destination_key, "inbox/q1 summary.txt");
        assert_eq!(request.copy_source(), "source-bucket/inbox/q1%20summary.txt");
    }

    #[test]
    fn copy_request_only_uses_first_record() {
        let event = parse_notification(json!({
            "Records": [
                {"s3": {"bucket": {"name": "first"}, "object": {"key": "a.txt"}}},
                {"s3": {"bucket": {"name": "second"}, "object": {"key": "b.txt"}}}
            ]
        }))
        .expect("notification should parse");

        let request =
            copy_request_for_event(&event, "backup-bucket").expect("request should resolve");
        assert_eq!(request.source_bucket, "first");
        assert_eq!(request.source_key, "a.txt");
    }

    #[test]
    fn copy_request_rejects_empty_records() {
        let event = S3NotificationEvent {
            records: Vec::new(),
        };
        assert_eq!(
            copy_request_for_event(&event, "backup-bucket"),
            Err(ContractError::NoRecords)
        );
    }

    #[test]
    fn copy_request_rejects_empty_names() {
        let empty_bucket = parse_notification(notification("  ", "a.txt")).expect("should parse");
        assert_eq!(
            copy_request_for_event(&empty_bucket, "backup-bucket"),
            Err(ContractError::EmptyBucketName)
        );

        let empty_key = parse_notification(notification("source-bucket", "")).expect("should parse");
        assert_eq!(
            copy_request_for_event(&empty_key, "backup-bucket"),
            Err(ContractError::EmptyObjectKey)
        );
    }

    #[test]
    fn copy_request_rejects_blank_destination() {
        let event = parse_notification(notification("source-bucket", "a.txt")).expect("should parse");
        assert_eq!(
            copy_request_for_event(&event, " "),
            Err(ContractError::EmptyDestinationBucket)
        );
    }

    #[test]
    fn responses_serialize_with_lowercase_status() {
        let success = serde_json::to_value(BackupResponse::success("docs/report.pdf"))
            .expect("response should serialize");
        assert_eq!(
            success,
            json!({
                "status": "success",
                "message": "File docs/report.pdf backed up successfully."
            })
        );

        let error =
            serde_json::to_value(BackupResponse::error("Access Denied")).expect("should serialize");
        assert_eq!(error, json!({"status": "error", "message": "Access Denied"}));
    }
}
