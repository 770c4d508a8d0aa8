use s3_backup_core::contract::{
    copy_request_for_event, parse_notification, BackupResponse, ContractError,
};
use serde_json::Value;

use crate::adapters::object_copier::ObjectCopier;
use crate::config::BackupConfig;

/// Backs up the object named by an S3 notification into the configured
/// destination bucket under the same key.
///
/// Every outcome is reported through the returned status record; nothing is
/// retried and no error escapes.
pub fn handle_backup_event(
    event: Value,
    config: &BackupConfig,
    copier: &dyn ObjectCopier,
) -> BackupResponse {
    tracing::debug!(event = %event, "event received");

    let notification = match parse_notification(event) {
        Ok(value) => value,
        Err(error) => return rejected_event_response(&error),
    };

    let record_count = notification.records.len();
    tracing::info!(record_count, "processing s3 notification");
    if record_count > 1 {
        tracing::warn!(
            ignored_records = record_count - 1,
            "only the first record of the notification is backed up"
        );
    }

    let request = match copy_request_for_event(&notification, &config.destination_bucket) {
        Ok(value) => value,
        Err(error) => return rejected_event_response(&error),
    };

    match copier.copy_object(&request) {
        Ok(()) => {
            tracing::info!(
                key = %request.source_key,
                source_bucket = %request.source_bucket,
                destination_bucket = %request.destination_bucket,
                "file backed up"
            );
            BackupResponse::success(&request.source_key)
        }
        Err(error) => {
            tracing::error!(
                error = %error,
                key = %request.source_key,
                source_bucket = %request.source_bucket,
                destination_bucket = %request.destination_bucket,
                "error during backup"
            );
            BackupResponse::error(error)
        }
    }
}

fn rejected_event_response(error: &ContractError) -> BackupResponse {
    tracing::error!(error = %error, "rejected s3 notification");
    BackupResponse::error(error.to_string())
}
