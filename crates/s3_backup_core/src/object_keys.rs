use std::borrow::Cow;

use crate::contract::ContractError;

/// Decodes an object key as delivered in an S3 event notification.
///
/// Notification keys are form-URL-encoded: spaces arrive as `+` and every
/// other reserved byte (including a literal `+`) as a `%XX` escape.
pub fn decode_notification_key(raw_key: &str) -> Result<String, ContractError> {
    let spaced = raw_key.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|error| ContractError::UndecodableKey {
            key: raw_key.to_string(),
            reason: error.to_string(),
        })
}

/// Builds the `CopySource` header value for a `CopyObject` call.
///
/// Path separators are kept; every key segment is percent-encoded.
pub fn copy_source(bucket: &str, key: &str) -> String {
    let encoded_key = key
        .split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/");
    format!("{bucket}/{encoded_key}")
}
