//! Shared S3 backup domain primitives.
//!
//! This crate owns the notification and response contracts plus object key
//! handling. It intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod contract;
pub mod object_keys;
