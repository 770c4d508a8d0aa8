//! AWS-oriented adapters and handlers for the S3 backup Lambda.
//!
//! This crate owns runtime integration details (the Lambda handler, its
//! configuration, and the object copy seam). Notification and response
//! contracts live in `s3_backup_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
