use s3_backup_core::contract::CopyRequest;

/// Server-side copy of a single object between buckets.
pub trait ObjectCopier {
    fn copy_object(&self, request: &CopyRequest) -> Result<(), String>;
}
