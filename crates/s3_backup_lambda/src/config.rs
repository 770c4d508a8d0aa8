use s3_backup_core::contract::DEFAULT_DESTINATION_BUCKET;

pub const DESTINATION_BUCKET_ENV: &str = "BACKUP_DESTINATION_BUCKET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupConfig {
    pub destination_bucket: String,
}

impl BackupConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// A blank value is kept blank; the handler rejects it per invocation.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let destination_bucket = lookup(DESTINATION_BUCKET_ENV)
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|| DEFAULT_DESTINATION_BUCKET.to_string());
        Self { destination_bucket }
    }
}
