use aws_sdk_s3::error::DisplayErrorContext;
use lambda_runtime::{service_fn, tracing, Error, LambdaEvent};
use s3_backup_core::contract::{BackupResponse, CopyRequest};
use s3_backup_lambda::adapters::object_copier::ObjectCopier;
use s3_backup_lambda::config::BackupConfig;
use s3_backup_lambda::handlers::backup::handle_backup_event;
use serde_json::Value;

struct S3ObjectCopier {
    s3_client: aws_sdk_s3::Client,
}

impl ObjectCopier for S3ObjectCopier {
    fn copy_object(&self, request: &CopyRequest) -> Result<(), String> {
        let copy_source = request.copy_source();
        let bucket = request.destination_bucket.clone();
        let object_key = request.destination_key.clone();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .copy_object()
                    .copy_source(copy_source)
                    .bucket(bucket)
                    .key(object_key)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| {
                        format!("failed to copy object in s3: {}", DisplayErrorContext(&error))
                    })
            })
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = BackupConfig::from_env();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let copier = S3ObjectCopier {
        s3_client: aws_sdk_s3::Client::new(&aws_config),
    };
    tracing::info!(
        destination_bucket = %config.destination_bucket,
        "backup lambda initialized"
    );

    let config = &config;
    let copier = &copier;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<BackupResponse, Error>(handle_backup_event(event.payload, config, copier))
    }))
    .await
}
