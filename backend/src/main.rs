use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use bucket_service::{
    bucket::{BucketStore, S3BucketStore},
    server,
    types::Environment,
};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();
    let port = server::listen_port()?;

    // Use JSON format for staging/production, regular format for development
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    tracing::info!("Starting Bucket Service in {environment} environment");

    // Credentials are resolved by the SDK default provider chain
    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let bucket_store: Arc<dyn BucketStore> = Arc::new(S3BucketStore::new(s3_client));

    server::start(environment, bucket_store, port).await
}
