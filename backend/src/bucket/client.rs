//! S3 implementation of the bucket store

use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use tracing::{debug, error};

use super::{BucketError, BucketResult, BucketStore};

/// Bucket store backed by the S3 `ListBuckets` API
pub struct S3BucketStore {
    s3_client: Arc<S3Client>,
}

impl S3BucketStore {
    /// Creates a new bucket store
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client, credentials resolved from the environment
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>) -> Self {
        Self { s3_client }
    }
}

#[async_trait::async_trait]
impl BucketStore for S3BucketStore {
    /// Walks every page of `ListBuckets`, keeping the service order
    ///
    /// The SDK paginator stops when the service repeats a continuation token.
    ///
    /// # Errors
    ///
    /// Returns `BucketError::S3Error` for S3 service errors
    /// Returns `BucketError::AwsError` when no response was received
    async fn list_bucket_names(&self) -> BucketResult<Vec<String>> {
        let mut names = Vec::new();
        let mut pages = self.s3_client.list_buckets().into_paginator().send();

        while let Some(page) = pages.next().await {
            let output = page.map_err(|e| {
                let err = BucketError::from(e);
                error!("Failed to list buckets: {err}");
                err
            })?;

            names.extend(
                output
                    .buckets()
                    .iter()
                    .filter_map(|bucket| bucket.name().map(ToString::to_string)),
            );
        }

        debug!("Listed {} buckets", names.len());

        Ok(names)
    }
}
