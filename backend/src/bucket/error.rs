//! Error types for bucket operations

use aws_sdk_s3::{
    error::{DisplayErrorContext, SdkError},
    operation::list_buckets::ListBucketsError,
};
use thiserror::Error;

/// Result type for bucket operations
pub type BucketResult<T> = Result<T, BucketError>;

/// A failed call to the storage service
///
/// Variants only record where the call failed; callers treat them alike.
#[derive(Error, Debug)]
pub enum BucketError {
    /// The service answered with an error (auth, permissions, throttling, 5xx)
    #[error("S3 service error: {0}")]
    S3Error(String),

    /// No usable response: dispatch, timeout, credentials or parsing failure
    #[error("AWS SDK error: {0}")]
    AwsError(String),
}

impl From<SdkError<ListBucketsError>> for BucketError {
    fn from(error: SdkError<ListBucketsError>) -> Self {
        let message = DisplayErrorContext(&error).to_string();

        match error {
            SdkError::ServiceError(_) => Self::S3Error(message),
            _ => Self::AwsError(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_variant_prefix() {
        let err = BucketError::S3Error("AccessDenied".to_string());
        assert_eq!(err.to_string(), "S3 service error: AccessDenied");

        let err = BucketError::AwsError("dispatch failure".to_string());
        assert_eq!(err.to_string(), "AWS SDK error: dispatch failure");
    }
}
