//! Bucket listing against the object-storage service

mod client;
mod error;

pub use client::S3BucketStore;
pub use error::{BucketError, BucketResult};

/// Read-only view of the buckets visible to the ambient credentials
///
/// One implementation is constructed at startup and shared by every request.
#[async_trait::async_trait]
pub trait BucketStore: Send + Sync {
    /// Lists the names of all buckets, in the order the service returned them
    async fn list_bucket_names(&self) -> BucketResult<Vec<String>>;
}

/// Test double for the bucket store
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::{BucketError, BucketResult, BucketStore};

    /// In-memory bucket store for tests
    pub struct MockBucketStore {
        names: Option<Vec<String>>,
        list_calls: AtomicUsize,
    }

    impl MockBucketStore {
        /// Store that always returns `names`
        #[must_use]
        pub const fn new(names: Vec<String>) -> Self {
            Self {
                names: Some(names),
                list_calls: AtomicUsize::new(0),
            }
        }

        /// Store whose every listing fails as if the remote call had failed
        #[must_use]
        pub const fn failing() -> Self {
            Self {
                names: None,
                list_calls: AtomicUsize::new(0),
            }
        }

        /// Same as [`MockBucketStore::new`], bumping `constructions` once
        #[must_use]
        pub fn tracked(constructions: &Arc<AtomicUsize>, names: Vec<String>) -> Self {
            constructions.fetch_add(1, Ordering::SeqCst);
            Self::new(names)
        }

        /// Number of times `list_bucket_names` was called
        #[must_use]
        pub fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl BucketStore for MockBucketStore {
        async fn list_bucket_names(&self) -> BucketResult<Vec<String>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);

            self.names
                .clone()
                .ok_or_else(|| BucketError::AwsError("mock: dispatch failure".to_string()))
        }
    }
}
