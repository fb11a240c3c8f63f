use std::sync::Arc;

use axum::{Extension, Json};
use tracing::instrument;

use crate::{bucket::BucketStore, types::AppError};

/// Lists the names of all buckets visible to the service credentials
///
/// Names are returned in the order the storage service reports them.
#[instrument(skip(bucket_store))]
pub async fn list_buckets(
    Extension(bucket_store): Extension<Arc<dyn BucketStore>>,
) -> Result<Json<Vec<String>>, AppError> {
    let names = bucket_store.list_bucket_names().await?;

    Ok(Json(names))
}
