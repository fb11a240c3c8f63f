use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use bucket_service::{
    bucket::{mock::MockBucketStore, BucketStore},
    server,
    types::Environment,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Setup test environment variables with all the required configuration
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Router wired to an in-memory bucket store
pub struct TestSetup {
    pub router: Router,
    pub bucket_store: Arc<MockBucketStore>,
}

impl TestSetup {
    pub fn new(bucket_store: MockBucketStore) -> Self {
        Self::with_environment(Environment::Development, bucket_store)
    }

    pub fn with_names(names: &[&str]) -> Self {
        Self::new(MockBucketStore::new(
            names.iter().map(ToString::to_string).collect(),
        ))
    }

    pub fn failing() -> Self {
        Self::new(MockBucketStore::failing())
    }

    pub fn with_environment(environment: Environment, bucket_store: MockBucketStore) -> Self {
        setup_test_env();

        let bucket_store = Arc::new(bucket_store);
        let shared: Arc<dyn BucketStore> = bucket_store.clone();
        let router = server::router(environment, shared);

        Self {
            router,
            bucket_store,
        }
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}

pub async fn response_text(response: Response) -> String {
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
}

pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let text = response_text(response).await;
    serde_json::from_str(&text).expect("Body is not JSON")
}
