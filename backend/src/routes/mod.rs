mod buckets;
mod docs;
mod health;
mod hello;

use aide::axum::{routing::get, ApiRouter};

/// Creates the router with all handler routes
///
/// Storage and environment are provided as request extensions by the caller.
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/", get(hello::handler))
        .api_route("/health", get(health::handler))
        .api_route("/buckets", get(buckets::list_buckets))
}
