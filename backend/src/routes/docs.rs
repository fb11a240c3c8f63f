use aide::{axum::ApiRouter, openapi::OpenApi, scalar::Scalar};
use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json,
};

use crate::types::Environment;

/// API documentation routes: Scalar UI at `/docs`, raw document at `/openapi.json`
///
/// Both answer 404 in environments that do not expose docs.
pub fn handler() -> ApiRouter {
    let scalar = Scalar::new("/openapi.json").with_title("Bucket Service Docs");

    ApiRouter::new()
        .route("/docs", scalar.axum_route())
        .route("/openapi.json", get(openapi_schema))
        .layer(middleware::from_fn(docs_visibility))
}

async fn docs_visibility(
    Extension(environment): Extension<Environment>,
    request: Request,
    next: Next,
) -> Response {
    if !environment.show_api_docs() {
        return StatusCode::NOT_FOUND.into_response();
    }

    next.run(request).await
}

#[allow(clippy::unused_async)]
async fn openapi_schema(Extension(openapi): Extension<OpenApi>) -> Json<OpenApi> {
    Json(openapi)
}
