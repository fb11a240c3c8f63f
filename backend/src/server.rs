use std::{net::SocketAddr, num::ParseIntError, sync::Arc};

use aide::openapi::{Info, OpenApi};
use axum::{Extension, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{bucket::BucketStore, routes, types::Environment};

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 8080;

/// Reads the listen port from the `PORT` environment variable
///
/// # Errors
///
/// Returns an error if `PORT` is set but is not a valid port number
pub fn listen_port() -> Result<u16, ParseIntError> {
    parse_port(std::env::var("PORT").ok().as_deref())
}

/// Parses an optional port value, falling back to [`DEFAULT_PORT`]
///
/// # Errors
///
/// Returns an error if `value` is present but is not a valid port number
pub fn parse_port(value: Option<&str>) -> Result<u16, ParseIntError> {
    value.map_or(Ok(DEFAULT_PORT), str::parse)
}

/// Builds the application router around an already constructed bucket store
///
/// The store is shared by every request and never rebuilt.
#[must_use]
pub fn router(environment: Environment, bucket_store: Arc<dyn BucketStore>) -> Router {
    let mut openapi = OpenApi {
        info: Info {
            title: "Bucket Service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Info::default()
        },
        ..OpenApi::default()
    };

    routes::handler()
        .finish_api(&mut openapi)
        .layer(Extension(openapi))
        .layer(Extension(environment))
        .layer(Extension(bucket_store))
        .layer(TraceLayer::new_for_http())
}

/// Serves `router` on `listener` until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the underlying server fails
pub async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

/// Starts the server on all interfaces with the given environment and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(
    environment: Environment,
    bucket_store: Arc<dyn BucketStore>,
    port: u16,
) -> anyhow::Result<()> {
    let router = router(environment, bucket_store);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🔄 Bucket Service started on http://{addr}");

    serve(listener, router).await
}

/// Resolves on Ctrl+C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
