//! HTTP Service

mod error;
mod handlers;

pub use error::ApiError;

use crate::api::Components;
use anyhow::Context;
use axum::http::header::{HeaderName, ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, DATE};
use axum::http::Method;
use axum::routing::post;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub const FETCH_OG_IMAGES_PATH: &str = "/api/fetch-og-images";
pub const PROCESS_UNPROCESSED_PATH: &str = "/api/process-unprocessed";

/// Build the application router.
///
/// Both API paths accept `POST` (and `OPTIONS`); any other method is a JSON 405. Unknown paths
/// are a JSON 404, except `OPTIONS`, which always answers 200 with an empty body.
pub fn build_router(components: Arc<Components>) -> Router {
    Router::new()
        .route(
            FETCH_OG_IMAGES_PATH,
            post(handlers::fetch_og_images)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            PROCESS_UNPROCESSED_PATH,
            post(handlers::process_unprocessed)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::fallback)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(components)
}

/// Any origin, without credentials.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers([
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
            ACCEPT,
            HeaderName::from_static("accept-version"),
            CONTENT_LENGTH,
            HeaderName::from_static("content-md5"),
            CONTENT_TYPE,
            DATE,
            HeaderName::from_static("x-api-version"),
        ])
}

/// Serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, components: Arc<Components>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(components))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
