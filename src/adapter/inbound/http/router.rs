//! Router assembly and serving.

use std::future::Future;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Request};
use axum::http::HeaderName;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span};

use super::handler;
use super::request_id::{request_id_of, UuidRequestId, REQUEST_ID_HEADER};
use crate::application::ChatService;
use crate::error::Result;

/// State shared by all handlers.
pub struct AppState {
    pub chat: ChatService,
    pub started_at: DateTime<Utc>,
    pub body_limit_bytes: usize,
}

impl AppState {
    pub fn new(chat: ChatService, body_limit_bytes: usize) -> Self {
        Self {
            chat,
            started_at: Utc::now(),
            body_limit_bytes,
        }
    }
}

/// Build the API router.
///
/// Every origin is allowed by CORS. Each request gets an `x-request-id`
/// (kept if the client sent one) that is echoed in the response and attached
/// to its tracing span.
pub fn build_router(state: Arc<AppState>) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/api/chat", post(handler::chat))
        .route("/health", get(handler::health))
        .layer(DefaultBodyLimit::max(state.body_limit_bytes))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                info_span!(
                    "http",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id_of(request),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .layer(SetRequestIdLayer::new(request_id, UuidRequestId))
        .with_state(state)
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an IO error if the server fails.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, model = state.chat.model_name(), "Listening");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
