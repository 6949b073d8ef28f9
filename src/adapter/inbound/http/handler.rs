//! Route handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::dto::{ChatRequest, ChatResponse, HealthResponse, MessageField};
use super::error::ApiError;
use super::router::AppState;

/// `POST /api/chat`: reply to a single user message.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let message = match request.message_field() {
        MessageField::Missing => None,
        MessageField::Text(text) => Some(text),
        MessageField::NotText => return Err(ApiError::NotText),
    };
    let completion = state.chat.reply(message).await?;
    Ok(Json(ChatResponse {
        response: completion.text,
    }))
}

/// `GET /health`: liveness and the loaded model.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        model: state.chat.model_name().to_string(),
        started_at: state.started_at,
    })
}
