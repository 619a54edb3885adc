use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use portfolio_llm_api::CompletionClient;
use portfolio_types::{ChatReply, HealthStatus, INVALID_MESSAGES_ERROR};

use crate::logging::safe_truncate;
use crate::web::error::AppError;

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/chat", post(chat))
        .with_state(state)
}

/// GET / - Health check
async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

/// POST /api/chat - Forward a transcript to the completion provider
async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(payload) = payload?;
    let messages = extract_messages(&payload)?;

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id, message_count = messages.len());

    async move {
        if let Some(last) = messages.last().and_then(|m| m.get("content")).and_then(Value::as_str) {
            tracing::debug!(preview = %safe_truncate(last, 80), "forwarding chat turn");
        }

        match state.client.chat_completion(messages).await {
            Ok(reply) => {
                tracing::info!(reply_len = reply.len(), "chat turn completed");
                Ok(Json(ChatReply::new(reply)))
            }
            Err(err) => {
                tracing::error!(error = ?err, "Groq chat error");
                Err(AppError::from(err))
            }
        }
    }
    .instrument(span)
    .await
}

/// The `messages` array of a chat payload; elements are forwarded as-is
fn extract_messages(payload: &Value) -> Result<&[Value], AppError> {
    payload
        .get("messages")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| AppError::BadRequest(INVALID_MESSAGES_ERROR.to_string()))
}
