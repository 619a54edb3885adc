use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use portfolio_types::{ErrorBody, INVALID_MESSAGES_ERROR, UPSTREAM_FAILURE_ERROR};

/// Error handling for relay routes
#[derive(Debug)]
pub enum AppError {
    /// The caller sent something other than `{ messages: [...] }`
    BadRequest(String),
    /// The completion provider failed; details stay in the server log
    Upstream(anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // A body without a JSON content type carries no `messages`
            JsonRejection::MissingJsonContentType(_) => {
                AppError::BadRequest(INVALID_MESSAGES_ERROR.to_string())
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Upstream(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                UPSTREAM_FAILURE_ERROR.to_string(),
            ),
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
