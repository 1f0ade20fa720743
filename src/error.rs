// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::completion::ProviderError;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing OpenAI API key")]
    MissingCredential,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("OpenAI Error: {0}")]
    Upstream(String),

    #[error("Failed to reach completion provider: {0}")]
    Transport(String),
}

impl From<ProviderError> for RelayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream(msg) => RelayError::Upstream(msg),
            ProviderError::Transport(msg) => RelayError::Transport(msg),
        }
    }
}

// Every failure leaves the relay as a 500 with a single `error` field.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "chat relay failed");

        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
