use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};

use crate::{
    error::RelayError,
    message::{RelayRequest, RelayResponse},
    services::relay::relay_prompt,
    state::SharedState,
};

// The body is decoded by hand so malformed or oversized bodies still get the
// `{ error }` shape.
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RelayResponse>, RelayError> {
    let api_key = state
        .api_key
        .as_deref()
        .ok_or(RelayError::MissingCredential)?;

    let body = body.map_err(|rejection| RelayError::InvalidRequest(rejection.body_text()))?;

    let payload: RelayRequest = serde_json::from_slice(&body)
        .map_err(|e| RelayError::InvalidRequest(e.to_string()))?;

    let generated_text = relay_prompt(state.provider.as_ref(), api_key, &payload).await?;

    Ok(Json(RelayResponse { generated_text }))
}
