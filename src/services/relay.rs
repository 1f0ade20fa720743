// src/services/relay.rs
use super::categories::Category;
use super::completion::{CompletionProvider, CompletionRequest};
use crate::error::RelayError;
use crate::message::RelayRequest;

pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 500;
pub const EMPTY_COMPLETION_FALLBACK: &str = "Sorry, I couldn't generate a response.";

/// Builds the single-turn call for a request. The prompt goes out verbatim.
pub fn build_completion_request(category: Category, prompt: &str) -> CompletionRequest {
    CompletionRequest {
        system_instruction: category.system_instruction().to_string(),
        prompt: prompt.to_string(),
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}

/// Forwards one prompt upstream and returns the generated text.
pub async fn relay_prompt(
    provider: &dyn CompletionProvider,
    api_key: &str,
    request: &RelayRequest,
) -> Result<String, RelayError> {
    if request.prompt.trim().is_empty() {
        return Err(RelayError::InvalidRequest(
            "Prompt cannot be empty".to_string(),
        ));
    }

    let category = Category::resolve(request.category.as_deref());
    let completion = build_completion_request(category, &request.prompt);

    tracing::info!(category = category.label(), "relaying prompt");

    let text = provider.complete(api_key, &completion).await?;

    Ok(text
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| EMPTY_COMPLETION_FALLBACK.to_string()))
}
