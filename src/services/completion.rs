//! Upstream completion provider.
//!
//! `CompletionProvider` is the seam between the relay and the language model
//! API. `OpenAiClient` talks to any OpenAI-compatible `/chat/completions`
//! endpoint; tests swap in their own implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered, but with an error payload or an unusable body.
    #[error("{0}")]
    Upstream(String),

    /// The provider could not be reached.
    #[error("{0}")]
    Transport(String),
}

/// One single-turn completion call. No history is ever attached.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the content of the first completion choice, if there is one.
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<Option<String>, ProviderError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Option<Vec<Choice>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<Option<String>, ProviderError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            model = %self.model,
            prompt_len = request.prompt.len(),
            "sending chat completion request"
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes).map_err(|e| {
            ProviderError::Upstream(format!("unreadable response (status {status}): {e}"))
        })?;

        // An error object wins over the status code.
        if let Some(err) = parsed.error {
            return Err(ProviderError::Upstream(error_message(&err)));
        }
        if !status.is_success() {
            return Err(ProviderError::Upstream(format!(
                "request failed with status {status}"
            )));
        }

        Ok(parsed
            .choices
            .and_then(|choices| choices.into_iter().next())
            .and_then(|choice| choice.message)
            .and_then(|message| message.content))
    }
}

// Providers disagree on the error shape: `{"message": ..}` objects, bare
// strings, or objects without a usable message.
fn error_message(error: &serde_json::Value) -> String {
    match error {
        serde_json::Value::String(msg) => msg.clone(),
        serde_json::Value::Object(fields) => match fields.get("message") {
            Some(serde_json::Value::String(msg)) => msg.clone(),
            _ => format!("provider returned an error: {error}"),
        },
        other => format!("provider returned an error: {other}"),
    }
}
