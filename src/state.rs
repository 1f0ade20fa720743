// src/state.rs
use std::sync::Arc;

use crate::config::Settings;
use crate::services::completion::{CompletionProvider, OpenAiClient};

pub type SharedState = Arc<AppState>;

/// Read-only after startup; requests never share mutable state.
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
    pub api_key: Option<String>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>, api_key: Option<String>) -> Self {
        Self { provider, api_key }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let client = OpenAiClient::new(settings.base_url.clone(), settings.model.clone());
        Self::new(Arc::new(client), settings.api_key.clone())
    }
}
