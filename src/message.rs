// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct RelayRequest {
    pub prompt: String,
    #[serde(default, deserialize_with = "category_label")]
    pub category: Option<String>,
}

/// Non-string categories are treated as absent, so they resolve to general.
fn category_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(label)) => Some(label),
        _ => None,
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RelayResponse {
    #[serde(rename = "generatedText")]
    pub generated_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
