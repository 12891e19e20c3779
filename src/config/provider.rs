//! Model provider configuration.
//!
//! Each `[[providers]]` entry describes one AI service endpoint. The
//! `type` field selects the wire format: `gemini`, `openai`, or `ollama`.
//! `api_key` names an environment variable, resolved at client creation.

use serde::Deserialize;

use super::defaults;

/// Configuration for one AI model provider.
///
/// ```toml
/// [[providers]]
/// id = "gemini"
/// type = "gemini"
/// endpoint = "https://generativelanguage.googleapis.com"
/// api_key = "GEMINI_API_KEY"
/// models = ["gemini-2.0-flash"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelProviderConfig {
    /// Unique identifier for this provider (e.g. "gemini", "ollama-local")
    pub id: String,
    /// Determines the API format: "gemini", "openai", or "ollama"
    pub provider_type: String,
    /// API endpoint URL
    pub endpoint: String,
    /// Name of the environment variable holding the API key
    pub api_key: Option<String>,
    /// Custom API path override (e.g. "v1beta/models" for Gemini)
    pub api_path: Option<String>,
    /// Models known to be served by this provider; empty means "any"
    pub models: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct RawProviderConfig {
    pub(super) id: String,
    #[serde(rename = "type", default)]
    pub(super) provider_type: String,
    pub(super) endpoint: Option<String>,
    pub(super) api_key: Option<String>,
    #[serde(default)]
    pub(super) api_path: Option<String>,
    #[serde(default)]
    pub(super) models: Vec<String>,
}

impl From<RawProviderConfig> for ModelProviderConfig {
    fn from(raw: RawProviderConfig) -> Self {
        Self {
            id: raw.id,
            provider_type: raw.provider_type,
            endpoint: raw.endpoint.unwrap_or_default(),
            api_key: raw.api_key,
            api_path: raw.api_path,
            models: raw.models,
        }
    }
}

impl ModelProviderConfig {
    /// The built-in Gemini provider used when no providers are configured.
    pub fn builtin_gemini() -> Self {
        Self {
            id: defaults::DEFAULT_PROVIDER_ID.to_string(),
            provider_type: defaults::DEFAULT_PROVIDER_TYPE.to_string(),
            endpoint: defaults::DEFAULT_GEMINI_ENDPOINT.to_string(),
            api_key: Some(defaults::DEFAULT_API_KEY_VAR.to_string()),
            api_path: None,
            models: vec![defaults::DEFAULT_MODEL.to_string()],
        }
    }

    /// Ensure a model exists in this provider's model list
    pub fn ensure_model(&mut self, model: &str) {
        if self.models.iter().all(|name| name != model) {
            self.models.push(model.to_string());
        }
    }
}
