use crate::domain::types::{ChatMessage, MessageRole};
use crate::infrastructure::model::{ModelError, ModelProvider, ModelRequest};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

/// Longest preview of a prompt or response carried in logs
const PREVIEW_LIMIT: usize = 120;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub default_provider: String,
    pub default_model: String,
}

impl ClientConfig {
    pub fn new(default_provider: impl Into<String>, default_model: impl Into<String>) -> Self {
        Self {
            default_provider: default_provider.into(),
            default_model: default_model.into(),
        }
    }
}

#[derive(Debug)]
pub struct ChatRequest {
    pub prompt: String,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub system_prompt: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChatResult {
    pub content: String,
    pub session_id: String,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ChatError {
    pub fn user_message(&self) -> String {
        match self {
            ChatError::Model(err) => err.user_message(),
        }
    }
}

/// Session-scoped chat client over a model provider.
///
/// Keeps in-memory history per session so the agent runtime can thread
/// tool-calling turns through one conversation; nothing is persisted.
pub struct ChatClient<P: ModelProvider> {
    provider: P,
    config: ClientConfig,
    sessions: Mutex<HashMap<String, Vec<ChatMessage>>>,
}

impl<P: ModelProvider> ChatClient<P> {
    pub fn new(provider: P, config: ClientConfig) -> Self {
        Self {
            provider,
            config,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn default_provider(&self) -> &str {
        &self.config.default_provider
    }

    pub fn default_model(&self) -> &str {
        &self.config.default_model
    }

    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResult, ChatError> {
        let provider = request
            .provider
            .unwrap_or_else(|| self.config.default_provider.clone());
        let model = request
            .model
            .unwrap_or_else(|| self.config.default_model.clone());
        let session_id = request.session_id.unwrap_or_else(new_session_id);

        let history = {
            let mut sessions = self.sessions.lock().await;
            sessions.entry(session_id.clone()).or_default().clone()
        };
        debug!(
            session_id = session_id.as_str(),
            history_count = history.len(),
            "Preparing chat request with prior history"
        );

        let mut messages = Vec::with_capacity(history.len() + 2);
        if let Some(system) = request.system_prompt.filter(|s| !s.trim().is_empty()) {
            messages.push(ChatMessage::system(system));
        }
        messages.extend(history.iter().cloned());
        messages.push(ChatMessage::user(request.prompt.clone()));

        let response = self
            .provider
            .chat(ModelRequest {
                provider,
                model,
                messages,
                session_id: Some(session_id.clone()),
            })
            .await?;

        let final_session = response
            .session_id
            .clone()
            .unwrap_or_else(|| session_id.clone());
        info!(
            session_id = final_session.as_str(),
            "Received response from model provider"
        );
        let assistant_message = response.message.clone();

        self.persist_exchange(&final_session, request.prompt, assistant_message)
            .await;

        Ok(ChatResult {
            content: response.message.content,
            session_id: final_session,
        })
    }

    async fn persist_exchange(
        &self,
        session_id: &str,
        user_prompt: String,
        assistant: ChatMessage,
    ) {
        let mut sessions = self.sessions.lock().await;
        let history = sessions.entry(session_id.to_string()).or_default();
        history.push(ChatMessage::new(MessageRole::User, user_prompt));
        history.push(assistant);
        debug!(
            session_id,
            total_messages = history.len(),
            "Persisted chat exchange to session history"
        );
    }
}

/// Truncate text to a single-line log preview
pub fn preview(text: &str) -> String {
    let flattened = text.replace('\n', " ");
    let trimmed = flattened.trim();
    if trimmed.chars().count() <= PREVIEW_LIMIT {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(PREVIEW_LIMIT).collect();
        format!("{cut}…")
    }
}

fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::model::ModelResponse;
    use async_trait::async_trait;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct RecordingProvider {
        records: Arc<Mutex<Vec<ModelRequest>>>,
    }

    #[async_trait]
    impl ModelProvider for RecordingProvider {
        async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
            let mut lock = self.records.lock().await;
            lock.push(request.clone());
            Ok(ModelResponse {
                message: ChatMessage::assistant("ack"),
                session_id: request.session_id.clone(),
            })
        }
    }

    impl RecordingProvider {
        async fn records(&self) -> Vec<ModelRequest> {
            self.records.lock().await.clone()
        }
    }

    fn request(prompt: &str, system: Option<&str>, session: Option<String>) -> ChatRequest {
        ChatRequest {
            prompt: prompt.into(),
            provider: None,
            model: None,
            system_prompt: system.map(String::from),
            session_id: session,
        }
    }

    #[tokio::test]
    async fn generates_session_and_persists_history() {
        let provider = RecordingProvider::default();
        let client = ChatClient::new(provider.clone(), ClientConfig::new("gemini", "test-model"));

        let first = client
            .chat(request("hello", Some("be precise"), None))
            .await
            .expect("first call succeeds");

        let second = client
            .chat(request("next", None, Some(first.session_id.clone())))
            .await
            .expect("second call succeeds");

        assert_eq!(first.session_id, second.session_id);

        let records = provider.records().await;
        assert_eq!(records.len(), 2);

        let first_messages = &records[0].messages;
        assert_eq!(first_messages.len(), 2);
        assert_eq!(first_messages[0].role, MessageRole::System);

        let second_messages = &records[1].messages;
        assert_eq!(second_messages.len(), 3);
        assert_eq!(second_messages[0].role, MessageRole::User);
        assert_eq!(second_messages[1].role, MessageRole::Assistant);
        assert_eq!(second_messages[2].content, "next");
    }

    #[tokio::test]
    async fn applies_configured_defaults_and_overrides() {
        let provider = RecordingProvider::default();
        let client = ChatClient::new(provider.clone(), ClientConfig::new("gemini", "flash"));

        client
            .chat(request("one", None, None))
            .await
            .expect("default call succeeds");
        client
            .chat(ChatRequest {
                prompt: "two".into(),
                provider: Some("local".into()),
                model: Some("llama3".into()),
                system_prompt: None,
                session_id: None,
            })
            .await
            .expect("override call succeeds");

        let records = provider.records().await;
        assert_eq!(records[0].provider, "gemini");
        assert_eq!(records[0].model, "flash");
        assert_eq!(records[1].provider, "local");
        assert_eq!(records[1].model, "llama3");
    }

    #[tokio::test]
    async fn fresh_sessions_share_no_history() {
        let provider = RecordingProvider::default();
        let client = ChatClient::new(provider.clone(), ClientConfig::new("gemini", "flash"));

        let first = client.chat(request("one", None, None)).await.unwrap();
        let second = client.chat(request("two", None, None)).await.unwrap();

        assert_ne!(first.session_id, second.session_id);
        let records = provider.records().await;
        assert_eq!(records[1].messages.len(), 1);
    }

    #[test]
    fn preview_flattens_and_truncates() {
        assert_eq!(preview("  two\nlines  "), "two lines");
        let long = "x".repeat(200);
        let short = preview(&long);
        assert!(short.chars().count() <= PREVIEW_LIMIT + 1);
        assert!(short.ends_with('…'));
    }
}
