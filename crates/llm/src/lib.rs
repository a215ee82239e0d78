use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure modes of a single chat-completion attempt. Callers are expected
/// to degrade to a well-shaped result rather than propagate these.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("failed to reach inference service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("inference service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

#[derive(Clone)]
pub struct ChatClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl ChatClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            base_url,
            model,
            client: reqwest::Client::new(),
        }
    }

    pub fn default() -> Self {
        Self::new(
            "http://localhost:11434".to_string(),
            "gemma3:4b".to_string(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One synchronous chat completion. Single attempt, no retry, transport
    /// default timeout.
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String, InferenceError> {
        let url = format!("{}/api/chat", self.base_url);

        let request = ChatRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(InferenceError::Status(response.status()));
        }

        let body = response.text().await?;
        let envelope: ChatResponse = serde_json::from_str(&body)?;

        Ok(envelope.message.content)
    }
}
