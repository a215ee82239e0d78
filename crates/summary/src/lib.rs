pub mod prompt;

use llm::{ChatClient, ChatMessage};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One extracted event in a summary batch. Extra keys are ignored; `Cases`
/// may be a number or a sentinel string, so it stays loosely typed.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryEvent {
    #[serde(default, rename = "Disease")]
    pub disease: String,
    #[serde(default, rename = "Cases")]
    pub cases: Value,
    #[serde(default, rename = "Location")]
    pub location: String,
    #[serde(default, rename = "Country")]
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub time_key: String,
    #[serde(default)]
    pub events: Vec<SummaryEvent>,
}

/// Always carries a string: either the model's summary or a description of
/// the failure that prevented one.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub summary: String,
}

pub struct Summarizer {
    client: ChatClient,
}

impl Summarizer {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    pub fn default() -> Self {
        Self::new(ChatClient::default())
    }

    /// Summarize a batch of events for one time window. Never returns an
    /// error; transport failures are described inside the summary string.
    pub async fn summarize(&self, request: &SummaryRequest) -> SummaryResult {
        let message = ChatMessage::user(prompt::build_summary_prompt(request));

        let summary = match self.client.chat(&[message]).await {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "summary inference call failed");
                format!("Error during LLM response: {e}")
            }
        };

        SummaryResult { summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_loosely_typed_events() {
        let json = r#"{
            "time_key": "2025-06 / Nigeria",
            "events": [
                {"Disease": "Lassa Fever", "Cases": 12, "Location": "Lagos", "Country": "Nigeria", "Source": "feed-7"},
                {"Disease": "Ebola", "Cases": "PARSE_ERROR", "Location": "Paris", "Country": "France"}
            ]
        }"#;

        let request: SummaryRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.events.len(), 2);
        assert_eq!(request.events[0].cases, serde_json::json!(12));
        assert_eq!(request.events[1].cases, serde_json::json!("PARSE_ERROR"));
    }

    #[test]
    fn missing_event_fields_default() {
        let request: SummaryRequest = serde_json::from_str(r#"{"events":[{}]}"#).unwrap();

        assert_eq!(request.time_key, "");
        assert_eq!(request.events[0].disease, "");
        assert!(request.events[0].cases.is_null());
    }
}
