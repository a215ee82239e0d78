pub mod parser;
pub mod prompt;

pub use parser::{RelevanceVerdict, parse_verdict};
pub use prompt::cutoff_date;

use llm::{ChatClient, ChatMessage};
use serde::Deserialize;

/// Article subset the relevance check reads; the locations hint is not used
/// here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub translated: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "importDateUTC")]
    pub import_date_utc: String,
}

pub struct Classifier {
    client: ChatClient,
}

impl Classifier {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    pub fn default() -> Self {
        Self::new(ChatClient::default())
    }

    /// Judge whether an article carries an outbreak signal. Fails closed on
    /// transport failure; never returns an error to the caller.
    pub async fn classify(&self, article: &Article) -> RelevanceVerdict {
        let message = ChatMessage::user(prompt::build_relevance_prompt(article));

        match self.client.chat(&[message]).await {
            Ok(content) => parser::parse_verdict(content.trim()),
            Err(e) => {
                tracing::warn!(error = %e, "relevance inference call failed");
                RelevanceVerdict {
                    relevant: 0,
                    reason: format!("Inference request failed: {e}"),
                }
            }
        }
    }
}
