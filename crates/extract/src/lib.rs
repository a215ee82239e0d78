pub mod normalizer;
pub mod parser;
pub mod prompt;
pub mod schema;

pub use schema::{
    ArticleFields, CaseCount, DISEASE_WHITELIST, ExtractionOutcome, ExtractionRecord, PARSE_ERROR,
};

use llm::{ChatClient, ChatMessage};

pub struct Extractor {
    client: ChatClient,
}

impl Extractor {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    pub fn default() -> Self {
        Self::new(ChatClient::default())
    }

    /// Extract a structured outbreak signal from partial article fields.
    /// Transport failures degrade to an `Unparsed` outcome; this never
    /// returns an error to the caller.
    pub async fn extract(&self, article: &ArticleFields) -> ExtractionOutcome {
        let messages = vec![
            ChatMessage::system(prompt::SYSTEM_PROMPT),
            ChatMessage::user(prompt::build_user_message(article)),
        ];

        match self.client.chat(&messages).await {
            Ok(content) => parser::parse_extraction(content.trim()),
            Err(e) => {
                tracing::warn!(error = %e, "extraction inference call failed");
                ExtractionOutcome::Unparsed {
                    error: format!("Inference request failed: {e}"),
                    raw: String::new(),
                }
            }
        }
    }
}
