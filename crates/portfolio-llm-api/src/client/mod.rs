use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use portfolio_types::deserialize_string_or_null;

pub mod groq;

/// Completion client trait - the one call the relay makes per chat turn
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `messages` as-is and return the first choice's text.
    ///
    /// Messages are raw JSON values: callers forward whatever the browser
    /// sent without re-validating each element. A response without choices
    /// or without content yields an empty string, not an error.
    async fn chat_completion(&self, messages: &[serde_json::Value]) -> Result<String>;
}

/// Failures talking to the completion provider
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("failed to reach completion provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion provider returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// OpenAI-compatible completion response, reduced to what we read
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(deserialize_with = "deserialize_string_or_null", default)]
    pub content: String,
}

impl ChatCompletion {
    /// Text of the first choice, empty when absent
    pub fn into_reply(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|message| message.content)
            .unwrap_or_default()
    }
}
