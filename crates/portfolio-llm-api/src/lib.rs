//! # portfolio-llm-api
//!
//! Client for the completion provider behind the portfolio chat relay.
//!
//! The relay only ever needs one thing from the provider: given a list of
//! chat messages, return the text of the first choice. That is the
//! [`CompletionClient`] trait. [`GroqClient`] implements it against any
//! OpenAI-compatible `chat/completions` endpoint, Groq by default.
//!
//! ## Example
//!
//! ```rust,no_run
//! use portfolio_llm_api::{CompletionClient, GroqClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GroqClient::builder()
//!         .api_key(Some("your-api-key".to_string()))
//!         .build();
//!
//!     let messages = vec![json!({ "role": "user", "content": "Hello!" })];
//!     let reply = client.chat_completion(&messages).await?;
//!     println!("Response: {}", reply);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;


// Re-export commonly used types
pub use client::{
    CompletionClient,
    CompletionError,
    groq::{GroqClient, GroqClientBuilder},
};

pub use config::{
    DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
    GROQ_API_URL,
    normalize_api_url,
    redact_api_key,
};
