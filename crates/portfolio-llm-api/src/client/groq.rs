use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::client::{ChatCompletion, CompletionClient, CompletionError};
use crate::config::{normalize_api_url, redact_api_key, DEFAULT_MODEL, DEFAULT_TEMPERATURE, GROQ_API_URL};

/// Groq (OpenAI-compatible) completion client
pub struct GroqClient {
    api_key: String,
    model: String,
    api_url: String,
    temperature: f64,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Value],
    temperature: f64,
}

impl GroqClient {
    pub fn new(api_key: String, model: String, api_url: String, temperature: f64) -> Self {
        Self {
            api_key,
            model,
            api_url: normalize_api_url(&api_url),
            temperature,
            client: reqwest::Client::new(),
        }
    }

    pub fn builder() -> GroqClientBuilder {
        GroqClientBuilder::default()
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn log_request(&self, message_count: usize) {
        let host = reqwest::Url::parse(&self.api_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "unknown".to_string());

        tracing::debug!(
            url = %self.api_url,
            host = %host,
            model = %self.model,
            temperature = self.temperature,
            authorization = %format!("Bearer {}", redact_api_key(&self.api_key)),
            message_count,
            "sending completion request"
        );
    }

    async fn send(&self, messages: &[Value]) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        self.log_request(messages.len());

        let mut builder = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .json(&request);
        if self.has_api_key() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status { status, body });
        }

        let response_text = response.text().await?;
        let completion: ChatCompletion = serde_json::from_str(&response_text)?;
        let reply = completion.into_reply();

        tracing::debug!(reply_len = reply.len(), "completion received");
        Ok(reply)
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn chat_completion(&self, messages: &[Value]) -> Result<String> {
        Ok(self.send(messages).await?)
    }
}

/// Builder for [`GroqClient`]; unset fields fall back to the portfolio defaults
#[derive(Debug, Default)]
pub struct GroqClientBuilder {
    api_key: Option<String>,
    model: Option<String>,
    api_url: Option<String>,
    temperature: Option<f64>,
}

impl GroqClientBuilder {
    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn build(self) -> GroqClient {
        GroqClient::new(
            self.api_key.unwrap_or_default(),
            self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            self.api_url.unwrap_or_else(|| GROQ_API_URL.to_string()),
            self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        )
    }
}
