use async_trait::async_trait;
use thiserror::Error;

use portfolio_types::{ChatReply, ChatRequest};

/// Failures delivering a chat turn to the relay.
///
/// The widget shows the same apology for all of them; the variants only
/// matter for logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Sends one chat turn to the relay
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, TransportError>;
}

/// `fetch`-based transport posting JSON to the relay
#[cfg(target_arch = "wasm32")]
pub struct HttpTransport {
    url: String,
}

#[cfg(target_arch = "wasm32")]
impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl ChatTransport for HttpTransport {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        use gloo_net::http::Request;

        log::debug!("Posting {} messages to {}", request.messages.len(), self.url);

        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| TransportError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(TransportError::Status(response.status()));
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
