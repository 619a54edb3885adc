#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use portfolio_llm_api::CompletionClient;
use portfolio_relay::{AllowedOrigins, AppState};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

/// What the mock provider does when called
#[derive(Clone)]
pub enum MockOutcome {
    Reply(String),
    Fail(String),
}

/// In-process completion client that records every call
pub struct MockCompletionClient {
    outcome: MockOutcome,
    calls: AtomicUsize,
    last_messages: Mutex<Option<Vec<Value>>>,
}

impl MockCompletionClient {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: MockOutcome::Reply(reply.to_string()),
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(None),
        })
    }

    pub fn failing(error: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: MockOutcome::Fail(error.to_string()),
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_messages(&self) -> Option<Vec<Value>> {
        self.last_messages.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CompletionClient for MockCompletionClient {
    async fn chat_completion(&self, messages: &[Value]) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = Some(messages.to_vec());

        match &self.outcome {
            MockOutcome::Reply(reply) => Ok(reply.clone()),
            MockOutcome::Fail(error) => Err(anyhow::anyhow!(error.clone())),
        }
    }
}

/// Full relay app (CORS + tracing) around a completion client
pub fn app_with(client: Arc<dyn CompletionClient>, origins: AllowedOrigins) -> Router {
    portfolio_relay::web::build_app(AppState::new(client), origins.cors_layer())
}

pub fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send one request and decode the JSON response
pub async fn send(app: Router, request: Request<Body>) -> (Response<Body>, Value) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (Response::from_parts(parts, Body::empty()), json)
}
