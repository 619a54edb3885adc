mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{app_with, chat_request, send};
use portfolio_llm_api::GroqClient;
use portfolio_relay::AllowedOrigins;
use portfolio_types::UPSTREAM_FAILURE_ERROR;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "gsk_relay_test";

fn groq_against(server: &MockServer) -> Arc<GroqClient> {
    Arc::new(
        GroqClient::builder()
            .api_key(Some(API_KEY.to_string()))
            .api_url(server.uri())
            .build(),
    )
}

#[tokio::test]
async fn test_relay_returns_provider_reply() {
    let server = MockServer::start().await;
    let messages = json!([
        { "role": "system", "content": "You are an AI assistant for the portfolio website." },
        { "role": "user", "content": "Apa skill Ahmad?" }
    ]);

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", format!("Bearer {}", API_KEY).as_str()))
        .and(body_partial_json(json!({
            "model": "llama-3.1-8b-instant",
            "temperature": 0.6,
            "messages": messages,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": "React dan Laravel." } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = json!({ "messages": messages });
    let (response, reply) = send(app_with(groq_against(&server), AllowedOrigins::Any), chat_request(&body.to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(reply, json!({ "reply": "React dan Laravel." }));
}

#[tokio::test]
async fn test_relay_reply_empty_without_choices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let (response, reply) = send(
        app_with(groq_against(&server), AllowedOrigins::Any),
        chat_request(r#"{"messages":[{"role":"user","content":"hi"}]}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(reply, json!({ "reply": "" }));
}

#[tokio::test]
async fn test_relay_maps_provider_error_to_500() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("over capacity"))
        .expect(1)
        .mount(&server)
        .await;

    let (response, reply) = send(
        app_with(groq_against(&server), AllowedOrigins::Any),
        chat_request(r#"{"messages":[{"role":"user","content":"hi"}]}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply, json!({ "error": UPSTREAM_FAILURE_ERROR }));
}

#[tokio::test]
async fn test_relay_never_calls_provider_on_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let (response, _) = send(
        app_with(groq_against(&server), AllowedOrigins::Any),
        chat_request(r#"{"messages":"not an array"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
