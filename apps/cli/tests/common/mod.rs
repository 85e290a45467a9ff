//! Common test utilities for integration tests.
//!
//! This module provides:
//! - StubServer, a local chat-completions endpoint built on axum
//! - Config and fixture helpers

#![allow(dead_code)]

pub mod fixtures;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use md_to_anki::config::{Config, API_KEY_VAR, API_URL_VAR, DELAY_VAR};

pub const TEST_API_KEY: &str = "sk-test";

/// How the stub answers every request.
#[derive(Debug, Clone)]
pub enum StubMode {
    /// Answer like a cooperative model, see [`fixtures::fixture_reply`].
    Fixture,
    /// Reply with this status and a plain-text body.
    Status(StatusCode),
    /// Reply 200 with this JSON body.
    Body(Value),
    /// Record the request and never answer.
    Hang,
}

/// A request as seen by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

impl RecordedRequest {
    pub fn prompt(&self) -> &str {
        self.body["messages"][0]["content"].as_str().unwrap_or_default()
    }
}

#[derive(Clone)]
struct StubState {
    mode: StubMode,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Chat-completions endpoint on an ephemeral local port.
pub struct StubServer {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub async fn start(mode: StubMode) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            mode,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/v1/chat/completions", post(chat))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Self {
            url: format!("http://{}/v1/chat/completions", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Resolve once the stub has seen at least one request.
    pub async fn first_request(&self) {
        while self.requests.lock().unwrap().is_empty() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Configuration pointing at this stub with no pacing delay.
    pub fn config(&self) -> Config {
        config_for(&self.url)
    }
}

pub fn config_for(url: &str) -> Config {
    let url = url.to_string();
    Config::from_lookup(move |name| match name {
        n if n == API_KEY_VAR => Some(TEST_API_KEY.to_string()),
        n if n == API_URL_VAR => Some(url.clone()),
        n if n == DELAY_VAR => Some("0".to_string()),
        _ => None,
    })
    .expect("test config")
}

async fn chat(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let request = RecordedRequest {
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    };
    let prompt = request.prompt().to_string();
    state.requests.lock().unwrap().push(request);

    match &state.mode {
        StubMode::Fixture => Json(completion(&fixtures::fixture_reply(&prompt))).into_response(),
        StubMode::Status(status) => (*status, "upstream exploded").into_response(),
        StubMode::Body(value) => Json(value.clone()).into_response(),
        StubMode::Hang => std::future::pending().await,
    }
}

/// Chat-completions response body carrying `content`.
pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}
