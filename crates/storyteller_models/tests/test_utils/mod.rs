//! Test utilities for Storyteller model tests.
//!
//! Provides an in-process fake of an OpenAI-compatible service.

#![allow(dead_code)]

use axum::Router;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use storyteller_core::{Character, Prompt, Story, build_prompt};

/// A request received by the fake upstream.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

/// Handle to a running fake upstream.
pub struct FakeUpstream {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl FakeUpstream {
    /// Starts a server on an ephemeral port answering every request with
    /// the given status and body.
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = captured.clone();

        let app = Router::new().fallback(move |uri: Uri, headers: HeaderMap, raw: String| {
            let sink = sink.clone();
            async move {
                let authorization = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                sink.lock().unwrap().push(CapturedRequest {
                    path: uri.path().to_string(),
                    authorization,
                    body: serde_json::from_str(&raw).unwrap_or(Value::Null),
                });
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake upstream");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake upstream");
        });

        Self {
            base_url: format!("http://{}/v1", addr),
            captured,
        }
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

/// Prompt for a small but complete story.
pub fn sample_prompt() -> Prompt {
    let character = Character::builder()
        .given_name("Ana")
        .family_name("Lopez")
        .age(30u32)
        .attributes(vec!["brave".to_string(), "curious".to_string()])
        .occupation("pilot")
        .build()
        .expect("valid character");

    let story = Story::builder()
        .theme("Redemption")
        .characters(vec![character])
        .location("Lisbon")
        .time("1920s")
        .conflict("a lost letter")
        .plot_point("a storm grounds every plane")
        .tone("wistful")
        .ending("bittersweet")
        .build()
        .expect("valid story");

    build_prompt(&story)
}
