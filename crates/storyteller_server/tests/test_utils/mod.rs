//! Test utilities for Storyteller server tests.
//!
//! This module provides a mock completion driver and request helpers.

#![allow(dead_code)]

pub mod mock_driver;

pub use mock_driver::{MockBehavior, MockCompletionDriver};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

/// Sends one request through the router and returns status and JSON body.
pub async fn send(app: Router, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

/// Builds a JSON `POST /api/v1/create-story` request.
pub fn create_story_request(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/create-story")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .expect("valid request")
}

/// Request body for the Ana/Tokyo scenario.
pub fn tokyo_story() -> Value {
    serde_json::json!({
        "story": {
            "theme": "Loss",
            "characters": [{
                "givenName": "Ana",
                "familyName": "",
                "age": 30,
                "attributes": ["brave"],
                "occupation": "pilot"
            }],
            "location": "Tokyo",
            "time": "2040",
            "conflict": "war",
            "plotPoint": "crash",
            "tone": "somber",
            "ending": "bittersweet"
        }
    })
}
