//! HTTP routes for story generation and health checks.

use crate::{Rejection, StoryOutcome, verify_request};
use axum::extract::rejection::JsonRejection;
use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use storyteller_core::{Story, build_prompt};
use storyteller_models::CompletionDriver;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    driver: Arc<dyn CompletionDriver>,
}

impl AppState {
    /// Creates state around the completion driver.
    pub fn new(driver: Arc<dyn CompletionDriver>) -> Self {
        Self { driver }
    }
}

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/create-story", post(create_story))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Story generation endpoint.
#[instrument(skip_all)]
async fn create_story(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> StoryOutcome {
    let body = match verify_request(payload) {
        Ok(body) => body,
        Err(rejection) => {
            warn!(msg = rejection.message(), "Rejected request body");
            return StoryOutcome::Rejected(rejection);
        }
    };

    let story = match Story::from_request_body(&body) {
        Ok(story) => story,
        Err(e) => {
            let rejection = Rejection::from(e.kind());
            warn!(reason = %e.kind(), msg = rejection.message(), "Rejected story");
            return StoryOutcome::Rejected(rejection);
        }
    };

    info!(
        theme = %story.theme(),
        characters = story.characters().len(),
        location = %story.location(),
        plot_point = %story.plot_point(),
        provider = state.driver.provider_name(),
        model = %state.driver.model_name(),
        "Generating story"
    );

    let prompt = build_prompt(&story);
    debug!(prompt = %prompt, "Built prompt");

    match state.driver.complete(&prompt).await {
        Ok(text) => {
            info!(chars = text.len(), "Story created");
            StoryOutcome::Created(text)
        }
        Err(e) => {
            warn!(category = e.kind().category(), "Responding with server error");
            StoryOutcome::Failed(e)
        }
    }
}
