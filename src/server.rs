use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, warn};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::error::ExtractError;
use crate::model::ExtractionRequest;
use crate::pipeline::RecipeExtractor;

const BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

/// Routes served by the binary. Callers are expected to be authenticated upstream.
pub fn router(extractor: Arc<RecipeExtractor>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/extract", post(extract_endpoint))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(extractor)
}

async fn health() -> impl IntoResponse {
    Json(json!({"ok": true}))
}

async fn extract_endpoint(
    State(extractor): State<Arc<RecipeExtractor>>,
    payload: Result<Json<ExtractionRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match extractor.extract(&request).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn rejection_response(rejection: JsonRejection) -> Response {
    let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        StatusCode::PAYLOAD_TOO_LARGE
    } else {
        StatusCode::BAD_REQUEST
    };
    (
        status,
        Json(json!({"errors": [{"msg": rejection.body_text()}]})),
    )
        .into_response()
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        match &self {
            ExtractError::Validation(_) | ExtractError::Scrape(_) => {
                warn!("Rejected extraction request: {}", self);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": self.to_string()})),
                )
                    .into_response()
            }
            ExtractError::MalformedResponse(e) => {
                error!("Completion API returned malformed JSON: {}", e);
                internal_error()
            }
            ExtractError::ExtractionApi(e) => {
                error!("Completion API call failed: {}", e);
                internal_error()
            }
            ExtractError::Config(msg) => {
                error!("Configuration error: {}", msg);
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Internal Server Error"})),
    )
        .into_response()
}
