use std::sync::Arc;

use axum::{
    extract::State,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use catalog_observability::{ActivityLog, ActivityRecord};

use crate::app::errors::ApiError;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct GateState {
    pub api_key: Arc<str>,
}

/// Reject any request whose `x-api-key` header is absent or differs from the
/// configured secret. Runs before everything else, so rejected requests never
/// reach the activity log or a handler.
pub async fn require_api_key(
    State(state): State<GateState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if presented != Some(&*state.api_key) {
        return ApiError::Unauthorized.into_response();
    }

    next.run(req).await
}

#[derive(Clone)]
pub struct ActivityState {
    pub log: Arc<dyn ActivityLog>,
}

/// Record method, path (with query string), and timestamp for every request
/// that made it past the gate. Observation only: the outcome downstream,
/// success or failure, is not this stage's concern.
pub async fn record_activity(
    State(state): State<ActivityState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    state.log.record(ActivityRecord {
        method: req.method().to_string(),
        path,
        at: Utc::now(),
    });

    next.run(req).await
}
