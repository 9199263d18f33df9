//! HTTP API application wiring (Axum router + pipeline composition).
//!
//! If you're new to Rust, this folder is structured like:
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: terminal rejections and their wire bodies
//!
//! The cross-cutting stages live in `crate::middleware` and are stacked here
//! in pipeline order: credential gate first, then activity recording, then
//! the route-specific work.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use catalog_observability::ActivityLog;
use catalog_store::ProductStore;

use crate::middleware;

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// The store and the activity sink are injected rather than global, so
/// independent instances can exist side by side in tests.
pub fn build_app(
    api_key: String,
    store: Arc<ProductStore>,
    activity: Arc<dyn ActivityLog>,
) -> Router {
    let gate_state = middleware::GateState {
        api_key: api_key.into(),
    };
    let activity_state = middleware::ActivityState { log: activity };

    // Gated routes. The ServiceBuilder stack runs top-down: the gate sits
    // outermost, so unauthorized requests never reach the activity log.
    let gated = routes::router().layer(Extension(store)).layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn_with_state(
                gate_state,
                middleware::require_api_key,
            ))
            .layer(axum::middleware::from_fn_with_state(
                activity_state,
                middleware::record_activity,
            )),
    );

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(gated)
}
