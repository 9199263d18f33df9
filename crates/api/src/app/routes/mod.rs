use axum::Router;

pub mod products;
pub mod system;

/// Router for all credential-gated endpoints.
pub fn router() -> Router {
    Router::new().nest("/products", products::router())
}
