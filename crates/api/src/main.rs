use std::sync::Arc;

use catalog_observability::{ActivityLog, TracingActivityLog};
use catalog_store::ProductStore;

#[tokio::main]
async fn main() {
    catalog_observability::init();

    let api_key = std::env::var("API_KEY").unwrap_or_else(|_| {
        tracing::warn!("API_KEY not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let store = Arc::new(ProductStore::new());
    let activity: Arc<dyn ActivityLog> = Arc::new(TracingActivityLog);

    let app = catalog_api::app::build_app(api_key, store, activity);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
