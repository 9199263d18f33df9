use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use catalog_core::ProductId;
use catalog_products::{stats, ProductDraft, ProductQuery};
use catalog_store::ProductStore;

use crate::app::errors::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/stats", get(product_stats))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    Extension(store): Extension<Arc<ProductStore>>,
    Query(query): Query<ProductQuery>,
) -> axum::response::Response {
    let page = query.apply(&store.list());
    (StatusCode::OK, Json(page)).into_response()
}

pub async fn product_stats(
    Extension(store): Extension<Arc<ProductStore>>,
) -> axum::response::Response {
    // Stats always cover the whole snapshot; listing parameters do not apply.
    let counts = stats::category_counts(&store.list());
    (StatusCode::OK, Json(counts)).into_response()
}

pub async fn get_product(
    Extension(store): Extension<Arc<ProductStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return ApiError::NotFound.into_response(),
    };

    match store.get(&id) {
        Some(product) => (StatusCode::OK, Json(product)).into_response(),
        None => ApiError::NotFound.into_response(),
    }
}

pub async fn create_product(
    Extension(store): Extension<Arc<ProductStore>>,
    Json(draft): Json<ProductDraft>,
) -> axum::response::Response {
    let fields = match draft.validate() {
        Ok(fields) => fields,
        Err(e) => return ApiError::from(e).into_response(),
    };

    let product = store.insert(fields);
    (StatusCode::CREATED, Json(product)).into_response()
}

pub async fn update_product(
    Extension(store): Extension<Arc<ProductStore>>,
    Path(id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> axum::response::Response {
    // Updates obey the same required-field rule as creates, and that check
    // comes first: an incomplete payload is a 400 even for an unknown id.
    if let Err(e) = draft.clone().validate() {
        return ApiError::from(e).into_response();
    }

    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return ApiError::NotFound.into_response(),
    };

    match store.update(&id, draft) {
        Some(product) => (StatusCode::OK, Json(product)).into_response(),
        None => ApiError::NotFound.into_response(),
    }
}

pub async fn delete_product(
    Extension(store): Extension<Arc<ProductStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return ApiError::NotFound.into_response(),
    };

    match store.remove(&id) {
        Some(product) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Product deleted",
                "product": product,
            })),
        )
            .into_response(),
        None => ApiError::NotFound.into_response(),
    }
}
