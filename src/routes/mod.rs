use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{error::ErrorBody, state::AppState};

pub mod doc;
pub mod extract;
pub mod health;
pub mod orders;
pub mod products;

/// Largest accepted request body; bigger bodies are answered with a JSON 413.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

// Build the router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/products", products::router())
        .nest("/orders", orders::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    let body = ErrorBody {
        error: format!("no route for {}", uri.path()),
    };
    (StatusCode::NOT_FOUND, Json(body))
}
