use axum::{
    http::Uri,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use uniswap_competition::render_document;

use crate::error::AppError;

pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

async fn home() -> Html<String> {
    Html(render_document())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(%uri, "no page for path");
    AppError::NotFound(format!("no page at {}", uri.path()))
}
