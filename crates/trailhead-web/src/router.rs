//! Web router using Axum
//!
//! Hosts the compiled SPA bundle and a read-only fixture API for standalone
//! development. In production the same `/api` paths are served by the CMS
//! backend through a reverse proxy; nothing here owns writes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::debug;

use crate::fixtures::FixtureStore;

/// Create the web router
pub fn create_router() -> Router {
    create_router_with_store(Arc::new(FixtureStore::seeded()))
}

pub fn create_router_with_store(store: Arc<FixtureStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/category-styles/{category}", get(style_handler))
        .route(
            "/api/header-configs/category/{category}",
            get(header_handler),
        )
        .route("/api/admin/header-configs", get(all_headers_handler))
        .fallback_service(ServeDir::new("crates/trailhead-web/dist"))
        .layer(cors)
        .with_state(store)
}

async fn index_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Outdoor Adventures</title>
</head>
<body>
    <h1>Outdoor Adventures - frontend build required</h1>
    <p>The Leptos WASM bundle has not been compiled yet.</p>
    <ol>
        <li><code>cargo install trunk</code></li>
        <li><code>rustup target add wasm32-unknown-unknown</code></li>
        <li><code>cd crates/trailhead-web && trunk build --release</code></li>
        <li><code>trailhead serve</code></li>
    </ol>
    <p>Fixture API endpoints are live now: <a href="/api/health">/api/health</a>,
       <a href="/api/category-styles/hiking">/api/category-styles/hiking</a>,
       <a href="/api/admin/header-configs">/api/admin/header-configs</a></p>
</body>
</html>"#,
    )
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn style_handler(
    State(store): State<Arc<FixtureStore>>,
    Path(category): Path<String>,
) -> Response {
    debug!(category = %category, "style lookup");
    match store.style(&category) {
        Some(style) => Json(style).into_response(),
        None => not_found(&category),
    }
}

async fn header_handler(
    State(store): State<Arc<FixtureStore>>,
    Path(category): Path<String>,
) -> Response {
    debug!(category = %category, "header config lookup");
    match store.header(&category) {
        Some(header) => Json(header).into_response(),
        None => not_found(&category),
    }
}

async fn all_headers_handler(State(store): State<Arc<FixtureStore>>) -> Json<serde_json::Value> {
    let all = store.all_headers();
    Json(serde_json::to_value(all).unwrap_or(serde_json::Value::Null))
}

fn not_found(category: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": format!("unknown category '{category}'") })),
    )
        .into_response()
}
