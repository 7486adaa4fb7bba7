//! Integration tests for the dev fixture API

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use trailhead_core::{CategoryStyle, HeaderConfig};

async fn get(router: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = trailhead_web::create_router();
    let (status, _) = get(router, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_style_endpoint_known_category() {
    let router = trailhead_web::create_router();
    let (status, body) = get(router, "/api/category-styles/hiking").await;

    assert_eq!(status, StatusCode::OK);
    let style: CategoryStyle = serde_json::from_slice(&body).unwrap();
    assert_eq!(style.category, "hiking");
    assert_eq!(style.primary_color_hex, "#F59E0B");
}

#[tokio::test]
async fn test_style_endpoint_unknown_category_is_404() {
    let router = trailhead_web::create_router();
    let (status, _) = get(router, "/api/category-styles/snowboarding").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_header_config_endpoint() {
    let router = trailhead_web::create_router();
    let (status, body) = get(router, "/api/header-configs/category/hiking").await;

    assert_eq!(status, StatusCode::OK);
    let header: HeaderConfig = serde_json::from_slice(&body).unwrap();
    assert_eq!(header.category, "hiking");
    // The seeded hiking menu carries mega-menu content
    assert!(header.menu_items.iter().any(|i| i.mega_menu().is_some()));
}

#[tokio::test]
async fn test_header_config_unknown_category_is_404() {
    let router = trailhead_web::create_router();
    let (status, _) = get(router, "/api/header-configs/category/bouldering").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_list_covers_all_categories() {
    let router = trailhead_web::create_router();
    let (status, body) = get(router, "/api/admin/header-configs").await;

    assert_eq!(status, StatusCode::OK);
    let all: Vec<HeaderConfig> = serde_json::from_slice(&body).unwrap();
    assert!(all.iter().any(|h| h.category == "home"));
    assert!(all.iter().any(|h| h.category == "hiking"));
    // Wire format round-trips cleanly through the models
    assert!(all.iter().all(|h| !h.category.is_empty()));
}
