//! API client for the category style and header-config endpoints
//!
//! Pure consumer of the CMS backend's JSON REST API. Every failure is
//! mapped into the `LookupError` taxonomy; callers decide between the
//! last-known-good cache and the hardcoded fallback, and nothing propagates
//! to a user-visible error.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use trailhead_core::{CategoryKey, CategoryStyle, HeaderConfig, LookupError};

/// Base path for API requests. The dev server and the production reverse
/// proxy both mount the backend under `/api`.
pub const API_BASE: &str = "/api";

async fn get_json<T: DeserializeOwned>(
    url: &str,
    resource: &'static str,
    category: &str,
) -> Result<T, LookupError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LookupError::network(e.to_string()))?;

    if response.status() == 404 {
        return Err(LookupError::not_found(resource, category));
    }
    if !response.ok() {
        return Err(LookupError::network(format!(
            "HTTP {} from {}",
            response.status(),
            url
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| LookupError::malformed(e.to_string()))
}

/// `GET /api/category-styles/{category}`
pub async fn fetch_style(key: CategoryKey) -> Result<CategoryStyle, LookupError> {
    let url = format!("{}/category-styles/{}", API_BASE, key.as_str());
    get_json(&url, "category style", key.as_str()).await
}

/// `GET /api/header-configs/category/{category}`
pub async fn fetch_header_config(key: CategoryKey) -> Result<HeaderConfig, LookupError> {
    let url = format!("{}/header-configs/category/{}", API_BASE, key.as_str());
    get_json(&url, "header config", key.as_str()).await
}

/// `GET /api/admin/header-configs` - all configs, for the cross-category
/// activity picker in the admin editor.
pub async fn fetch_all_header_configs() -> Result<Vec<HeaderConfig>, LookupError> {
    let url = format!("{}/admin/header-configs", API_BASE);
    get_json(&url, "header configs", "all").await
}
