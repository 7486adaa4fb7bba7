//! trailhead-web - Leptos frontend for the Outdoor Adventures storefront
//!
//! The SPA resolves the current route to a category key, applies that
//! category's theme tokens document-wide, and mounts the matching header
//! variant. The `ssr` feature adds an Axum server that hosts the compiled
//! bundle together with a read-only fixture API for standalone development;
//! in production the real CMS backend sits behind the same `/api` paths.

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod lookup;
pub mod pages;
pub mod theme_dom;

#[cfg(feature = "ssr")]
pub mod fixtures;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
pub async fn run(port: u16) -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing::info;

    let router = create_router();

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Web server listening on http://{}", addr);
    println!("Web server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

/// Current wall-clock milliseconds, for cache freshness decisions.
///
/// `Date.now()` in the browser; `SystemTime` everywhere else so the same
/// lookup code runs under native tests.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}
