//! Cached remote style lookup with latest-request-wins
//!
//! One instance lives in reactive context for the whole app. A route change
//! reads `snapshot` synchronously (cache-or-fallback, so the page paints
//! themed immediately), then `refresh` runs the network round trips and the
//! caller applies the result only if its navigation generation is still
//! current.

use leptos::prelude::*;

use trailhead_core::{
    CategoryKey, CategoryStyle, HeaderConfig, LookupError, RequestGeneration, TtlCache,
};

use crate::api;
use crate::now_ms;

/// Cached lookup of per-category style and header-config records.
#[derive(Clone, Copy)]
pub struct StyleLookup {
    styles: StoredValue<TtlCache<CategoryStyle>>,
    headers: StoredValue<TtlCache<HeaderConfig>>,
    generation: StoredValue<RequestGeneration>,
}

impl StyleLookup {
    pub fn new() -> Self {
        Self {
            styles: StoredValue::new(TtlCache::default()),
            headers: StoredValue::new(TtlCache::default()),
            generation: StoredValue::new(RequestGeneration::new()),
        }
    }

    /// Begin a navigation, invalidating responses still in flight for
    /// earlier routes.
    pub fn begin_navigation(&self) -> u64 {
        self.generation.with_value(|g| g.begin())
    }

    /// Whether a response tagged with `generation` may still be applied.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.with_value(|g| g.is_current(generation))
    }

    /// Best immediately-available records for `key`: cached value of any
    /// age, else the hardcoded defaults. Never blocks, never fails.
    pub fn snapshot(&self, key: CategoryKey) -> (CategoryStyle, HeaderConfig) {
        let style = self
            .styles
            .with_value(|c| c.last_known_good(key))
            .unwrap_or_else(|| CategoryStyle::fallback(key));
        let header = self
            .headers
            .with_value(|c| c.last_known_good(key))
            .unwrap_or_else(|| HeaderConfig::fallback(key));
        (style, header)
    }

    /// Whether either record for `key` is missing or outside the freshness
    /// window.
    pub fn needs_refresh(&self, key: CategoryKey) -> bool {
        let now = now_ms();
        self.styles.with_value(|c| c.fresh(key, now).is_none())
            || self.headers.with_value(|c| c.fresh(key, now).is_none())
    }

    /// Fetch any non-fresh records for `key`, updating the caches, and return the
    /// best available pair. Failures are logged and absorbed: a stale cached
    /// record beats the default for transient failures, the default stands
    /// in for authoritative NotFound.
    pub async fn refresh(&self, key: CategoryKey) -> (CategoryStyle, HeaderConfig) {
        let style = match self.styles.with_value(|c| c.fresh(key, now_ms())) {
            Some(style) => style,
            None => match api::fetch_style(key).await {
                Ok(style) => {
                    self.styles
                        .update_value(|c| c.insert(key, style.clone(), now_ms()));
                    style
                }
                Err(err) => self.style_fallback(key, err),
            },
        };

        let header = match self.headers.with_value(|c| c.fresh(key, now_ms())) {
            Some(header) => header,
            None => match api::fetch_header_config(key).await {
                Ok(header) => {
                    self.headers
                        .update_value(|c| c.insert(key, header.clone(), now_ms()));
                    header
                }
                Err(err) => self.header_fallback(key, err),
            },
        };

        (style, header)
    }

    fn style_fallback(&self, key: CategoryKey, err: LookupError) -> CategoryStyle {
        leptos::logging::warn!("style lookup failed for '{}': {}", key, err);
        if err.prefer_stale_cache() {
            if let Some(stale) = self.styles.with_value(|c| c.last_known_good(key)) {
                return stale;
            }
        }
        CategoryStyle::fallback(key)
    }

    fn header_fallback(&self, key: CategoryKey, err: LookupError) -> HeaderConfig {
        leptos::logging::warn!("header config lookup failed for '{}': {}", key, err);
        if err.prefer_stale_cache() {
            if let Some(stale) = self.headers.with_value(|c| c.last_known_good(key)) {
                return stale;
            }
        }
        HeaderConfig::fallback(key)
    }
}

impl Default for StyleLookup {
    fn default() -> Self {
        Self::new()
    }
}
