//! Per-category lookup cache and stale-response discipline
//!
//! The cache is clock-free: callers pass `now_ms` (a monotonic-enough
//! millisecond timestamp, `Date.now()` in the browser) so freshness logic
//! stays deterministic under test.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::category::CategoryKey;

/// Freshness window for style and header-config lookups.
pub const DEFAULT_TTL_MS: f64 = 5.0 * 60.0 * 1000.0;

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    stored_at_ms: f64,
}

/// TTL cache keyed by category.
///
/// Distinguishes "fresh" (within the freshness window, skip the network)
/// from "last known good" (any age, used when the network fails and a stale
/// value beats the hardcoded default).
#[derive(Debug)]
pub struct TtlCache<T> {
    entries: HashMap<CategoryKey, Entry<T>>,
    ttl_ms: f64,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl_ms: f64) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_ms,
        }
    }

    /// Cached value if it is still within the freshness window.
    pub fn fresh(&self, key: CategoryKey, now_ms: f64) -> Option<T> {
        let entry = self.entries.get(&key)?;
        if now_ms - entry.stored_at_ms <= self.ttl_ms {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Cached value regardless of age.
    pub fn last_known_good(&self, key: CategoryKey) -> Option<T> {
        self.entries.get(&key).map(|e| e.value.clone())
    }

    pub fn insert(&mut self, key: CategoryKey, value: T, now_ms: f64) {
        self.entries.insert(
            key,
            Entry {
                value,
                stored_at_ms: now_ms,
            },
        );
    }

    pub fn invalidate(&mut self, key: CategoryKey) {
        self.entries.remove(&key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}

/// Latest-request-wins generation counter.
///
/// Every route resolution begins a new generation; a fetch response is only
/// applied if its generation is still current, so a slow response for an
/// earlier category can never overwrite a newer category's theme.
///
/// The UI event loop is single-threaded; interleaving, not parallelism, is
/// the hazard here. Relaxed atomics are only used so the counter can live in
/// shared reactive context.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating all in-flight requests.
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether a response from generation `generation` may still be applied.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.load(Ordering::Relaxed) == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_within_window() {
        let mut cache = TtlCache::new(1_000.0);
        cache.insert(CategoryKey::Home, "v1", 0.0);

        assert_eq!(cache.fresh(CategoryKey::Home, 500.0), Some("v1"));
        assert_eq!(cache.fresh(CategoryKey::Home, 1_000.0), Some("v1"));
        assert_eq!(cache.fresh(CategoryKey::Home, 1_001.0), None);
    }

    #[test]
    fn test_last_known_good_survives_expiry() {
        let mut cache = TtlCache::new(1_000.0);
        cache.insert(CategoryKey::Home, "v1", 0.0);

        assert_eq!(cache.fresh(CategoryKey::Home, 60_000.0), None);
        assert_eq!(cache.last_known_good(CategoryKey::Home), Some("v1"));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut cache = TtlCache::new(1_000.0);
        cache.insert(CategoryKey::Home, "home", 0.0);

        assert_eq!(cache.fresh(CategoryKey::Default, 0.0), None);
        assert_eq!(cache.last_known_good(CategoryKey::Default), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut cache = TtlCache::new(1_000.0);
        cache.insert(CategoryKey::Home, "v1", 0.0);
        cache.insert(CategoryKey::Home, "v2", 500.0);

        assert_eq!(cache.fresh(CategoryKey::Home, 1_200.0), Some("v2"));
    }

    #[test]
    fn test_invalidate() {
        let mut cache = TtlCache::new(1_000.0);
        cache.insert(CategoryKey::Home, "v1", 0.0);
        cache.invalidate(CategoryKey::Home);

        assert_eq!(cache.last_known_good(CategoryKey::Home), None);
    }

    #[test]
    fn test_generation_latest_wins() {
        let generation = RequestGeneration::new();

        // Rapid navigation: /hiking then /camping
        let hiking = generation.begin();
        let camping = generation.begin();

        // The camping fetch resolves first and is applied
        assert!(generation.is_current(camping));
        // The slow hiking response arrives later and must be discarded
        assert!(!generation.is_current(hiking));
    }

    #[test]
    fn test_generation_single_request_stays_current() {
        let generation = RequestGeneration::new();
        let only = generation.begin();
        assert!(generation.is_current(only));
    }
}
