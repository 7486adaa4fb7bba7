//! Category resolution: URL path -> logical category key -> header variant
//!
//! The resolver is a total pure function over the first path segment. It is
//! the single source of truth for which theme record to fetch and which
//! header renderer to mount.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed allow-list of activity slugs the site knows about.
///
/// Anything outside this list resolves to the default category; admins add
/// new activities by extending this enum, not by writing arbitrary slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Hiking,
    Camping,
    Climbing,
    Kayaking,
    Fishing,
    Cycling,
}

impl Activity {
    pub const ALL: [Activity; 6] = [
        Activity::Hiking,
        Activity::Camping,
        Activity::Climbing,
        Activity::Kayaking,
        Activity::Fishing,
        Activity::Cycling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Hiking => "hiking",
            Activity::Camping => "camping",
            Activity::Climbing => "climbing",
            Activity::Kayaking => "kayaking",
            Activity::Fishing => "fishing",
            Activity::Cycling => "cycling",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Activity> {
        Self::ALL.iter().copied().find(|a| a.as_str() == slug)
    }

    /// Human-readable label for pickers and menu fallbacks.
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Hiking => "Hiking",
            Activity::Camping => "Camping",
            Activity::Climbing => "Climbing",
            Activity::Kayaking => "Kayaking",
            Activity::Fishing => "Fishing",
            Activity::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical category key derived from the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Home,
    Activity(Activity),
    Admin,
    Default,
}

impl CategoryKey {
    /// Resolve a location path to a category key.
    ///
    /// Only the first non-empty path segment matters: `/hiking/trails` and
    /// `/hiking` resolve identically. Total and deterministic; no I/O.
    pub fn resolve(path: &str) -> CategoryKey {
        let segment = path.split('/').find(|s| !s.is_empty());

        match segment {
            None => CategoryKey::Home,
            Some("admin") => CategoryKey::Admin,
            Some(slug) => match Activity::from_slug(slug) {
                Some(activity) => CategoryKey::Activity(activity),
                None => CategoryKey::Default,
            },
        }
    }

    /// API path segment for style/header-config lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Home => "home",
            CategoryKey::Activity(a) => a.as_str(),
            CategoryKey::Admin => "admin",
            CategoryKey::Default => "default",
        }
    }

    pub fn activity(&self) -> Option<Activity> {
        match self {
            CategoryKey::Activity(a) => Some(*a),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the three header renderers to mount.
///
/// Re-derived on every route change; never cached, since the rendered header
/// is part of the visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    Home,
    Category,
    Default,
}

impl HeaderVariant {
    pub fn for_key(key: CategoryKey) -> HeaderVariant {
        match key {
            CategoryKey::Home => HeaderVariant::Home,
            CategoryKey::Activity(_) => HeaderVariant::Category,
            CategoryKey::Admin | CategoryKey::Default => HeaderVariant::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_empty_and_root_are_home() {
        assert_eq!(CategoryKey::resolve(""), CategoryKey::Home);
        assert_eq!(CategoryKey::resolve("/"), CategoryKey::Home);
        assert_eq!(CategoryKey::resolve("//"), CategoryKey::Home);
    }

    #[test]
    fn test_resolve_known_activities() {
        assert_eq!(
            CategoryKey::resolve("/hiking"),
            CategoryKey::Activity(Activity::Hiking)
        );
        assert_eq!(
            CategoryKey::resolve("/cycling"),
            CategoryKey::Activity(Activity::Cycling)
        );
    }

    #[test]
    fn test_resolve_only_first_segment_matters() {
        assert_eq!(
            CategoryKey::resolve("/hiking/trails"),
            CategoryKey::resolve("/hiking")
        );
        assert_eq!(
            CategoryKey::resolve("/hiking/trails/alpine?sort=asc"),
            CategoryKey::Activity(Activity::Hiking)
        );
    }

    #[test]
    fn test_resolve_admin_and_fallback() {
        assert_eq!(CategoryKey::resolve("/admin"), CategoryKey::Admin);
        assert_eq!(CategoryKey::resolve("/admin/headers"), CategoryKey::Admin);
        assert_eq!(CategoryKey::resolve("/about"), CategoryKey::Default);
        assert_eq!(CategoryKey::resolve("/HIKING"), CategoryKey::Default);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        for path in ["", "/", "/hiking", "/admin", "/whatever/else"] {
            assert_eq!(CategoryKey::resolve(path), CategoryKey::resolve(path));
        }
    }

    #[test]
    fn test_header_variant_selection() {
        assert_eq!(
            HeaderVariant::for_key(CategoryKey::Home),
            HeaderVariant::Home
        );
        for activity in Activity::ALL {
            assert_eq!(
                HeaderVariant::for_key(CategoryKey::Activity(activity)),
                HeaderVariant::Category
            );
        }
        assert_eq!(
            HeaderVariant::for_key(CategoryKey::Admin),
            HeaderVariant::Default
        );
        assert_eq!(
            HeaderVariant::for_key(CategoryKey::Default),
            HeaderVariant::Default
        );
    }

    #[test]
    fn test_activity_slug_round_trip() {
        for activity in Activity::ALL {
            assert_eq!(Activity::from_slug(activity.as_str()), Some(activity));
        }
        assert_eq!(Activity::from_slug("snowboarding"), None);
    }
}
