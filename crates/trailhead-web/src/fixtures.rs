//! In-memory fixture data for standalone development
//!
//! The real CMS backend owns persistence and the admin write path; this
//! store only seeds the read endpoints so `trailhead serve` works without
//! one. Categories outside the seed set return 404, exercising the client's
//! NotFound fallback.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;

use trailhead_core::{
    Activity, CategoryKey, CategoryStyle, HeaderConfig, MegaMenuCategory, MegaMenuItem, MenuItem,
};

/// Read-only category data served by the dev API.
pub struct FixtureStore {
    styles: RwLock<HashMap<String, CategoryStyle>>,
    headers: RwLock<HashMap<String, HeaderConfig>>,
}

impl FixtureStore {
    /// Store seeded with a style and header config per known category.
    pub fn seeded() -> Self {
        let mut styles = HashMap::new();
        let mut headers = HashMap::new();

        for (key, hex, banner) in [
            (CategoryKey::Home, "#2D6A4F", Some("Summer trips are live")),
            (
                CategoryKey::Activity(Activity::Hiking),
                "#F59E0B",
                Some("New alpine routes for 2026"),
            ),
            (CategoryKey::Activity(Activity::Camping), "#2F855A", None),
            (CategoryKey::Activity(Activity::Climbing), "#9C4221", None),
            (CategoryKey::Activity(Activity::Kayaking), "#2B6CB0", None),
            (CategoryKey::Activity(Activity::Fishing), "#285E61", None),
            (CategoryKey::Activity(Activity::Cycling), "#6B46C1", None),
            (CategoryKey::Default, "#2D6A4F", None),
        ] {
            let category = key.as_str().to_string();

            let mut style = CategoryStyle::fallback(key);
            style.primary_color_hex = hex.to_string();
            style.updated_at = Some(Utc::now());
            styles.insert(category.clone(), style);

            let mut header = HeaderConfig::fallback(key);
            header.id = Some(format!("hdr-{category}"));
            header.primary_color = Some(hex.to_string());
            header.banner_text = banner.map(str::to_string);
            if key == CategoryKey::Activity(Activity::Hiking) {
                header.menu_items = hiking_menu();
            }
            header.updated_at = Some(Utc::now());
            headers.insert(category, header);
        }

        Self {
            styles: RwLock::new(styles),
            headers: RwLock::new(headers),
        }
    }

    pub fn style(&self, category: &str) -> Option<CategoryStyle> {
        self.styles.read().get(category).cloned()
    }

    pub fn header(&self, category: &str) -> Option<HeaderConfig> {
        self.headers.read().get(category).cloned()
    }

    /// All header configs, ordered by category for stable picker output.
    pub fn all_headers(&self) -> Vec<HeaderConfig> {
        let mut all: Vec<_> = self.headers.read().values().cloned().collect();
        all.sort_by(|a, b| a.category.cmp(&b.category));
        all
    }
}

/// Hiking gets a full mega-menu tree so the hover machinery has something
/// real to render in development.
fn hiking_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "hiking-trails".into(),
            label: "Trails".into(),
            path: "/hiking/trails".into(),
            order: 0,
            has_mega_menu: true,
            mega_menu_categories: vec![
                MegaMenuCategory {
                    id: "by-region".into(),
                    title: "By region".into(),
                    order: 0,
                    items: vec![
                        MegaMenuItem {
                            id: "alpine".into(),
                            label: "Alpine".into(),
                            path: "/hiking/trails/alpine".into(),
                            order: 0,
                            featured_item: true,
                        },
                        MegaMenuItem {
                            id: "coastal".into(),
                            label: "Coastal".into(),
                            path: "/hiking/trails/coastal".into(),
                            order: 1,
                            featured_item: false,
                        },
                        MegaMenuItem {
                            id: "desert".into(),
                            label: "Desert".into(),
                            path: "/hiking/trails/desert".into(),
                            order: 2,
                            featured_item: false,
                        },
                    ],
                },
                MegaMenuCategory {
                    id: "by-length".into(),
                    title: "By length".into(),
                    order: 1,
                    items: vec![
                        MegaMenuItem {
                            id: "day-hikes".into(),
                            label: "Day hikes".into(),
                            path: "/hiking/trails/day".into(),
                            order: 0,
                            featured_item: false,
                        },
                        MegaMenuItem {
                            id: "thru-hikes".into(),
                            label: "Thru-hikes".into(),
                            path: "/hiking/trails/thru".into(),
                            order: 1,
                            featured_item: false,
                        },
                    ],
                },
            ],
        },
        MenuItem {
            id: "hiking-gear".into(),
            label: "Gear".into(),
            path: "/hiking/gear".into(),
            order: 1,
            has_mega_menu: true,
            mega_menu_categories: vec![MegaMenuCategory {
                id: "essentials".into(),
                title: "Essentials".into(),
                order: 0,
                items: vec![
                    MegaMenuItem {
                        id: "boots".into(),
                        label: "Boots".into(),
                        path: "/hiking/gear/boots".into(),
                        order: 0,
                        featured_item: false,
                    },
                    MegaMenuItem {
                        id: "packs".into(),
                        label: "Packs".into(),
                        path: "/hiking/gear/packs".into(),
                        order: 1,
                        featured_item: false,
                    },
                ],
            }],
        },
        MenuItem {
            id: "hiking-guides".into(),
            label: "Guides".into(),
            path: "/hiking/guides".into(),
            order: 2,
            has_mega_menu: false,
            mega_menu_categories: Vec::new(),
        },
    ]
}
