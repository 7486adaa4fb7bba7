//! Header configuration: logo, menu items, mega-menu tree

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Activity, CategoryKey};
use crate::models::style::DEFAULT_PRIMARY_HEX;

/// Per-category header configuration persisted by the admin editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    #[serde(default)]
    pub id: Option<String>,
    pub category: String,
    #[serde(default)]
    pub logo_src: Option<String>,
    #[serde(default)]
    pub logo_text: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub banner_text: Option<String>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub path: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub has_mega_menu: bool,
    #[serde(default)]
    pub mega_menu_categories: Vec<MegaMenuCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MegaMenuCategory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub items: Vec<MegaMenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MegaMenuItem {
    pub id: String,
    pub label: String,
    pub path: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub featured_item: bool,
}

impl HeaderConfig {
    /// Menu items in render order: ascending `order`, ties keeping fetch
    /// order (stable sort).
    pub fn sorted_menu_items(&self) -> Vec<MenuItem> {
        let mut items = self.menu_items.clone();
        items.sort_by_key(|item| item.order);
        items
    }

    /// Hardcoded default header for a category with no persisted config:
    /// site logo text plus a four-item activity menu, no mega-menus.
    pub fn fallback(key: CategoryKey) -> HeaderConfig {
        let default_menu = [
            Activity::Hiking,
            Activity::Camping,
            Activity::Climbing,
            Activity::Kayaking,
        ];

        HeaderConfig {
            id: None,
            category: key.as_str().to_string(),
            logo_src: None,
            logo_text: Some("Outdoor Adventures".to_string()),
            primary_color: Some(DEFAULT_PRIMARY_HEX.to_string()),
            banner_text: None,
            menu_items: default_menu
                .iter()
                .enumerate()
                .map(|(i, activity)| MenuItem {
                    id: format!("default-{}", activity.as_str()),
                    label: activity.label().to_string(),
                    path: format!("/{}", activity.as_str()),
                    order: i as i32,
                    has_mega_menu: false,
                    mega_menu_categories: Vec::new(),
                })
                .collect(),
            updated_at: None,
        }
    }
}

impl MenuItem {
    /// The mega-menu panel content, if this item actually has one.
    ///
    /// Write-side validation owns the `has_mega_menu <=> non-empty` invariant;
    /// this side tolerates the violation by rendering no panel when the flag
    /// is set but the tree is empty.
    pub fn mega_menu(&self) -> Option<&[MegaMenuCategory]> {
        if self.has_mega_menu && !self.mega_menu_categories.is_empty() {
            Some(&self.mega_menu_categories)
        } else {
            None
        }
    }

    /// Mega-menu columns in render order (stable sort on `order`).
    pub fn sorted_mega_menu(&self) -> Vec<MegaMenuCategory> {
        let mut categories = self.mega_menu().unwrap_or_default().to_vec();
        categories.sort_by_key(|c| c.order);
        categories
    }
}

impl MegaMenuCategory {
    pub fn sorted_items(&self) -> Vec<MegaMenuItem> {
        let mut items = self.items.clone();
        items.sort_by_key(|i| i.order);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, order: i32) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            label: id.to_uppercase(),
            path: format!("/{id}"),
            order,
            has_mega_menu: false,
            mega_menu_categories: Vec::new(),
        }
    }

    #[test]
    fn test_menu_items_sorted_by_order() {
        let config = HeaderConfig {
            menu_items: vec![item("c", 2), item("a", 0), item("b", 1)],
            ..HeaderConfig::fallback(CategoryKey::Default)
        };

        let ids: Vec<_> = config
            .sorted_menu_items()
            .iter()
            .map(|i| i.id.clone())
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_order_ties_keep_fetch_order() {
        let config = HeaderConfig {
            menu_items: vec![item("first", 1), item("second", 1), item("zeroth", 0)],
            ..HeaderConfig::fallback(CategoryKey::Default)
        };

        let ids: Vec<_> = config
            .sorted_menu_items()
            .iter()
            .map(|i| i.id.clone())
            .collect();
        assert_eq!(ids, ["zeroth", "first", "second"]);
    }

    #[test]
    fn test_mega_menu_flag_without_content_renders_nothing() {
        let mut broken = item("gear", 0);
        broken.has_mega_menu = true;
        assert_eq!(broken.mega_menu(), None);
        assert!(broken.sorted_mega_menu().is_empty());
    }

    #[test]
    fn test_mega_menu_with_content() {
        let mut nav = item("gear", 0);
        nav.has_mega_menu = true;
        nav.mega_menu_categories = vec![
            MegaMenuCategory {
                id: "packs".into(),
                title: "Packs".into(),
                order: 1,
                items: vec![],
            },
            MegaMenuCategory {
                id: "tents".into(),
                title: "Tents".into(),
                order: 0,
                items: vec![],
            },
        ];

        let sorted = nav.sorted_mega_menu();
        assert_eq!(sorted[0].id, "tents");
        assert_eq!(sorted[1].id, "packs");
    }

    #[test]
    fn test_fallback_has_four_item_menu() {
        let config = HeaderConfig::fallback(CategoryKey::Home);
        assert_eq!(config.menu_items.len(), 4);
        assert!(config.menu_items.iter().all(|i| i.mega_menu().is_none()));
        assert_eq!(config.logo_text.as_deref(), Some("Outdoor Adventures"));
    }

    #[test]
    fn test_wire_format_tolerates_missing_fields() {
        let json = r#"{
            "category": "hiking",
            "menuItems": [
                { "id": "m1", "label": "Trails", "path": "/hiking/trails" }
            ]
        }"#;

        let config: HeaderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.menu_items.len(), 1);
        assert_eq!(config.menu_items[0].order, 0);
        assert!(!config.menu_items[0].has_mega_menu);
    }
}
