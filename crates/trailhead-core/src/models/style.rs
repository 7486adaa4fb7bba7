//! Persisted per-category style record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::CategoryKey;

/// Default primary color applied whenever no persisted style exists.
pub const DEFAULT_PRIMARY_HEX: &str = "#2D6A4F";

pub const DEFAULT_HEADING_FONT: &str = "Archivo";
pub const DEFAULT_BODY_FONT: &str = "Inter";
pub const DEFAULT_NAVIGATION_FONT: &str = "Inter";
pub const DEFAULT_BUTTON_FONT: &str = "Archivo";

/// Style record persisted per category by the admin editor.
///
/// The HSL triplet shown in the admin UI is derived from `primary_color_hex`
/// at read time and never round-trips through this struct; only the hex value
/// is authoritative on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStyle {
    pub category: String,
    pub primary_color_hex: String,
    #[serde(default)]
    pub heading_font: Option<String>,
    #[serde(default)]
    pub body_font: Option<String>,
    #[serde(default)]
    pub navigation_font: Option<String>,
    #[serde(default)]
    pub button_font: Option<String>,
    #[serde(default)]
    pub display_font: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CategoryStyle {
    /// Hardcoded default style for a category with no persisted record.
    ///
    /// Used on NotFound, network failure, and malformed responses; the site
    /// never renders an unthemed page.
    pub fn fallback(key: CategoryKey) -> CategoryStyle {
        CategoryStyle {
            category: key.as_str().to_string(),
            primary_color_hex: DEFAULT_PRIMARY_HEX.to_string(),
            heading_font: Some(DEFAULT_HEADING_FONT.to_string()),
            body_font: Some(DEFAULT_BODY_FONT.to_string()),
            navigation_font: Some(DEFAULT_NAVIGATION_FONT.to_string()),
            button_font: Some(DEFAULT_BUTTON_FONT.to_string()),
            display_font: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = r##"{
            "category": "hiking",
            "primaryColorHex": "#F59E0B",
            "headingFont": "Archivo",
            "displayFont": null,
            "updatedAt": "2026-03-14T09:30:00Z"
        }"##;

        let style: CategoryStyle = serde_json::from_str(json).unwrap();
        assert_eq!(style.category, "hiking");
        assert_eq!(style.primary_color_hex, "#F59E0B");
        assert_eq!(style.heading_font.as_deref(), Some("Archivo"));
        assert_eq!(style.display_font, None);
        // Omitted roles default to None rather than failing the decode
        assert_eq!(style.body_font, None);
    }

    #[test]
    fn test_fallback_is_complete() {
        let style = CategoryStyle::fallback(CategoryKey::Default);
        assert_eq!(style.primary_color_hex, DEFAULT_PRIMARY_HEX);
        assert!(style.heading_font.is_some());
        assert!(style.body_font.is_some());
        assert!(style.navigation_font.is_some());
        assert!(style.button_font.is_some());
    }
}
