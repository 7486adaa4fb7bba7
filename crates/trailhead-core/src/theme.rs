//! Theme tokens and the theme port
//!
//! A `ThemeTokens` value is the complete process-wide theme: one primary
//! color (hex plus derived HSL) and five font-role assignments. The token
//! derivations here are pure; writing them into the document is the job of
//! a `ThemePort` implementation owned by the frontend.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color::Hsl;
use crate::models::style::{
    CategoryStyle, DEFAULT_BODY_FONT, DEFAULT_BUTTON_FONT, DEFAULT_HEADING_FONT,
    DEFAULT_NAVIGATION_FONT, DEFAULT_PRIMARY_HEX,
};

/// The five font roles an admin can assign per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    Heading,
    Body,
    Navigation,
    Button,
    Display,
}

impl FontRole {
    pub const ALL: [FontRole; 5] = [
        FontRole::Heading,
        FontRole::Body,
        FontRole::Navigation,
        FontRole::Button,
        FontRole::Display,
    ];

    /// CSS custom property carrying this role's font stack.
    pub fn css_property(&self) -> &'static str {
        match self {
            FontRole::Heading => "--font-heading",
            FontRole::Body => "--font-body",
            FontRole::Navigation => "--font-navigation",
            FontRole::Button => "--font-button",
            FontRole::Display => "--font-display",
        }
    }

    /// Stable id for the scoped `<style>` element this role owns.
    ///
    /// Re-applying a theme overwrites the element with this id instead of
    /// appending a new fragment, which is what keeps re-application
    /// idempotent across redundant category changes.
    pub fn style_element_id(&self) -> &'static str {
        match self {
            FontRole::Heading => "theme-font-heading",
            FontRole::Body => "theme-font-body",
            FontRole::Navigation => "theme-font-navigation",
            FontRole::Button => "theme-font-button",
            FontRole::Display => "theme-font-display",
        }
    }

    /// Selector the scoped rule applies the font to.
    pub fn selector(&self) -> &'static str {
        match self {
            FontRole::Heading => "h1, h2, h3, h4, h5, h6",
            FontRole::Body => "body, p, li, td, input, textarea",
            FontRole::Navigation => "nav, .nav-menu, .mega-menu",
            FontRole::Button => "button, .btn",
            FontRole::Display => ".display, .hero-title",
        }
    }
}

/// Complete set of theme tokens applied process-wide.
///
/// `primary` is always recomputed from `primary_hex`; the two can never
/// drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub primary_hex: String,
    pub primary: Hsl,
    pub fonts: BTreeMap<FontRole, String>,
}

impl ThemeTokens {
    /// Derive tokens from a persisted style record.
    ///
    /// An unparsable hex falls back to the default primary rather than
    /// failing; a missing font role falls back to the default stack for
    /// that role (Display stays unset unless assigned).
    pub fn from_style(style: &CategoryStyle) -> ThemeTokens {
        let (primary_hex, primary) = match Hsl::from_hex(&style.primary_color_hex) {
            Some(hsl) => (style.primary_color_hex.clone(), hsl),
            None => {
                tracing::warn!(
                    category = %style.category,
                    hex = %style.primary_color_hex,
                    "Unparsable primary color, using default"
                );
                (
                    DEFAULT_PRIMARY_HEX.to_string(),
                    // Default hex is a compile-time constant and always parses
                    Hsl::from_hex(DEFAULT_PRIMARY_HEX).unwrap_or(Hsl { h: 153, s: 40, l: 30 }),
                )
            }
        };

        let mut fonts = BTreeMap::new();
        let roles = [
            (FontRole::Heading, &style.heading_font, DEFAULT_HEADING_FONT),
            (FontRole::Body, &style.body_font, DEFAULT_BODY_FONT),
            (
                FontRole::Navigation,
                &style.navigation_font,
                DEFAULT_NAVIGATION_FONT,
            ),
            (FontRole::Button, &style.button_font, DEFAULT_BUTTON_FONT),
        ];
        for (role, assigned, default) in roles {
            let font = assigned.clone().unwrap_or_else(|| default.to_string());
            fonts.insert(role, font);
        }
        if let Some(display) = &style.display_font {
            fonts.insert(FontRole::Display, display.clone());
        }

        ThemeTokens {
            primary_hex,
            primary,
            fonts,
        }
    }

    /// Merge a partial font-role assignment over the current tokens.
    pub fn with_fonts(&self, roles: &BTreeMap<FontRole, String>) -> ThemeTokens {
        let mut fonts = self.fonts.clone();
        for (role, font) in roles {
            fonts.insert(*role, font.clone());
        }
        ThemeTokens {
            fonts,
            ..self.clone()
        }
    }

    pub fn with_primary(&self, hex: &str) -> ThemeTokens {
        let style = CategoryStyle {
            primary_color_hex: hex.to_string(),
            ..CategoryStyle::fallback(crate::category::CategoryKey::Default)
        };
        let derived = ThemeTokens::from_style(&style);
        ThemeTokens {
            primary_hex: derived.primary_hex,
            primary: derived.primary,
            fonts: self.fonts.clone(),
        }
    }

    /// CSS custom properties for the document root: the primary color plus
    /// its four derived variants, then one property per assigned font role.
    pub fn custom_properties(&self) -> Vec<(&'static str, String)> {
        let light = self.primary.lighten(10);
        let dark = self.primary.lighten(-10);

        let mut props = vec![
            ("--theme-primary", self.primary.to_css()),
            (
                "--theme-primary-hsl",
                format!("{}, {}%, {}%", self.primary.h, self.primary.s, self.primary.l),
            ),
            ("--theme-primary-light", light.to_css()),
            ("--theme-primary-dark", dark.to_css()),
            (
                "--theme-primary-contrast",
                self.primary.contrast_text().to_string(),
            ),
        ];

        for (role, font) in &self.fonts {
            props.push((role.css_property(), format!("'{}', sans-serif", font)));
        }

        props
    }

    /// Scoped font rules, one per assigned role, keyed by the role's stable
    /// style-element id.
    pub fn font_rules(&self) -> Vec<(&'static str, String)> {
        self.fonts
            .keys()
            .map(|role| {
                (
                    role.style_element_id(),
                    format!(
                        "{} {{ font-family: var({}); }}",
                        role.selector(),
                        role.css_property()
                    ),
                )
            })
            .collect()
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        ThemeTokens::from_style(&CategoryStyle::fallback(
            crate::category::CategoryKey::Default,
        ))
    }
}

/// Port through which the resolution flow (and admin previews) write the
/// active theme. Process-wide singleton state, last-writer-wins; `apply`
/// must be idempotent and cheap so redundant re-application never flickers.
pub trait ThemePort {
    fn apply(&self, tokens: &ThemeTokens);
    fn current(&self) -> ThemeTokens;
    fn reset(&self);
}
