//! Color conversion between 6-digit hex and HSL
//!
//! The HSL triplet backing `--theme-primary` is always recomputed from the
//! persisted hex value; it is never stored independently.

use serde::{Deserialize, Serialize};

/// HSL color with integer components: h in 0..360, s and l in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Parse a 6-digit hex color (`#RRGGBB` or `RRGGBB`, case-insensitive).
    ///
    /// Returns `None` for anything else; callers substitute the default
    /// theme color rather than erroring.
    pub fn from_hex(hex: &str) -> Option<Hsl> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;

        Some(Self::from_rgb(r, g, b))
    }

    /// Standard RGB -> HSL transform, rounded to integer components.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Hsl {
        let r = r as f64 / 255.0;
        let g = g as f64 / 255.0;
        let b = b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        let (h, s) = if delta == 0.0 {
            (0.0, 0.0)
        } else {
            let s = delta / (1.0 - (2.0 * l - 1.0).abs());
            let h = if max == r {
                60.0 * (((g - b) / delta).rem_euclid(6.0))
            } else if max == g {
                60.0 * ((b - r) / delta + 2.0)
            } else {
                60.0 * ((r - g) / delta + 4.0)
            };
            (h, s)
        };

        Hsl {
            h: (h.round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let h = self.h as f64;
        let s = self.s as f64 / 100.0;
        let l = self.l as f64 / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r1, g1, b1) = match h as u16 {
            0..=59 => (c, x, 0.0),
            60..=119 => (x, c, 0.0),
            120..=179 => (0.0, c, x),
            180..=239 => (0.0, x, c),
            240..=299 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        (
            ((r1 + m) * 255.0).round() as u8,
            ((g1 + m) * 255.0).round() as u8,
            ((b1 + m) * 255.0).round() as u8,
        )
    }

    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// CSS `hsl()` function notation.
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }

    /// Shift lightness by `delta`, clamped to [10, 90].
    ///
    /// The clamp keeps derived variants visible: a near-white primary never
    /// produces an invisible white "light" variant, and vice versa.
    pub fn lighten(&self, delta: i16) -> Hsl {
        let l = (self.l as i16 + delta).clamp(10, 90) as u8;
        Hsl { l, ..*self }
    }

    /// Whether black or white text reads better on this color.
    pub fn contrast_text(&self) -> &'static str {
        if self.l > 60 {
            "#1A1A1A"
        } else {
            "#FFFFFF"
        }
    }
}
