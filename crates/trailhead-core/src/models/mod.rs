//! Data models for trailhead

pub mod header;
pub mod style;

pub use header::{HeaderConfig, MegaMenuCategory, MegaMenuItem, MenuItem};
pub use style::CategoryStyle;
