//! trailhead-core - Core library for the Outdoor Adventures storefront shell
//!
//! Provides category resolution, theme token derivation, navigation models,
//! the mega-menu hover state machine, and the scroll-reactive header policy.
//! Everything in this crate is pure and clock-free so it compiles unchanged
//! for native targets and `wasm32-unknown-unknown`.

pub mod cache;
pub mod category;
pub mod color;
pub mod error;
pub mod hover;
pub mod models;
pub mod scroll;
pub mod theme;

pub use cache::{RequestGeneration, TtlCache};
pub use category::{Activity, CategoryKey, HeaderVariant};
pub use color::Hsl;
pub use error::LookupError;
pub use hover::{HoverEffect, HoverEvent, HoverMachine, HoverState, TimerToken, CLOSE_GRACE_MS};
pub use models::{CategoryStyle, HeaderConfig, MegaMenuCategory, MegaMenuItem, MenuItem};
pub use scroll::{ScrollPolicy, ScrollSample};
pub use theme::{FontRole, ThemePort, ThemeTokens};
