//! Leptos UI components

mod headers;
mod nav_menu;
mod scroll_shell;

pub use headers::{CategoryHeader, DefaultHeader, HomeHeader};
pub use nav_menu::NavMenu;
pub use scroll_shell::ScrollShell;
