//! Page components

mod admin;
mod category;
mod home;

pub use admin::Admin;
pub use category::CategoryLanding;
pub use home::Home;
