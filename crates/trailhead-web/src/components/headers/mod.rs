//! The three header renderers selected by `HeaderVariant`

mod category;
mod default;
mod home;

pub use category::CategoryHeader;
pub use default::DefaultHeader;
pub use home::HomeHeader;

use leptos::prelude::*;
use trailhead_core::HeaderConfig;

/// Logo block shared by all three variants: image if configured, text
/// otherwise, always linking home.
#[component]
pub(crate) fn HeaderLogo(config: ReadSignal<HeaderConfig>) -> impl IntoView {
    view! {
        <a class="header-logo" href="/">
            {move || {
                let config = config.get();
                match config.logo_src {
                    Some(src) => view! {
                        <img class="logo-image" src=src alt=config.logo_text.unwrap_or_default() />
                    }
                        .into_any(),
                    None => view! {
                        <span class="logo-text">
                            {config.logo_text.unwrap_or_else(|| "Outdoor Adventures".to_string())}
                        </span>
                    }
                        .into_any(),
                }
            }}
        </a>
    }
}
