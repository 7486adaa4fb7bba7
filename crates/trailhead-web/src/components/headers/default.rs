//! Default header: static, no scroll tracking

use leptos::prelude::*;

use trailhead_core::HeaderConfig;

use super::HeaderLogo;
use crate::components::NavMenu;

/// Fallback header for admin and unrecognized routes. Always expanded and
/// visible; mounts no scroll listener.
#[component]
pub fn DefaultHeader(config: ReadSignal<HeaderConfig>) -> impl IntoView {
    view! {
        <header class="site-header site-header-static">
            <div class="header-inner header-default">
                <HeaderLogo config=config />
                <NavMenu config=config />
            </div>
        </header>
    }
}
