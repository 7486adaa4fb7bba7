//! Home header: full-bleed hero presentation

use leptos::prelude::*;

use trailhead_core::HeaderConfig;

use super::HeaderLogo;
use crate::components::{NavMenu, ScrollShell};

/// Header variant for the home page: expanded hero banner that collapses
/// into the compact sticky bar as the visitor scrolls.
#[component]
pub fn HomeHeader(config: ReadSignal<HeaderConfig>) -> impl IntoView {
    view! {
        <ScrollShell>
            <div class="header-inner header-home">
                <HeaderLogo config=config />
                <NavMenu config=config />
            </div>
            <Show when=move || config.get().banner_text.is_some()>
                <p class="header-banner">
                    {move || config.get().banner_text.unwrap_or_default()}
                </p>
            </Show>
        </ScrollShell>
    }
}
