//! Category header: compact activity-branded presentation

use leptos::prelude::*;

use trailhead_core::HeaderConfig;

use super::HeaderLogo;
use crate::components::{NavMenu, ScrollShell};

/// Header variant for activity landing pages. Same scroll behavior as the
/// home header, but leads with the category banner instead of the hero.
#[component]
pub fn CategoryHeader(config: ReadSignal<HeaderConfig>) -> impl IntoView {
    view! {
        <ScrollShell>
            <Show when=move || config.get().banner_text.is_some()>
                <p class="header-banner header-banner-top">
                    {move || config.get().banner_text.unwrap_or_default()}
                </p>
            </Show>
            <div class="header-inner header-category">
                <HeaderLogo config=config />
                <NavMenu config=config />
            </div>
        </ScrollShell>
    }
}
