//! Main Leptos App component with SPA router
//!
//! Owns the category resolution flow: route change -> category key ->
//! theme tokens applied -> header variant mounted. Tokens are applied from
//! the cache (or defaults) synchronously in the same effect that swaps the
//! header, so the new category never paints under the old category's color;
//! the network refresh lands afterwards, guarded by a navigation generation
//! so a slow stale response can never overwrite a newer route's theme.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};

use trailhead_core::{CategoryKey, HeaderConfig, HeaderVariant, ThemeTokens};

use crate::components::{CategoryHeader, DefaultHeader, HomeHeader};
use crate::lookup::StyleLookup;
use crate::pages::{Admin, CategoryLanding, Home};
use crate::theme_dom::ThemeHandle;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    provide_context(StyleLookup::new());
    provide_context(ThemeHandle::dom());

    view! {
        <Router>
            <ThemedShell />
        </Router>
    }
}

/// Shell that resolves the route, themes the document, and renders the
/// matching header variant above the routed page content.
#[component]
fn ThemedShell() -> impl IntoView {
    let lookup = expect_context::<StyleLookup>();
    let theme = expect_context::<ThemeHandle>();

    let location = use_location();
    let key = Memo::new(move |_| CategoryKey::resolve(&location.pathname.get()));

    let (active_key, set_active_key) = signal(CategoryKey::Home);
    let (header_config, set_header_config) = signal(HeaderConfig::fallback(CategoryKey::Home));

    Effect::new(move |_| {
        let key = key.get();
        let generation = lookup.begin_navigation();

        // Resolve-then-paint: best-known tokens go in before the header
        // swap below becomes visible.
        let (style, config) = lookup.snapshot(key);
        theme.0.apply(&ThemeTokens::from_style(&style));
        set_active_key.set(key);
        set_header_config.set(config);

        if lookup.needs_refresh(key) {
            let theme = theme.clone();
            spawn_local(async move {
                let (style, config) = lookup.refresh(key).await;
                // Latest request wins: discard if the user has navigated on.
                if lookup.is_current(generation) {
                    theme.0.apply(&ThemeTokens::from_style(&style));
                    set_header_config.set(config);
                }
            });
        }
    });

    view! {
        <div class="app">
            {move || match HeaderVariant::for_key(active_key.get()) {
                HeaderVariant::Home => {
                    view! { <HomeHeader config=header_config /> }.into_any()
                }
                HeaderVariant::Category => {
                    view! { <CategoryHeader config=header_config /> }.into_any()
                }
                HeaderVariant::Default => {
                    view! { <DefaultHeader config=header_config /> }.into_any()
                }
            }}
            <main class="content">
                <Routes fallback=|| "Not found">
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/admin") view=Admin />
                    <Route path=path!("/:category") view=CategoryLanding />
                    <Route path=path!("/:category/*rest") view=CategoryLanding />
                </Routes>
            </main>
        </div>
    }
}
