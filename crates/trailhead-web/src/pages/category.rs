//! Category landing page

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use trailhead_core::CategoryKey;

/// Landing page for an activity (or unknown) category. Content blocks are
/// managed elsewhere; this page exists to give the themed routes a body.
#[component]
pub fn CategoryLanding() -> impl IntoView {
    let location = use_location();
    let key = Memo::new(move |_| CategoryKey::resolve(&location.pathname.get()));

    let title = move || match key.get().activity() {
        Some(activity) => activity.label().to_string(),
        None => "Explore".to_string(),
    };

    view! {
        <div class="page category-page">
            <h2 class="category-title">{title}</h2>
            <p class="hint">"Category content blocks render here."</p>
        </div>
    }
}
