//! Home page

use leptos::prelude::*;

use trailhead_core::Activity;

/// Home landing page: activity tiles linking into the category pages.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero-title">"Find your next adventure"</h1>
                <p class="hero-subtitle">
                    "Guides, gear, and trips for every kind of outdoors."
                </p>
            </section>
            <section class="activity-grid">
                {Activity::ALL
                    .iter()
                    .map(|activity| {
                        view! {
                            <a
                                class="activity-tile"
                                href=format!("/{}", activity.as_str())
                            >
                                {activity.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
