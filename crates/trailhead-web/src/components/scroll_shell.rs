//! Scroll-reactive header shell
//!
//! Wraps a header in a `<header>` element whose compact/hidden classes
//! follow the two-threshold visibility policy in `trailhead_core::scroll`.
//! Scroll events arrive at high frequency, so sampling is throttled to one
//! policy evaluation per animation frame; the listener detaches on unmount.

use leptos::ev;
use leptos::prelude::*;

use trailhead_core::{ScrollPolicy, ScrollSample};

/// Shell deriving compact/hidden presentation from the scroll position.
#[component]
pub fn ScrollShell(children: Children) -> impl IntoView {
    let policy = ScrollPolicy::default();
    let (sample, set_sample) = signal(ScrollSample::initial());

    // One pending rAF at a time; extra scroll events within a frame fold
    // into the same sample.
    let ticking = StoredValue::new(false);

    let listener = window_event_listener(ev::scroll, move |_| {
        if ticking.get_value() {
            return;
        }
        ticking.set_value(true);

        // The frame callback can outlive the component; try_ variants keep
        // a late frame from writing into a disposed scope.
        request_animation_frame(move || {
            let _ = ticking.try_set_value(false);
            let offset = window().scroll_y().unwrap_or(0.0);
            let _ = set_sample.try_update(|s| *s = s.next(offset, &policy));
        });
    });

    on_cleanup(move || listener.remove());

    view! {
        <header
            class="site-header"
            class=("site-header-compact", move || sample.get().past_threshold)
            class=("site-header-hidden", move || !sample.get().header_visible)
        >
            {children()}
        </header>
    }
}
