//! Admin theme editor with live preview
//!
//! Previews write through the same theme port the resolution flow uses, so
//! what the admin sees is exactly what visitors get. Because that port is
//! process-wide state, leaving the page re-resolves the route's real theme;
//! otherwise the preview would leak into unrelated pages.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use trailhead_core::{CategoryKey, FontRole, HeaderConfig, ThemeTokens};

use crate::api;
use crate::lookup::StyleLookup;
use crate::theme_dom::ThemeHandle;

/// Fonts offered by the editor. The backend accepts any font name; this
/// list mirrors what the site actually loads.
const FONT_CHOICES: [&str; 6] = [
    "Inter",
    "Archivo",
    "Fraunces",
    "Work Sans",
    "Source Serif 4",
    "JetBrains Mono",
];

/// Admin page: color/font preview plus the cross-category activity picker.
#[component]
pub fn Admin() -> impl IntoView {
    let theme = expect_context::<ThemeHandle>();
    let lookup = expect_context::<StyleLookup>();

    let (preview_hex, set_preview_hex) = signal(theme.0.current().primary_hex);

    // Header configs for every category, for the "switch activity" picker.
    let (configs, set_configs) = signal(Vec::<HeaderConfig>::new());
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_all_header_configs().await {
                Ok(all) => set_configs.set(all),
                Err(err) => leptos::logging::warn!("admin picker load failed: {}", err),
            }
        });
    });

    // Navigating away must not leave the preview applied: re-resolve the
    // destination route's theme through the same lookup the app shell uses.
    let restore_theme = theme.clone();
    on_cleanup(move || {
        let path = window()
            .location()
            .pathname()
            .unwrap_or_else(|_| String::from("/"));
        let (style, _) = lookup.snapshot(CategoryKey::resolve(&path));
        restore_theme.0.apply(&ThemeTokens::from_style(&style));
    });

    let color_theme = theme.clone();
    let on_color_input = move |ev: web_sys::Event| {
        let hex = event_target_value(&ev);
        set_preview_hex.set(hex.clone());
        let tokens = color_theme.0.current().with_primary(&hex);
        color_theme.0.apply(&tokens);
    };

    let reset_theme = theme.clone();

    view! {
        <div class="page admin-page">
            <h2>"Theme editor"</h2>

            <section class="admin-section">
                <h3>"Primary color"</h3>
                <input
                    type="color"
                    class="color-input"
                    prop:value=move || preview_hex.get()
                    on:input=on_color_input
                />
                <span class="color-hex">{move || preview_hex.get()}</span>
            </section>

            <section class="admin-section">
                <h3>"Fonts"</h3>
                {[
                    FontRole::Heading,
                    FontRole::Body,
                    FontRole::Navigation,
                    FontRole::Button,
                    FontRole::Display,
                ]
                    .into_iter()
                    .map(|role| view! { <FontRoleSelect role=role /> })
                    .collect_view()}
            </section>

            <section class="admin-section">
                <h3>"Switch activity"</h3>
                <ul class="activity-picker">
                    <For
                        each=move || configs.get()
                        key=|config| config.category.clone()
                        children=|config: HeaderConfig| {
                            view! {
                                <li>
                                    <a href=format!("/{}", config.category)>
                                        {config
                                            .logo_text
                                            .clone()
                                            .unwrap_or_else(|| config.category.clone())}
                                    </a>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>

            <button
                class="btn btn-secondary"
                on:click=move |_| reset_theme.0.reset()
            >
                "Reset to defaults"
            </button>
        </div>
    }
}

/// One font-role dropdown; changing it applies a partial font merge through
/// the theme port.
#[component]
fn FontRoleSelect(role: FontRole) -> impl IntoView {
    let theme = expect_context::<ThemeHandle>();

    let label = format!("{:?}", role);
    let current = theme.0.current().fonts.get(&role).cloned();

    view! {
        <label class="font-role">
            <span class="font-role-label">{label}</span>
            <select
                class="font-select"
                on:change=move |ev| {
                    let mut partial = BTreeMap::new();
                    partial.insert(role, event_target_value(&ev));
                    let tokens = theme.0.current().with_fonts(&partial);
                    theme.0.apply(&tokens);
                }
            >
                {FONT_CHOICES
                    .iter()
                    .map(|font| {
                        let selected = current.as_deref() == Some(*font);
                        view! {
                            <option value=*font selected=selected>
                                {*font}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
