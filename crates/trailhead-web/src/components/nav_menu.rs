//! Top-level navigation with hover-revealed mega-menu panels
//!
//! All open/close decisions live in `trailhead_core::HoverMachine`; this
//! component only routes DOM events into the machine and executes the
//! effects it returns (arming and cancelling the single grace timer). The
//! panel stays mounted through the whole pending-close grace period, so the
//! pointer can travel from trigger to panel without a flicker.

use std::time::Duration;

use leptos::ev;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wasm_bindgen::JsCast;

use trailhead_core::{
    HeaderConfig, HoverEffect, HoverEvent, HoverMachine, MegaMenuCategory, MenuItem,
    CLOSE_GRACE_MS,
};

/// Timer slot for the one armed close timer. Local storage because
/// `TimeoutHandle` wraps a JS value.
type TimerSlot = StoredValue<Option<TimeoutHandle>, LocalStorage>;

fn dispatch(
    machine: StoredValue<HoverMachine>,
    set_open_item: WriteSignal<Option<String>>,
    timer: TimerSlot,
    event: HoverEvent,
) {
    let mut effect = HoverEffect::None;
    machine.update_value(|m| effect = m.handle(event));

    match effect {
        HoverEffect::None => {}
        HoverEffect::ArmClose(token) => {
            let armed = set_timeout_with_handle(
                move || {
                    dispatch(machine, set_open_item, timer, HoverEvent::TimerFired(token));
                },
                Duration::from_millis(CLOSE_GRACE_MS),
            );
            match armed {
                Ok(handle) => timer.update_value(|slot| {
                    // A previous handle here would already be cancelled or
                    // fired; replacing is safe, leaking is not.
                    if let Some(old) = slot.take() {
                        old.clear();
                    }
                    *slot = Some(handle);
                }),
                Err(e) => leptos::logging::warn!("failed to arm close timer: {:?}", e),
            }
        }
        HoverEffect::CancelClose(_token) => {
            timer.update_value(|slot| {
                if let Some(handle) = slot.take() {
                    handle.clear();
                }
            });
        }
    }

    set_open_item.set(machine.with_value(|m| m.state().rendered_item().map(str::to_string)));
}

fn click_dismisses(ev: &web_sys::MouseEvent) -> bool {
    let Some(target) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        // Non-element target, e.g. the document itself
        return true;
    };
    dismiss_on_click(
        matches!(target.closest(".site-header"), Ok(Some(_))),
        matches!(target.closest("a"), Ok(Some(_))),
    )
}

/// Link clicks and clicks outside the header dismiss the open panel;
/// clicks on other header chrome (the panel background included) do not.
fn dismiss_on_click(in_header: bool, on_link: bool) -> bool {
    !in_header || on_link
}

/// Navigation bar fed by the category's header config.
#[component]
pub fn NavMenu(config: ReadSignal<HeaderConfig>) -> impl IntoView {
    let machine = StoredValue::new(HoverMachine::new());
    let timer: TimerSlot = StoredValue::new_local(None);
    let (open_item, set_open_item) = signal(None::<String>);

    // Clicking a menu link or anywhere outside the header closes the panel
    // immediately, no grace period. Clicks elsewhere inside the header
    // (the panel background included) are not dismissals.
    let click_away = window_event_listener(ev::click, move |ev| {
        if click_dismisses(&ev) {
            dispatch(machine, set_open_item, timer, HoverEvent::Dismiss);
        }
    });

    // Route changes close the panel too.
    let location = use_location();
    Effect::new(move |_| {
        location.pathname.track();
        dispatch(machine, set_open_item, timer, HoverEvent::Dismiss);
    });

    // Unmounting with a timer armed would leak it and fire into a dead
    // scope; cancel on cleanup.
    on_cleanup(move || {
        click_away.remove();
        let _ = timer.try_update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    });

    let items = move || config.get().sorted_menu_items();

    view! {
        <nav class="nav-menu">
            <ul class="nav-items">
                <For
                    each=items
                    key=|item| item.id.clone()
                    children=move |item: MenuItem| {
                        let id = item.id.clone();
                        let has_panel = item.mega_menu().is_some();
                        let enter_id = id.clone();
                        let panel_item = item.clone();
                        let is_open =
                            Signal::derive(move || open_item.get().as_deref() == Some(id.as_str()));

                        view! {
                            <li
                                class="nav-item"
                                class=("nav-item-open", move || is_open.get())
                                on:mouseenter=move |_| {
                                    dispatch(
                                        machine,
                                        set_open_item,
                                        timer,
                                        HoverEvent::HoverTrigger {
                                            item: enter_id.clone(),
                                            has_panel,
                                        },
                                    )
                                }
                                on:mouseleave=move |_| {
                                    dispatch(machine, set_open_item, timer, HoverEvent::LeaveTrigger)
                                }
                            >
                                <a class="nav-link" href=item.path.clone()>
                                    {item.label.clone()}
                                </a>
                                <Show when=move || is_open.get()>
                                    <MegaMenuPanel
                                        item=panel_item.clone()
                                        machine=machine
                                        set_open_item=set_open_item
                                        timer=timer
                                    />
                                </Show>
                            </li>
                        }
                    }
                />
            </ul>
        </nav>
    }
}

/// The revealed panel for one menu item: grouped link columns in admin
/// order, featured items called out.
#[component]
fn MegaMenuPanel(
    item: MenuItem,
    machine: StoredValue<HoverMachine>,
    set_open_item: WriteSignal<Option<String>>,
    timer: TimerSlot,
) -> impl IntoView {
    let categories = item.sorted_mega_menu();

    view! {
        <div
            class="mega-menu"
            on:mouseenter=move |_| {
                dispatch(machine, set_open_item, timer, HoverEvent::EnterPanel)
            }
            on:mouseleave=move |_| {
                dispatch(machine, set_open_item, timer, HoverEvent::LeavePanel)
            }
        >
            {categories
                .into_iter()
                .map(|category: MegaMenuCategory| {
                    view! {
                        <div class="mega-menu-column">
                            <h4 class="mega-menu-title">{category.title.clone()}</h4>
                            <ul class="mega-menu-links">
                                {category
                                    .sorted_items()
                                    .into_iter()
                                    .map(|link| {
                                        view! {
                                            <li class=(
                                                "mega-menu-featured",
                                                link.featured_item,
                                            )>
                                                <a href=link.path.clone()>{link.label.clone()}</a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::dismiss_on_click;

    #[test]
    fn test_click_outside_header_dismisses() {
        assert!(dismiss_on_click(false, false));
        assert!(dismiss_on_click(false, true));
    }

    #[test]
    fn test_link_click_inside_header_dismisses() {
        assert!(dismiss_on_click(true, true));
    }

    #[test]
    fn test_panel_background_click_keeps_panel() {
        assert!(!dismiss_on_click(true, false));
    }
}
