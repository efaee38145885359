//! Image lightbox for `a.js-lightbox` links.
//!
//! Links carry `data-lightbox-src` (falls back to `href`),
//! `data-lightbox-caption` and `data-lightbox-group`. Clicks are delegated
//! from `<body>`; the overlay is a Leptos view appended to `<body>` and
//! driven by a `LightboxState` signal.

use leptos::prelude::*;

use crate::i18n::Strings;
use crate::state::lightbox::LightboxState;
#[cfg(feature = "csr")]
use crate::state::lightbox::{TriggerLink, group_for_click};
use crate::util::dom;

pub const TRIGGER_SELECTOR: &str = "a.js-lightbox";

/// Mount the overlay and start listening for trigger clicks when the page
/// has any lightbox links.
pub fn install() {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = dom::document() else {
            return;
        };
        if dom::query_all(&doc, TRIGGER_SELECTOR).is_empty() {
            return;
        }
        let Some(body) = doc.body() else {
            return;
        };

        let state = RwSignal::new(LightboxState::default());
        let strings = crate::i18n::current();
        leptos::mount::mount_to_body(move || view! { <LightboxOverlay state=state strings=strings/> });

        dom::listen(&body, "click", move |ev| {
            let Some(link) = dom::event_target_element(&ev).and_then(|el| el.closest(TRIGGER_SELECTOR).ok().flatten())
            else {
                return;
            };
            ev.prevent_default();
            let Some(doc) = dom::document() else {
                return;
            };
            let links = dom::query_all(&doc, TRIGGER_SELECTOR);
            let Some(clicked) = links.iter().position(|el| *el == link) else {
                return;
            };
            let triggers: Vec<TriggerLink> = links.iter().map(read_trigger).collect();
            let (slides, index) = group_for_click(&triggers, clicked);
            state.update(|s| s.show(slides, index));
        });
    }
}

#[cfg(feature = "csr")]
fn read_trigger(el: &web_sys::Element) -> TriggerLink {
    TriggerLink {
        src: el.get_attribute("data-lightbox-src"),
        href: el.get_attribute("href"),
        caption: el.get_attribute("data-lightbox-caption"),
        group: el.get_attribute("data-lightbox-group"),
    }
}

/// Fullscreen overlay showing the current slide.
#[component]
pub fn LightboxOverlay(state: RwSignal<LightboxState>, strings: &'static Strings) -> impl IntoView {
    let is_open = Memo::new(move |_| state.with(|s| s.open));
    let current = move || state.with(|s| s.current().cloned().unwrap_or_default());
    let nav_display = move || if state.with(LightboxState::has_navigation) { "" } else { "none" };
    let close = move || state.update(LightboxState::close);

    Effect::new(move || {
        lock_page(is_open.get());
    });

    #[cfg(feature = "csr")]
    {
        let _ = window_event_listener(leptos::ev::keydown, move |ev| {
            if state.with_untracked(|s| s.open) {
                state.update(|s| {
                    s.handle_key(&ev.key());
                });
            }
        });
    }

    view! {
        <div
            class="lightbox-overlay"
            class:lightbox-open=move || is_open.get()
            role="dialog"
            aria-modal="true"
            aria-label=strings.lightbox_label
            on:click=move |ev| {
                if ev.target() == ev.current_target() {
                    close();
                }
            }
        >
            <button type="button" class="lightbox-close" aria-label=strings.close_label on:click=move |_| close()>
                "×"
            </button>
            <button
                type="button"
                class="lightbox-prev"
                aria-label=strings.lightbox_prev
                style:display=nav_display
                on:click=move |ev| {
                    ev.stop_propagation();
                    state.update(LightboxState::prev);
                }
            >
                "‹"
            </button>
            <button
                type="button"
                class="lightbox-next"
                aria-label=strings.lightbox_next
                style:display=nav_display
                on:click=move |ev| {
                    ev.stop_propagation();
                    state.update(LightboxState::next);
                }
            >
                "›"
            </button>
            <div class="lightbox-content">
                <img class="lightbox-img" src=move || current().src alt=move || current().caption/>
                <p
                    class="lightbox-caption"
                    style:display=move || if current().caption.is_empty() { "none" } else { "" }
                >
                    {move || current().caption}
                </p>
            </div>
        </div>
    }
}

/// Freeze the page behind the overlay while it is open.
fn lock_page(open: bool) {
    dom::set_scroll_locked(open);
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(body) = window.document().and_then(|d| d.body()) {
            let perspective = if open { "none" } else { "" };
            let style = body.style();
            let _ = style.set_property("perspective", perspective);
            let _ = style.set_property("-webkit-perspective", perspective);
        }
        if open {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
