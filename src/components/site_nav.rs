//! Site chrome shared by every page: mobile menu, user dropdown, flash
//! alert auto-dismiss, smooth in-page anchor scrolling and the staggered
//! card reveal.

#[cfg(test)]
#[path = "site_nav_test.rs"]
mod site_nav_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[cfg(feature = "csr")]
use crate::util::dom;

pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu-mobile";
pub const NAV_LINK_SELECTOR: &str = ".nav-menu-link";
pub const USER_MENU_TOGGLE_ID: &str = "user-menu-toggle";
pub const DROPDOWN_SELECTOR: &str = ".nav-dropdown";
pub const ALERT_SELECTOR: &str = ".alert";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub const ALERT_FADE_DELAY_MS: u32 = 5_000;
pub const ALERT_REMOVE_DELAY_MS: u32 = 300;

/// Selector to scroll to for an in-page link, or `None` when the link
/// should keep its default behavior (a bare `#` or not a fragment).
pub fn scroll_target(href: Option<&str>) -> Option<&str> {
    href.filter(|h| h.starts_with('#') && h.len() > 1)
}

pub const CARD_SELECTOR: &str = ".main .card";
pub const CARD_REVEALED_CLASS: &str = "card-in-view";
pub const CARD_STAGGER_MS: u32 = 120;
/// Cards whose tops differ by less than this are treated as one row.
pub const CARD_ROW_HEIGHT_PX: f64 = 30.0;
/// Cards starting this far below the fold still count as in view.
pub const CARD_FOLD_SLACK_PX: f64 = 60.0;
pub const CARD_ROOT_MARGIN: &str = "0px 0px -60px 0px";
pub const CARD_THRESHOLD: f64 = 0.01;

/// Layout of one card not yet revealed, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardBox {
    pub top: f64,
    pub left: f64,
}

/// One card to reveal: its index in the input and its transition delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    pub index: usize,
    pub delay_ms: u32,
}

/// Which unrevealed cards to show now and in what order.
///
/// Cards above `viewport_height` plus the fold slack are revealed row by
/// row, left to right within a row, each one `CARD_STAGGER_MS` after the
/// previous.
pub fn reveal_schedule(cards: &[CardBox], viewport_height: f64) -> Vec<RevealStep> {
    let mut visible: Vec<usize> =
        (0..cards.len()).filter(|&i| cards[i].top < viewport_height + CARD_FOLD_SLACK_PX).collect();
    let row = |i: usize| (cards[i].top / CARD_ROW_HEIGHT_PX).round();
    visible.sort_by(|&a, &b| row(a).total_cmp(&row(b)).then(cards[a].left.total_cmp(&cards[b].left)));
    visible
        .into_iter()
        .zip((0_u32..).map(|n| n.saturating_mul(CARD_STAGGER_MS)))
        .map(|(index, delay_ms)| RevealStep { index, delay_ms })
        .collect()
}

pub fn install() {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = dom::document() else {
            return;
        };
        install_mobile_menu(&doc);
        install_user_dropdown(&doc);
        schedule_alert_dismissal(&doc);
        install_anchor_scroll(&doc);
        install_card_reveal(&doc);
    }
}

#[cfg(feature = "csr")]
fn event_node(ev: &web_sys::Event) -> Option<web_sys::Node> {
    ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok())
}

#[cfg(feature = "csr")]
fn install_mobile_menu(doc: &web_sys::Document) {
    let (Some(toggle), Some(menu)) = (doc.get_element_by_id(NAV_TOGGLE_ID), doc.get_element_by_id(NAV_MENU_ID))
    else {
        return;
    };

    {
        let (toggle_el, menu) = (toggle.clone(), menu.clone());
        dom::listen(&toggle, "click", move |ev| {
            ev.stop_propagation();
            let _ = menu.class_list().toggle("active");
            let _ = toggle_el.class_list().toggle("active");
        });
    }

    let close = {
        let (toggle, menu) = (toggle.clone(), menu.clone());
        move || {
            let _ = menu.class_list().remove_1("active");
            let _ = toggle.class_list().remove_1("active");
        }
    };

    {
        let (toggle, menu, close) = (toggle.clone(), menu.clone(), close.clone());
        dom::listen(doc, "click", move |ev| {
            let target = event_node(&ev);
            if !toggle.contains(target.as_ref()) && !menu.contains(target.as_ref()) {
                close();
            }
        });
    }

    if let Ok(links) = menu.query_selector_all(NAV_LINK_SELECTOR) {
        for link in (0..links.length()).filter_map(|i| links.item(i)) {
            let close = close.clone();
            dom::listen(&link, "click", move |_| close());
        }
    }
}

#[cfg(feature = "csr")]
fn install_user_dropdown(doc: &web_sys::Document) {
    let Some(toggle) = doc.get_element_by_id(USER_MENU_TOGGLE_ID) else {
        return;
    };
    let Some(dropdown) = toggle.closest(DROPDOWN_SELECTOR).ok().flatten() else {
        return;
    };

    {
        let dropdown = dropdown.clone();
        dom::listen(&toggle, "click", move |ev| {
            ev.stop_propagation();
            ev.prevent_default();
            let was_open = dropdown.class_list().contains("open");
            if let Some(doc) = dom::document() {
                for other in dom::query_all(&doc, DROPDOWN_SELECTOR) {
                    let _ = other.class_list().remove_1("open");
                }
            }
            let _ = dropdown.class_list().toggle_with_force("open", !was_open);
        });
    }

    dom::listen(doc, "click", move |ev| {
        if !dropdown.contains(event_node(&ev).as_ref()) {
            let _ = dropdown.class_list().remove_1("open");
        }
    });
}

#[cfg(feature = "csr")]
fn schedule_alert_dismissal(doc: &web_sys::Document) {
    use gloo_timers::callback::Timeout;

    for alert in dom::query_all(doc, ALERT_SELECTOR) {
        Timeout::new(ALERT_FADE_DELAY_MS, move || {
            if let Some(html) = alert.dyn_ref::<web_sys::HtmlElement>() {
                let style = html.style();
                let _ = style.set_property("opacity", "0");
                let _ = style.set_property("transition", "opacity 0.3s ease");
            }
            Timeout::new(ALERT_REMOVE_DELAY_MS, move || alert.remove()).forget();
        })
        .forget();
    }
}

#[cfg(feature = "csr")]
fn install_anchor_scroll(doc: &web_sys::Document) {
    for anchor in dom::query_all(doc, ANCHOR_SELECTOR) {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev| {
            let href = link.get_attribute("href");
            let Some(selector) = scroll_target(href.as_deref()) else {
                return;
            };
            ev.prevent_default();
            let target = dom::document().and_then(|doc| doc.query_selector(selector).ok().flatten());
            if let Some(target) = target {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}

/// Reveal cards as they scroll into view. Without `IntersectionObserver`
/// every card is revealed at once.
#[cfg(feature = "csr")]
fn install_card_reveal(doc: &web_sys::Document) {
    use std::rc::Rc;

    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    let cards = dom::query_all(doc, CARD_SELECTOR);
    if cards.is_empty() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let reveal_all = |cards: &[web_sys::Element]| {
        for card in cards {
            let _ = card.class_list().add_1(CARD_REVEALED_CLASS);
        }
    };
    if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
        reveal_all(cards.as_slice());
        return;
    }

    let viewport_height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or_default();
    let cards = Rc::new(cards);
    let reveal = {
        let cards = Rc::clone(&cards);
        move || reveal_batch(&cards, viewport_height)
    };

    let on_intersect = {
        let reveal = reveal.clone();
        Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let has_new = entries.iter().any(|entry| {
                entry.dyn_into::<web_sys::IntersectionObserverEntry>().is_ok_and(|e| e.is_intersecting())
            });
            if has_new {
                next_frame(reveal.clone());
            }
        })
    };
    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(CARD_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(CARD_THRESHOLD));
    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        reveal_all(cards.as_slice());
        return;
    };
    on_intersect.forget();
    for card in cards.iter() {
        observer.observe(card);
    }
    next_frame(reveal);
}

#[cfg(feature = "csr")]
fn reveal_batch(cards: &[web_sys::Element], viewport_height: f64) {
    let pending: Vec<&web_sys::Element> =
        cards.iter().filter(|card| !card.class_list().contains(CARD_REVEALED_CLASS)).collect();
    let boxes: Vec<CardBox> = pending
        .iter()
        .map(|card| {
            let rect = card.get_bounding_client_rect();
            CardBox { top: rect.top(), left: rect.left() }
        })
        .collect();
    for step in reveal_schedule(&boxes, viewport_height) {
        let card = pending[step.index];
        if let Some(html) = card.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.style().set_property("transition-delay", &format!("{}ms", step.delay_ms));
        }
        let _ = card.class_list().add_1(CARD_REVEALED_CLASS);
    }
}

#[cfg(feature = "csr")]
fn next_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = wasm_bindgen::closure::Closure::once_into_js(f);
    let _ = window.request_animation_frame(callback.unchecked_ref());
}
