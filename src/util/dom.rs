//! Thin `web-sys` helpers for the behaviors that bind to server-rendered
//! markup.
//!
//! TRADE-OFFS
//! ==========
//! Every helper either returns `Option`/plain values or swallows the
//! `JsValue` error: a missing element or a failed style write should leave
//! the rest of the page working. Non-`csr` builds compile the portable
//! helpers as no-ops so state tests run natively.

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// `lang` attribute of the `<html>` element, or an empty string.
pub fn document_lang() -> String {
    #[cfg(feature = "csr")]
    {
        document()
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.get_attribute("lang"))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Run `f` once the document has been parsed.
pub fn on_ready(f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = document() else {
            return;
        };
        if doc.ready_state() == "loading" {
            let callback = Closure::once_into_js(f);
            let _ = doc.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
        } else {
            f();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        f();
    }
}

/// Suppress or restore page scrolling behind an overlay.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = document().and_then(|doc| doc.body()) {
            let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}

/// Raw `document.cookie` string.
pub fn cookie_string() -> String {
    #[cfg(feature = "csr")]
    {
        html_document().and_then(|doc| doc.cookie().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Assign one cookie through `document.cookie`.
pub fn set_cookie_string(assignment: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(assignment);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = assignment;
    }
}

#[cfg(feature = "csr")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    document().and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
}

#[cfg(feature = "csr")]
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

#[cfg(feature = "csr")]
pub fn html_element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    element_by_id(id).and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// All elements matching `selector`, in document order.
#[cfg(feature = "csr")]
pub fn query_all(root: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Show (`display: ""`) or hide (`display: none`) an element.
#[cfg(feature = "csr")]
pub fn set_displayed(el: &web_sys::Element, shown: bool) {
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("display", if shown { "" } else { "none" });
    }
}

/// Attach an event listener for the lifetime of the page. The closure is
/// never dropped.
#[cfg(feature = "csr")]
pub fn listen(target: &web_sys::EventTarget, event: &str, f: impl FnMut(web_sys::Event) + 'static) {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(f);
    let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    callback.forget();
}

/// Element an event was dispatched to, if it is an `Element`.
#[cfg(feature = "csr")]
pub fn event_target_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
}

/// `value` property of a form control of any kind (`input`, `select`,
/// `textarea`), or an empty string.
#[cfg(feature = "csr")]
pub fn control_value(el: &web_sys::Element) -> String {
    js_sys::Reflect::get(el, &wasm_bindgen::JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

/// Assign the `value` property of a form control.
#[cfg(feature = "csr")]
pub fn set_control_value(el: &web_sys::Element, value: &str) {
    let _ = js_sys::Reflect::set(el, &wasm_bindgen::JsValue::from_str("value"), &wasm_bindgen::JsValue::from_str(value));
}
