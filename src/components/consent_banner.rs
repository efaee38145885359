//! Browser binding for the cookie-consent banner.
//!
//! The banner markup is server-rendered; this module only toggles it, wires
//! the accept/refuse buttons and publishes the global query functions other
//! scripts use before loading analytics:
//!
//! ```js
//! if (window.cookieConsentAccepted && window.cookieConsentAccepted()) loadAnalytics();
//! window.addEventListener("cookie_consent_accepted", loadAnalytics);
//! ```

#[cfg(feature = "csr")]
use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "csr")]
use crate::state::consent::{COOKIE_NAME, ConsentBanner, ConsentChoice, ConsentHost};
#[cfg(feature = "csr")]
use crate::util::{cookie, dom};

pub const BANNER_ID: &str = "cookie-consent-banner";
pub const ACCEPT_ID: &str = "cookie-consent-accept";
pub const REFUSE_ID: &str = "cookie-consent-refuse";
pub const VISIBLE_CLASS: &str = "cookie-banner--visible";

/// Publish the global consent queries and bind the banner, if present.
pub fn install() {
    #[cfg(feature = "csr")]
    {
        expose_queries();

        let Some(el) = dom::html_element_by_id(BANNER_ID) else {
            return;
        };
        let banner = Rc::new(RefCell::new(ConsentBanner::new(DomConsentHost { banner: el })));
        banner.borrow_mut().init();

        if let Some(button) = dom::element_by_id(ACCEPT_ID) {
            let banner = Rc::clone(&banner);
            dom::listen(&button, "click", move |_| banner.borrow_mut().accept());
        }
        if let Some(button) = dom::element_by_id(REFUSE_ID) {
            dom::listen(&button, "click", move |_| banner.borrow_mut().refuse());
        }
    }
}

#[cfg(feature = "csr")]
struct DomConsentHost {
    banner: web_sys::HtmlElement,
}

#[cfg(feature = "csr")]
impl ConsentHost for DomConsentHost {
    fn read_cookie(&self, name: &str) -> Option<String> {
        cookie::read(name)
    }

    fn write_cookie(&mut self, spec: &cookie::CookieSpec<'_>) {
        cookie::write(spec);
    }

    fn set_banner_visible(&mut self, visible: bool) {
        self.banner.set_hidden(!visible);
        let _ = self.banner.class_list().toggle_with_force(VISIBLE_CLASS, visible);
    }

    fn dispatch(&mut self, event: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match web_sys::CustomEvent::new(event) {
            Ok(ev) => {
                let _ = window.dispatch_event(&ev);
            }
            Err(err) => leptos::logging::warn!("could not create {event} event: {err:?}"),
        }
    }

    fn call_accept_hook(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let hook = js_sys::Reflect::get(&window, &JsValue::from_str("onCookieConsentAccept")).ok();
        if let Some(hook) = hook.and_then(|h| h.dyn_into::<js_sys::Function>().ok()) {
            let _ = hook.call0(&window);
        }
    }
}

/// Install `window.cookieConsentAccepted()` and `window.cookieConsentRefused()`.
#[cfg(feature = "csr")]
fn expose_queries() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let queries: [(&str, ConsentChoice); 2] =
        [("cookieConsentAccepted", ConsentChoice::Accepted), ("cookieConsentRefused", ConsentChoice::Refused)];
    for (name, choice) in queries {
        let query = Closure::<dyn Fn() -> bool>::new(move || {
            ConsentChoice::from_cookie(cookie::read(COOKIE_NAME).as_deref()) == Some(choice)
        });
        let _ = js_sys::Reflect::set(&window, &JsValue::from_str(name), query.as_ref());
        query.forget();
    }
}
