//! Telegram broadcast admin form: block implicit submission.
//!
//! Pressing Enter in a field on some mobile keyboards submits the add form
//! before the admin is done, landing on a "object with ID add does not
//! exist" page. Only an explicit click on a submit control may submit.

#[cfg(test)]
#[path = "admin_broadcast_test.rs"]
mod admin_broadcast_test;

pub const BROADCAST_ADD_PATH: &str = "/telegram_bot/telegrambroadcast/add";

/// Whether the guard applies on this page.
pub fn applies_to_path(path: &str) -> bool {
    path.contains(BROADCAST_ADD_PATH)
}

/// Whether a submit event may proceed given the submitter's `type`
/// property (`None` when the browser reports no submitter).
pub fn is_explicit_submit(submitter_type: Option<&str>) -> bool {
    matches!(submitter_type, Some("submit" | "image"))
}

/// Guard the first form on the broadcast add page.
pub fn install() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let path = window.location().pathname().unwrap_or_default();
        if !applies_to_path(&path) {
            return;
        }
        let Some(form) = crate::util::dom::document().and_then(|doc| doc.query_selector("form").ok().flatten())
        else {
            return;
        };
        crate::util::dom::listen(&form, "submit", |ev| {
            let submitter_type = ev
                .dyn_ref::<web_sys::SubmitEvent>()
                .and_then(web_sys::SubmitEvent::submitter)
                .and_then(|el| js_sys::Reflect::get(&el, &wasm_bindgen::JsValue::from_str("type")).ok())
                .and_then(|value| value.as_string());
            if !is_explicit_submit(submitter_type.as_deref()) {
                ev.prevent_default();
            }
        });
    }
}
