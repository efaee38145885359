//! # tennisfan-web
//!
//! Leptos + WASM scripting layer for the server-rendered TennisFan site.
//!
//! The Django templates render every page; this crate only wires behavior
//! onto what they emit: the feedback widget, the cookie-consent banner, the
//! image lightbox, site navigation toggles and two admin form helpers. Each
//! installer looks for its host elements and quietly does nothing when a
//! page does not include them, so one bundle serves every page.
//!
//! Pure state machines live in `state`, wire types and fetch helpers in
//! `net`, and browser bindings in `components`/`util`. Browser-only code is
//! gated behind the `csr` feature so the state and rendering logic can be
//! tested natively.

pub mod components;
pub mod i18n;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install every page behavior once the DOM is parsed.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    util::dom::on_ready(|| {
        components::site_nav::install();
        components::consent_banner::install();
        components::lightbox::install();
        components::feedback_widget::install();
        components::admin_tournament::install();
        components::admin_broadcast::install();
    });
}
