//! Page behavior modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module exposes an `install()` that binds to server-rendered markup
//! when its root elements are present and does nothing otherwise. The
//! lightbox overlay is a Leptos view; the rest drive the existing DOM.

pub mod admin_broadcast;
pub mod admin_tournament;
pub mod consent_banner;
pub mod feedback_threads;
pub mod feedback_widget;
pub mod lightbox;
pub mod site_nav;
