//! Utility helpers shared across page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component and
//! state logic so the pure parts stay testable without a browser.

pub mod cookie;
pub mod dom;
pub mod html;
pub mod time;
