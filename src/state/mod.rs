//! Page behavior state machines.
//!
//! DESIGN
//! ======
//! Each behavior owns an explicitly constructed state object. Components
//! wrap them in signals or bind them to the DOM; the state types themselves
//! never touch the browser, so every transition is unit-tested natively.

pub mod consent;
pub mod feedback;
pub mod lightbox;
pub mod tournament_form;
