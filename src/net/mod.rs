//! Networking modules for the feedback endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the fetch calls and `types` defines the JSON wire schema
//! shared with the Django views.

pub mod api;
pub mod types;
