//! Admin tournament change form: show only the fieldsets relevant to the
//! selected format, and the team roster inline only for doubles.
//!
//! The Django admin wraps fieldsets in `.module` containers; section marker
//! classes may sit on the fieldset itself or on an element inside it.

#[cfg(feature = "csr")]
use crate::state::tournament_form::{SectionVisibility, is_teams_heading, teams_visible};
#[cfg(feature = "csr")]
use crate::util::dom;

pub const FORMAT_SELECTOR: &str = "#id_format, select[name='format']";
pub const VARIANT_SELECTOR: &str = "#id_variant, select[name='variant']";
pub const TEAMS_MARKER_SELECTOR: &str = ".variant-doubles-only";
pub const TEAMS_INLINE_ID: &str = "tournamentteam_set-group";

/// Bind the format/variant selects when the page has a format select.
pub fn install() {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = dom::document() else {
            return;
        };
        let Some(format) = doc.query_selector(FORMAT_SELECTOR).ok().flatten() else {
            return;
        };
        for event in ["change", "input"] {
            dom::listen(&format, event, |_| update_sections());
        }
        if let Some(variant) = doc.query_selector(VARIANT_SELECTOR).ok().flatten() {
            for event in ["change", "input"] {
                dom::listen(&variant, event, |_| update_teams());
            }
        }
        update_sections();
    }
}

/// Current value of the control matching `selector`: a select, or an input
/// when the admin renders the field read-only or hidden.
#[cfg(feature = "csr")]
fn control_value(selector: &str) -> String {
    dom::document()
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .map(|el| dom::control_value(&el))
        .unwrap_or_default()
}

#[cfg(feature = "csr")]
fn update_sections() {
    let Some(doc) = dom::document() else {
        return;
    };
    let visibility = SectionVisibility::for_format(&control_value(FORMAT_SELECTOR));
    for (selector, visible) in &visibility.sections {
        for section in dom::query_all(&doc, selector) {
            dom::set_displayed(&section_container(section), *visible);
        }
    }
    update_teams();
}

/// The element to toggle for a marked section: itself if it is a module,
/// else its closest module ancestor.
#[cfg(feature = "csr")]
fn section_container(section: web_sys::Element) -> web_sys::Element {
    if section.class_list().contains("module") {
        return section;
    }
    section.closest(".module").ok().flatten().unwrap_or(section)
}

#[cfg(feature = "csr")]
fn update_teams() {
    if let Some(teams) = teams_inline() {
        dom::set_displayed(&teams, teams_visible(&control_value(VARIANT_SELECTOR)));
    }
}

#[cfg(feature = "csr")]
fn teams_inline() -> Option<web_sys::Element> {
    let doc = dom::document()?;
    if let Some(el) = doc.query_selector(TEAMS_MARKER_SELECTOR).ok().flatten() {
        return Some(el);
    }
    if let Some(el) = doc.get_element_by_id(TEAMS_INLINE_ID) {
        return Some(el);
    }
    dom::query_all(&doc, ".module, fieldset.module").into_iter().find(|module| {
        module
            .query_selector("h2")
            .ok()
            .flatten()
            .and_then(|h2| h2.text_content())
            .is_some_and(|text| is_teams_heading(&text))
    })
}
