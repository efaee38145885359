//! Floating feedback button with a modal form and support thread history.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Django base template renders the whole widget: the `#feedback-widget`
//! root carrying the endpoint URLs, CSRF token and auth flag as data
//! attributes, plus the trigger, modal, form, success panel, error panel and
//! thread list under stable ids. `install` binds to that markup and never
//! creates elements of its own. Pages without the root get no widget, and
//! any individual element the page leaves out is skipped.
//!
//! After every `FeedbackState` transition the widget computes a
//! `WidgetPaint` and writes it to the bound elements.

#[cfg(test)]
#[path = "feedback_widget_test.rs"]
mod feedback_widget_test;

use std::fmt::Write as _;

use crate::components::feedback_threads::render_threads_html;
use crate::i18n::Strings;
use crate::state::feedback::{FeedbackState, FormState, SubmitSuccess, ThreadsView};
use crate::util::html::{escape_attr, escape_text};

pub const ROOT_ID: &str = "feedback-widget";
pub const BUTTON_ID: &str = "feedback-widget-btn";
pub const MODAL_ID: &str = "feedback-modal";
pub const BACKDROP_ID: &str = "feedback-modal-backdrop";
pub const CLOSE_ID: &str = "feedback-modal-close";
pub const FORM_ID: &str = "feedback-form";
pub const FORM_WRAP_ID: &str = "feedback-form-wrap";
pub const SUCCESS_ID: &str = "feedback-success";
pub const ERROR_ID: &str = "feedback-form-error";
pub const THREADS_LIST_ID: &str = "feedback-threads-list";

pub const OPEN_CLASS: &str = "feedback-modal--open";
pub const MESSAGE_FIELD: &str = "[name=message]";
pub const SUBJECT_FIELD: &str = "[name=subject]";

/// What the bound elements should show for one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetPaint {
    pub modal_open: bool,
    /// `false` once the success panel replaces the form.
    pub form_visible: bool,
    pub submitting: bool,
    pub error: Option<String>,
    /// Success panel markup; `None` leaves the panel untouched and hidden.
    pub success_html: Option<String>,
    /// Thread list markup; `None` before any load so server content stays.
    pub threads_html: Option<String>,
}

impl WidgetPaint {
    pub fn of(state: &FeedbackState, strings: &Strings, format_ts: impl Fn(&str) -> String) -> Self {
        let success_html = match &state.form {
            FormState::Submitted(success) => Some(render_success_html(success, strings)),
            _ => None,
        };
        let threads_html = match &state.threads {
            ThreadsView::Idle => None,
            view => Some(render_threads_html(view, strings, format_ts)),
        };
        Self {
            modal_open: state.is_open(),
            form_visible: success_html.is_none(),
            submitting: state.is_submitting(),
            error: state.error_message().map(str::to_owned),
            success_html,
            threads_html,
        }
    }
}

/// Success panel contents: the confirmation text and, when the server sent
/// one, a link for binding the Telegram account.
pub fn render_success_html(success: &SubmitSuccess, strings: &Strings) -> String {
    let mut html = format!("<p>{}</p>", escape_text(&success.message));
    if let Some(url) = &success.binding_url {
        let _ = write!(
            html,
            "<p><a href=\"{}\" class=\"btn btn-primary\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></p>",
            escape_attr(url),
            strings.bind_telegram,
        );
    }
    html
}

/// Bind the widget to the server-rendered markup, if the page has it.
pub fn install() {
    #[cfg(feature = "csr")]
    bound::install();
}

#[cfg(feature = "csr")]
mod bound {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;

    use super::*;
    use crate::net::api;
    use crate::state::feedback::{SubmitTicket, ThreadsRequest, WidgetConfig};
    use crate::util::{cookie, dom, time};

    /// Server-rendered elements, each optional.
    struct Elements {
        button: Option<web_sys::Element>,
        modal: Option<web_sys::Element>,
        backdrop: Option<web_sys::Element>,
        close: Option<web_sys::Element>,
        form: Option<web_sys::Element>,
        form_wrap: Option<web_sys::Element>,
        success: Option<web_sys::Element>,
        error: Option<web_sys::Element>,
        threads_list: Option<web_sys::Element>,
    }

    impl Elements {
        fn lookup() -> Self {
            Self {
                button: dom::element_by_id(BUTTON_ID),
                modal: dom::element_by_id(MODAL_ID),
                backdrop: dom::element_by_id(BACKDROP_ID),
                close: dom::element_by_id(CLOSE_ID),
                form: dom::element_by_id(FORM_ID),
                form_wrap: dom::element_by_id(FORM_WRAP_ID),
                success: dom::element_by_id(SUCCESS_ID),
                error: dom::element_by_id(ERROR_ID),
                threads_list: dom::element_by_id(THREADS_LIST_ID),
            }
        }

        fn field(&self, selector: &str) -> Option<web_sys::Element> {
            self.form.as_ref().and_then(|form| form.query_selector(selector).ok().flatten())
        }
    }

    struct Widget {
        state: RefCell<FeedbackState>,
        elements: Elements,
        strings: &'static Strings,
    }

    pub(super) fn install() {
        let Some(root) = dom::element_by_id(ROOT_ID) else {
            return;
        };
        let config = WidgetConfig::from_attributes(|name| root.get_attribute(name));
        let strings = crate::i18n::current();
        let has_submit_url = config.submit_url.is_some();
        let widget = Rc::new(Widget {
            state: RefCell::new(FeedbackState::new(config, strings)),
            elements: Elements::lookup(),
            strings,
        });

        if let Some(button) = &widget.elements.button {
            let widget = Rc::clone(&widget);
            dom::listen(button, "click", move |_| widget.open());
        }
        for target in [&widget.elements.backdrop, &widget.elements.close].into_iter().flatten() {
            let widget = Rc::clone(&widget);
            dom::listen(target, "click", move |_| widget.close());
        }
        if let Some(doc) = dom::document() {
            let widget = Rc::clone(&widget);
            dom::listen(&doc, "keydown", move |ev| {
                let is_escape = ev.dyn_ref::<web_sys::KeyboardEvent>().is_some_and(|k| k.key() == "Escape");
                if is_escape && widget.state.borrow().is_open() {
                    widget.close();
                }
            });
        }
        if has_submit_url {
            if let Some(form) = &widget.elements.form {
                let widget = Rc::clone(&widget);
                dom::listen(form, "submit", move |ev| {
                    ev.prevent_default();
                    widget.submit();
                });
            }
        }
    }

    impl Widget {
        fn open(self: &Rc<Self>) {
            let request = self.state.borrow_mut().open();
            dom::set_scroll_locked(true);
            self.paint();
            if let Some(request) = request {
                self.spawn_threads_load(request);
            }
        }

        fn close(&self) {
            if self.state.borrow_mut().close() {
                dom::set_scroll_locked(false);
                self.paint();
            }
        }

        fn submit(self: &Rc<Self>) {
            let value = |selector: &str| self.elements.field(selector).map(|el| dom::control_value(&el)).unwrap_or_default();
            let (message, subject) = (value(MESSAGE_FIELD), value(SUBJECT_FIELD));
            let result = self.state.borrow_mut().begin_submit(&message, &subject);
            self.paint();
            match result {
                Ok(ticket) => self.spawn_submit(ticket),
                Err(err) => leptos::logging::log!("feedback submit not sent: {err}"),
            }
        }

        /// Write the current state to the bound elements.
        fn paint(&self) {
            let strings = self.strings;
            let paint =
                WidgetPaint::of(&self.state.borrow(), strings, |iso| time::format_local(iso, strings.timestamp_format));
            let els = &self.elements;

            if let Some(modal) = &els.modal {
                let _ = modal.set_attribute("aria-hidden", if paint.modal_open { "false" } else { "true" });
                let _ = modal.class_list().toggle_with_force(OPEN_CLASS, paint.modal_open);
            }
            if let Some(error) = &els.error {
                error.set_text_content(paint.error.as_deref());
                set_display(error, if paint.error.is_some() { "block" } else { "none" });
            }
            if let Some(form) = &els.form {
                if let Ok(Some(submit)) = form.query_selector("[type=submit]") {
                    let _ = submit.toggle_attribute_with_force("disabled", paint.submitting);
                }
            }
            if let Some(wrap) = &els.form_wrap {
                set_display(wrap, if paint.form_visible { "" } else { "none" });
            }
            if let (Some(panel), Some(html)) = (&els.success, &paint.success_html) {
                panel.set_inner_html(html);
                set_display(panel, "block");
            }
            if let (Some(list), Some(html)) = (&els.threads_list, &paint.threads_html) {
                if list.inner_html() != *html {
                    list.set_inner_html(html);
                }
            }
        }

        fn clear_fields(&self) {
            for selector in [MESSAGE_FIELD, SUBJECT_FIELD] {
                if let Some(field) = self.elements.field(selector) {
                    dom::set_control_value(&field, "");
                }
            }
        }

        /// Fetch the thread list and apply it if it is still the latest load.
        fn spawn_threads_load(self: &Rc<Self>, request: ThreadsRequest) {
            let widget = Rc::clone(self);
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::fetch_threads(&request.url).await;
                if let Err(err) = &result {
                    leptos::logging::warn!("feedback threads load failed: {err}");
                }
                let applied = widget.state.borrow_mut().finish_threads_load(request.token, result);
                if applied {
                    widget.paint();
                } else {
                    leptos::logging::log!("discarded stale feedback threads response");
                }
            });
        }

        /// POST the submission, then clear the inputs and refresh threads on
        /// success.
        fn spawn_submit(self: &Rc<Self>, ticket: SubmitTicket) {
            let widget = Rc::clone(self);
            wasm_bindgen_futures::spawn_local(async move {
                let configured = widget.state.borrow().config().csrf_token.clone();
                let csrf = api::resolve_csrf_token(configured.as_deref(), || cookie::read(api::CSRF_COOKIE));
                let result = api::submit_feedback(&ticket.url, &csrf, &ticket.payload).await;
                if let Err(err) = &result {
                    leptos::logging::warn!("feedback submit failed: {err}");
                }
                let outcome = widget.state.borrow_mut().finish_submit(ticket.token, result);
                widget.paint();
                let Some(outcome) = outcome else {
                    return;
                };
                if outcome.clear_fields {
                    widget.clear_fields();
                }
                if let Some(request) = outcome.reload_threads {
                    widget.spawn_threads_load(request);
                }
            });
        }
    }

    fn set_display(el: &web_sys::Element, value: &str) {
        if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
            let _ = html.style().set_property("display", value);
        }
    }
}
