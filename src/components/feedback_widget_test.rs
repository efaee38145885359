use super::*;
use crate::i18n::EN;
use crate::net::api::ApiError;
use crate::net::types::SubmitResponse;
use crate::state::feedback::WidgetConfig;

fn widget(authenticated: bool) -> FeedbackState {
    FeedbackState::new(
        WidgetConfig {
            submit_url: Some("/feedback/submit/".to_owned()),
            threads_url: Some("/feedback/threads/".to_owned()),
            csrf_token: None,
            is_authenticated: authenticated,
        },
        &EN,
    )
}

fn paint(state: &FeedbackState) -> WidgetPaint {
    WidgetPaint::of(state, &EN, str::to_owned)
}

fn respond(state: &mut FeedbackState, body: serde_json::Value) {
    let ticket = state.begin_submit("hello", "").unwrap();
    let response: SubmitResponse = serde_json::from_value(body).unwrap();
    state.finish_submit(ticket.token, Ok(response));
}

// =============================================================================
// WidgetPaint
// =============================================================================

#[test]
fn initial_paint_leaves_server_markup_alone() {
    let p = paint(&widget(true));
    assert!(!p.modal_open);
    assert!(p.form_visible);
    assert!(!p.submitting);
    assert_eq!(p.error, None);
    assert_eq!(p.success_html, None);
    assert_eq!(p.threads_html, None);
}

#[test]
fn opening_signed_in_shows_loading_threads() {
    let mut state = widget(true);
    assert!(state.open().is_some());
    let p = paint(&state);
    assert!(p.modal_open);
    assert_eq!(p.threads_html.as_deref(), Some("<p class=\"text-muted\">Loading…</p>"));
}

#[test]
fn opening_anonymous_keeps_thread_list_untouched() {
    let mut state = widget(false);
    assert!(state.open().is_none());
    let p = paint(&state);
    assert!(p.modal_open);
    assert_eq!(p.threads_html, None);
}

#[test]
fn closing_hides_modal() {
    let mut state = widget(false);
    state.open();
    state.close();
    assert!(!paint(&state).modal_open);
}

#[test]
fn empty_message_shows_inline_error() {
    let mut state = widget(false);
    assert!(state.begin_submit("   ", "topic").is_err());
    let p = paint(&state);
    assert_eq!(p.error.as_deref(), Some("Enter a message."));
    assert!(p.form_visible);
}

#[test]
fn pending_submit_disables_button_and_clears_error() {
    let mut state = widget(false);
    let _ = state.begin_submit("", "");
    state.begin_submit("hello", "").unwrap();
    let p = paint(&state);
    assert!(p.submitting);
    assert_eq!(p.error, None);
}

#[test]
fn success_replaces_form_with_binding_link() {
    let mut state = widget(false);
    respond(&mut state, serde_json::json!({"success": true, "telegram_binding_url": "https://t.me/x"}));
    let p = paint(&state);
    assert!(!p.form_visible);
    assert!(!p.submitting);
    let html = p.success_html.unwrap();
    assert!(html.contains("<a href=\"https://t.me/x\""));
    assert!(html.contains("target=\"_blank\" rel=\"noopener noreferrer\""));
    assert!(html.contains("Message sent. A reply will arrive via Telegram."));
}

#[test]
fn rejection_keeps_form_and_shows_reason() {
    let mut state = widget(false);
    respond(&mut state, serde_json::json!({"success": false, "error": "too long"}));
    let p = paint(&state);
    assert!(p.form_visible);
    assert_eq!(p.success_html, None);
    assert_eq!(p.error.as_deref(), Some("too long"));
}

#[test]
fn transport_failure_shows_network_error() {
    let mut state = widget(false);
    let ticket = state.begin_submit("hello", "").unwrap();
    state.finish_submit(ticket.token, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(paint(&state).error.as_deref(), Some("Network error."));
}

// =============================================================================
// render_success_html
// =============================================================================

#[test]
fn success_without_link_is_message_only() {
    let success = SubmitSuccess { message: "Thanks".to_owned(), binding_url: None };
    assert_eq!(render_success_html(&success, &EN), "<p>Thanks</p>");
}

#[test]
fn success_escapes_message_and_link() {
    let success = SubmitSuccess {
        message: "<b>ok</b>".to_owned(),
        binding_url: Some("https://t.me/bot?start=a&b=\"c\"".to_owned()),
    };
    let html = render_success_html(&success, &EN);
    assert!(html.starts_with("<p>&lt;b&gt;ok&lt;/b&gt;</p>"));
    assert!(html.contains("href=\"https://t.me/bot?start=a&amp;b=&quot;c&quot;\""));
}
