//! HTML rendering for the feedback thread history region.
//!
//! The region is injected with `inner_html`, so every server-provided string
//! goes through `escape_text` first. Labels come from the static string
//! tables and are inserted as-is.

#[cfg(test)]
#[path = "feedback_threads_test.rs"]
mod feedback_threads_test;

use std::fmt::Write as _;

use crate::i18n::Strings;
use crate::net::types::{FlatThread, Message, Thread};
use crate::state::feedback::ThreadsView;
use crate::util::html::escape_text;

/// Render the thread region for `view`. `format_ts` turns a server
/// timestamp into display text.
pub fn render_threads_html(view: &ThreadsView, strings: &Strings, format_ts: impl Fn(&str) -> String) -> String {
    match view {
        ThreadsView::Idle => String::new(),
        ThreadsView::Loading => muted(strings.threads_loading),
        ThreadsView::Failed => muted(strings.threads_failed),
        ThreadsView::Loaded(threads) if threads.is_empty() => muted(strings.threads_empty),
        ThreadsView::Loaded(threads) => {
            let mut html = String::new();
            for thread in threads {
                html.push_str("<div class=\"feedback-thread\">");
                match thread {
                    Thread::Conversation(messages) => render_conversation(&mut html, messages, strings, &format_ts),
                    Thread::Flat(flat) => render_flat(&mut html, flat, strings, &format_ts),
                }
                html.push_str("</div>");
            }
            html
        }
    }
}

fn muted(text: &str) -> String {
    format!("<p class=\"text-muted\">{text}</p>")
}

fn render_conversation(html: &mut String, messages: &[Message], strings: &Strings, format_ts: &impl Fn(&str) -> String) {
    for message in messages {
        let actor = if message.is_from_admin { strings.actor_support } else { strings.actor_you };
        let _ = write!(
            html,
            "<div class=\"feedback-thread__meta\">{actor} · {}</div>\
             <div class=\"feedback-thread__message\">{}</div>",
            escape_text(&format_ts(&message.created_at)),
            escape_text(&message.text),
        );
    }
}

fn render_flat(html: &mut String, thread: &FlatThread, strings: &Strings, format_ts: &impl Fn(&str) -> String) {
    let _ = write!(
        html,
        "<div class=\"feedback-thread__meta\">#{} · {}</div>\
         <div class=\"feedback-thread__message\">{}</div>",
        escape_text(&thread.id),
        escape_text(&format_ts(&thread.created_at)),
        escape_text(&thread.message),
    );
    for reply in &thread.replies {
        let _ = write!(
            html,
            "<div class=\"feedback-thread__reply\"><strong>{}</strong> {} \
             <span class=\"feedback-thread__reply-date\">{}</span></div>",
            strings.reply_label,
            escape_text(&reply.text),
            escape_text(&format_ts(&reply.created_at)),
        );
    }
}
