//! Static UI string tables.
//!
//! The site is primarily Russian; English is the fallback for any other
//! `<html lang>` value.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Every user-visible string rendered by this crate.
#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub trigger_label: &'static str,
    pub modal_title: &'static str,
    pub close_label: &'static str,
    pub subject_placeholder: &'static str,
    pub message_placeholder: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub enter_message: &'static str,
    pub send_failed: &'static str,
    pub network_error: &'static str,
    pub sent_default: &'static str,
    pub bind_telegram: &'static str,
    pub threads_title: &'static str,
    pub threads_loading: &'static str,
    pub threads_empty: &'static str,
    pub threads_failed: &'static str,
    pub actor_support: &'static str,
    pub actor_you: &'static str,
    pub reply_label: &'static str,
    /// `chrono` format string for thread timestamps.
    pub timestamp_format: &'static str,
    pub lightbox_label: &'static str,
    pub lightbox_prev: &'static str,
    pub lightbox_next: &'static str,
}

pub static RU: Strings = Strings {
    trigger_label: "Обратная связь",
    modal_title: "Написать нам",
    close_label: "Закрыть",
    subject_placeholder: "Тема (необязательно)",
    message_placeholder: "Ваше сообщение",
    send: "Отправить",
    sending: "Отправка…",
    enter_message: "Введите сообщение.",
    send_failed: "Ошибка отправки.",
    network_error: "Ошибка сети.",
    sent_default: "Сообщение отправлено. Ответ придёт в Telegram.",
    bind_telegram: "Привязать аккаунт в Telegram",
    threads_title: "Мои обращения",
    threads_loading: "Загрузка…",
    threads_empty: "Пока нет обращений. Ответы приходят в Telegram.",
    threads_failed: "Не удалось загрузить обращения.",
    actor_support: "Поддержка",
    actor_you: "Вы",
    reply_label: "Ответ:",
    timestamp_format: "%d.%m.%Y, %H:%M",
    lightbox_label: "Просмотр изображения",
    lightbox_prev: "Предыдущее",
    lightbox_next: "Следующее",
};

pub static EN: Strings = Strings {
    trigger_label: "Feedback",
    modal_title: "Contact us",
    close_label: "Close",
    subject_placeholder: "Subject (optional)",
    message_placeholder: "Your message",
    send: "Send",
    sending: "Sending…",
    enter_message: "Enter a message.",
    send_failed: "Failed to send.",
    network_error: "Network error.",
    sent_default: "Message sent. A reply will arrive via Telegram.",
    bind_telegram: "Link your Telegram account",
    threads_title: "My requests",
    threads_loading: "Loading…",
    threads_empty: "No requests yet. Replies arrive via Telegram.",
    threads_failed: "Failed to load requests.",
    actor_support: "Support",
    actor_you: "You",
    reply_label: "Reply:",
    timestamp_format: "%d/%m/%Y, %H:%M",
    lightbox_label: "Image viewer",
    lightbox_prev: "Previous",
    lightbox_next: "Next",
};

/// Pick the string table for an `<html lang>` value.
pub fn for_lang(lang: &str) -> &'static Strings {
    let primary = lang.trim().split(['-', '_']).next().unwrap_or_default();
    if primary.eq_ignore_ascii_case("ru") { &RU } else { &EN }
}

/// String table for the current document.
pub fn current() -> &'static Strings {
    for_lang(&crate::util::dom::document_lang())
}
