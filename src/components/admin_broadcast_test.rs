use super::*;

#[test]
fn applies_only_on_broadcast_add_page() {
    assert!(applies_to_path("/admin/telegram_bot/telegrambroadcast/add/"));
    assert!(!applies_to_path("/admin/telegram_bot/telegrambroadcast/5/change/"));
    assert!(!applies_to_path("/"));
}

#[test]
fn explicit_submit_controls_may_submit() {
    assert!(is_explicit_submit(Some("submit")));
    assert!(is_explicit_submit(Some("image")));
}

#[test]
fn implicit_or_other_submitters_are_blocked() {
    assert!(!is_explicit_submit(None));
    assert!(!is_explicit_submit(Some("button")));
    assert!(!is_explicit_submit(Some("text")));
}
