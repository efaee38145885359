use super::*;

#[test]
fn resolve_csrf_token_prefers_configured_value() {
    let token = resolve_csrf_token(Some("from-attr"), || panic!("cookie should not be read"));
    assert_eq!(token, "from-attr");
}

#[test]
fn resolve_csrf_token_falls_back_to_cookie() {
    assert_eq!(resolve_csrf_token(None, || Some("from-cookie".to_owned())), "from-cookie");
    assert_eq!(resolve_csrf_token(Some(""), || Some("from-cookie".to_owned())), "from-cookie");
}

#[test]
fn resolve_csrf_token_is_empty_when_nothing_available() {
    assert_eq!(resolve_csrf_token(None, || None), "");
}

#[test]
fn csrf_names_match_django_defaults() {
    assert_eq!(CSRF_HEADER, "X-CSRFToken");
    assert_eq!(CSRF_COOKIE, "csrftoken");
}

#[test]
fn api_error_messages_include_detail() {
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "malformed response: eof");
}
