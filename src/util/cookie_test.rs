use super::*;

// =============================================================
// find
// =============================================================

#[test]
fn find_returns_value_for_exact_name() {
    let cookies = "sessionid=abc; csrftoken=tok123; cookie_consent=true";
    assert_eq!(find(cookies, "csrftoken").as_deref(), Some("tok123"));
    assert_eq!(find(cookies, "cookie_consent").as_deref(), Some("true"));
    assert_eq!(find(cookies, "sessionid").as_deref(), Some("abc"));
}

#[test]
fn find_does_not_match_name_suffixes() {
    assert_eq!(find("csrftoken=tok123", "token"), None);
    assert_eq!(find("xcookie_consent=true", "cookie_consent"), None);
}

#[test]
fn find_missing_cookie_is_none() {
    assert_eq!(find("", "cookie_consent"), None);
    assert_eq!(find("a=1; b=2", "c"), None);
}

#[test]
fn find_percent_decodes_value() {
    assert_eq!(find("msg=hello%20world%21", "msg").as_deref(), Some("hello world!"));
}

#[test]
fn find_keeps_equals_signs_inside_value() {
    assert_eq!(find("k=a=b", "k").as_deref(), Some("a=b"));
}

#[test]
fn find_allows_empty_value() {
    assert_eq!(find("k=; other=1", "k").as_deref(), Some(""));
}

#[test]
fn find_returns_first_match() {
    assert_eq!(find("k=first; k=second", "k").as_deref(), Some("first"));
}

// =============================================================
// CookieSpec
// =============================================================

#[test]
fn to_assignment_formats_attributes() {
    let spec = CookieSpec { name: "cookie_consent", value: "true", max_age_secs: 31_536_000, path: "/" };
    assert_eq!(spec.to_assignment(), "cookie_consent=true; max-age=31536000; path=/; SameSite=Lax");
}

#[test]
fn to_assignment_encodes_value_like_encode_uri_component() {
    let spec = CookieSpec { name: "k", value: "a b;c(d)", max_age_secs: 1, path: "/x" };
    assert_eq!(spec.to_assignment(), "k=a%20b%3Bc(d); max-age=1; path=/x; SameSite=Lax");
}

#[test]
fn to_assignment_defaults_empty_path_to_root() {
    let spec = CookieSpec { name: "k", value: "v", max_age_secs: 5, path: "" };
    assert!(spec.to_assignment().contains("; path=/;"));
}

#[test]
fn read_without_browser_finds_nothing() {
    assert_eq!(read("csrftoken"), None);
}
