use super::*;

#[test]
fn escape_text_neutralizes_markup() {
    assert_eq!(
        escape_text("<script>alert(1)</script>"),
        "&lt;script&gt;alert(1)&lt;/script&gt;"
    );
}

#[test]
fn escape_text_escapes_ampersand_first() {
    assert_eq!(escape_text("a & b"), "a &amp; b");
    assert_eq!(escape_text("&lt;"), "&amp;lt;");
}

#[test]
fn escape_text_keeps_quotes_literal() {
    assert_eq!(escape_text(r#"say "hi" it's"#), r#"say "hi" it's"#);
}

#[test]
fn escape_text_encodes_non_breaking_space() {
    assert_eq!(escape_text("a\u{a0}b"), "a&nbsp;b");
}

#[test]
fn escape_text_passes_plain_and_unicode_through() {
    assert_eq!(escape_text(""), "");
    assert_eq!(escape_text("Привет, мир"), "Привет, мир");
}


#[test]
fn escape_attr_closes_no_quotes() {
    assert_eq!(escape_attr(r#"https://t.me/x?a=1&b="2""#), "https://t.me/x?a=1&amp;b=&quot;2&quot;");
}
