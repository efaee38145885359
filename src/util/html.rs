//! Text escaping for markup built as strings.
//!
//! Produces the same output a browser gives for `innerHTML` after assigning
//! `textContent`, so interpolated user text is always shown literally.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

/// Escape `text` for insertion as HTML body text.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            other => out.push(other),
        }
    }
    out
}


/// Escape `value` for a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
