//! `document.cookie` parsing and `Set-Cookie`-style string building.
//!
//! Parsing and formatting are pure so they can be tested natively; the
//! `read`/`write` wrappers touch the live document only in `csr` builds.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves untouched.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Find `name` in a `document.cookie` string and percent-decode its value.
///
/// Matches whole names only: looking up `token` never returns the value of
/// `csrftoken`.
pub fn find(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim_start)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then_some(value)
        })
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// A cookie assignment as written to `document.cookie`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieSpec<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub max_age_secs: u64,
    pub path: &'a str,
}

impl CookieSpec<'_> {
    /// Render as `name=value; max-age=N; path=P; SameSite=Lax`.
    pub fn to_assignment(&self) -> String {
        let path = if self.path.is_empty() { "/" } else { self.path };
        format!(
            "{}={}; max-age={}; path={}; SameSite=Lax",
            self.name,
            utf8_percent_encode(self.value, COMPONENT),
            self.max_age_secs,
            path
        )
    }
}

/// Read a cookie from the live document.
pub fn read(name: &str) -> Option<String> {
    find(&crate::util::dom::cookie_string(), name)
}

/// Write a cookie to the live document.
pub fn write(spec: &CookieSpec<'_>) {
    crate::util::dom::set_cookie_string(&spec.to_assignment());
}
