//! Cookie-consent controller.
//!
//! The banner stays hidden once the visitor has made a choice; until then
//! analytics must not load. The controller talks to the page only through
//! `ConsentHost`, so the browser binding and the tests provide their own.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use crate::util::cookie::CookieSpec;

pub const COOKIE_NAME: &str = "cookie_consent";
pub const COOKIE_MAX_AGE_SECS: u64 = 31_536_000;
pub const COOKIE_PATH: &str = "/";

pub const ACCEPTED_EVENT: &str = "cookie_consent_accepted";
pub const REFUSED_EVENT: &str = "cookie_consent_refused";

/// The visitor's recorded decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Refused,
}

impl ConsentChoice {
    /// Interpret a stored cookie value. Anything but `true`/`false` means no
    /// choice has been made.
    pub fn from_cookie(value: Option<&str>) -> Option<Self> {
        match value {
            Some("true") => Some(Self::Accepted),
            Some("false") => Some(Self::Refused),
            _ => None,
        }
    }

    pub fn cookie_value(self) -> &'static str {
        match self {
            Self::Accepted => "true",
            Self::Refused => "false",
        }
    }

    pub fn event_name(self) -> &'static str {
        match self {
            Self::Accepted => ACCEPTED_EVENT,
            Self::Refused => REFUSED_EVENT,
        }
    }

    pub fn cookie(self) -> CookieSpec<'static> {
        CookieSpec {
            name: COOKIE_NAME,
            value: self.cookie_value(),
            max_age_secs: COOKIE_MAX_AGE_SECS,
            path: COOKIE_PATH,
        }
    }
}

/// Page capabilities the consent banner needs.
pub trait ConsentHost {
    fn read_cookie(&self, name: &str) -> Option<String>;
    fn write_cookie(&mut self, spec: &CookieSpec<'_>);
    fn set_banner_visible(&mut self, visible: bool);
    /// Broadcast a page-wide notification (a `window` event in the browser).
    fn dispatch(&mut self, event: &str);
    /// Invoke the page's optional legacy acceptance hook.
    fn call_accept_hook(&mut self) {}
}

/// Consent banner bound to a host.
pub struct ConsentBanner<H> {
    host: H,
}

impl<H: ConsentHost> ConsentBanner<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Current stored choice.
    pub fn choice(&self) -> Option<ConsentChoice> {
        ConsentChoice::from_cookie(self.host.read_cookie(COOKIE_NAME).as_deref())
    }

    pub fn accepted(&self) -> bool {
        self.choice() == Some(ConsentChoice::Accepted)
    }

    pub fn refused(&self) -> bool {
        self.choice() == Some(ConsentChoice::Refused)
    }

    /// Show the banner only while no choice is stored.
    pub fn init(&mut self) {
        let visible = self.choice().is_none();
        self.host.set_banner_visible(visible);
    }

    pub fn accept(&mut self) {
        self.record(ConsentChoice::Accepted);
        self.host.call_accept_hook();
    }

    pub fn refuse(&mut self) {
        self.record(ConsentChoice::Refused);
    }

    fn record(&mut self, choice: ConsentChoice) {
        self.host.write_cookie(&choice.cookie());
        self.host.set_banner_visible(false);
        self.host.dispatch(choice.event_name());
    }
}
