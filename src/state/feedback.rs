//! Feedback widget state: modal visibility, the submission form lifecycle
//! and the fetched thread history.
//!
//! DESIGN
//! ======
//! Every async request is issued through a `begin_*` call that hands out a
//! `RequestToken`, and its completion is applied through the matching
//! `finish_*` call. A completion whose token is no longer the latest of its
//! kind is dropped, so a slow thread-list response can never overwrite a
//! fresher one (last request wins), and closing the modal implicitly
//! cancels an in-flight thread load.
//!
//! Submissions are single-flight: `begin_submit` refuses while one is
//! pending. Closing the modal does not invalidate a submission, because by
//! then the server may already have accepted the message.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use crate::i18n::Strings;
use crate::net::api::ApiError;
use crate::net::types::{SubmitRequest, SubmitResponse, Thread};

pub const ATTR_SUBMIT_URL: &str = "data-submit-url";
pub const ATTR_THREADS_URL: &str = "data-threads-url";
pub const ATTR_CSRF: &str = "data-csrf";
pub const ATTR_IS_AUTHENTICATED: &str = "data-is-authenticated";

/// Widget configuration, parsed once from the widget root's attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    pub submit_url: Option<String>,
    pub threads_url: Option<String>,
    pub csrf_token: Option<String>,
    pub is_authenticated: bool,
}

impl WidgetConfig {
    /// Build from an attribute lookup. Empty values count as absent.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| attr(name).filter(|v| !v.trim().is_empty());
        Self {
            submit_url: non_empty(ATTR_SUBMIT_URL),
            threads_url: non_empty(ATTR_THREADS_URL),
            csrf_token: non_empty(ATTR_CSRF),
            is_authenticated: attr(ATTR_IS_AUTHENTICATED).as_deref() == Some("1"),
        }
    }

    /// Thread history is only shown to signed-in users with an endpoint.
    pub fn loads_threads(&self) -> bool {
        self.is_authenticated && self.threads_url.is_some()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Submission form lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    Submitted(SubmitSuccess),
    /// Inline error shown above an editable form.
    Errored(String),
}

/// Success panel contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitSuccess {
    pub message: String,
    pub binding_url: Option<String>,
}

/// Thread history region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ThreadsView {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Thread>),
    Failed,
}

/// Why a submission did not reach the success panel.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("a submission is already in flight")]
    Busy,
    #[error("no submission endpoint configured")]
    NotConfigured,
    #[error(transparent)]
    Transport(#[from] ApiError),
    #[error("server rejected submission: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}

impl SubmitError {
    /// Inline error text for this failure, or `None` when the attempt should
    /// be ignored silently.
    pub fn user_message(&self, strings: &Strings) -> Option<String> {
        match self {
            Self::EmptyMessage => Some(strings.enter_message.to_owned()),
            Self::Busy | Self::NotConfigured => None,
            Self::Transport(_) => Some(strings.network_error.to_owned()),
            Self::Rejected(reason) => Some(
                reason
                    .as_deref()
                    .filter(|r| !r.is_empty())
                    .unwrap_or(strings.send_failed)
                    .to_owned(),
            ),
        }
    }
}

/// Identifies one issued request; only the latest token of a kind is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// A thread-list fetch the caller should perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreadsRequest {
    pub token: RequestToken,
    pub url: String,
}

/// A submission the caller should POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    pub token: RequestToken,
    pub url: String,
    pub payload: SubmitRequest,
}

/// Follow-up work after a successful submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Clear the message and subject inputs.
    pub clear_fields: bool,
    /// Refresh the thread history.
    pub reload_threads: Option<ThreadsRequest>,
}

/// Complete feedback widget state for one page.
#[derive(Clone, Debug)]
pub struct FeedbackState {
    config: WidgetConfig,
    strings: &'static Strings,
    pub modal: ModalState,
    pub form: FormState,
    pub threads: ThreadsView,
    submit_seq: u64,
    threads_seq: u64,
}

impl FeedbackState {
    pub fn new(config: WidgetConfig, strings: &'static Strings) -> Self {
        Self {
            config,
            strings,
            modal: ModalState::Closed,
            form: FormState::Editing,
            threads: ThreadsView::Idle,
            submit_seq: 0,
            threads_seq: 0,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    pub fn is_submitting(&self) -> bool {
        self.form == FormState::Submitting
    }

    /// Inline error text, if the form is in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match &self.form {
            FormState::Errored(msg) => Some(msg),
            _ => None,
        }
    }

    /// Open the modal. Returns the thread load to perform, if any.
    pub fn open(&mut self) -> Option<ThreadsRequest> {
        self.modal = ModalState::Open;
        self.begin_threads_load()
    }

    /// Close the modal. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if self.modal == ModalState::Closed {
            return false;
        }
        self.modal = ModalState::Closed;
        self.threads_seq += 1;
        if self.threads == ThreadsView::Loading {
            self.threads = ThreadsView::Idle;
        }
        true
    }

    /// Start a thread-list load, superseding any load still in flight.
    pub fn begin_threads_load(&mut self) -> Option<ThreadsRequest> {
        if !self.config.loads_threads() {
            return None;
        }
        let url = self.config.threads_url.clone()?;
        self.threads_seq += 1;
        self.threads = ThreadsView::Loading;
        Some(ThreadsRequest { token: RequestToken(self.threads_seq), url })
    }

    /// Apply a thread-list result. Returns `false` when the result was stale
    /// and discarded.
    pub fn finish_threads_load(&mut self, token: RequestToken, result: Result<Vec<Thread>, ApiError>) -> bool {
        if token.0 != self.threads_seq {
            return false;
        }
        self.threads = match result {
            Ok(threads) => ThreadsView::Loaded(threads),
            Err(_) => ThreadsView::Failed,
        };
        true
    }

    /// Validate the form and start a submission.
    ///
    /// # Errors
    ///
    /// `EmptyMessage` (form moves to the error state, nothing is sent),
    /// `Busy` while another submission is pending, or `NotConfigured`
    /// without a submission endpoint. The last two leave state untouched.
    pub fn begin_submit(&mut self, message: &str, subject: &str) -> Result<SubmitTicket, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::Busy);
        }
        let Some(url) = self.config.submit_url.clone() else {
            return Err(SubmitError::NotConfigured);
        };
        let message = message.trim();
        if message.is_empty() {
            self.fail(SubmitError::EmptyMessage);
            return Err(SubmitError::EmptyMessage);
        }
        self.form = FormState::Submitting;
        self.submit_seq += 1;
        Ok(SubmitTicket {
            token: RequestToken(self.submit_seq),
            url,
            payload: SubmitRequest { message: message.to_owned(), subject: subject.trim().to_owned() },
        })
    }

    /// Apply a submission result.
    ///
    /// Returns the follow-up work on success, `None` on failure or when the
    /// result was stale.
    pub fn finish_submit(
        &mut self,
        token: RequestToken,
        result: Result<SubmitResponse, ApiError>,
    ) -> Option<SubmitOutcome> {
        if token.0 != self.submit_seq || !self.is_submitting() {
            return None;
        }
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                self.fail(SubmitError::Transport(err));
                return None;
            }
        };
        if !response.success {
            self.fail(SubmitError::Rejected(response.error));
            return None;
        }
        let message = response
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| self.strings.sent_default.to_owned());
        let binding_url = response.telegram_binding_url.filter(|u| !u.is_empty());
        self.form = FormState::Submitted(SubmitSuccess { message, binding_url });
        Some(SubmitOutcome { clear_fields: true, reload_threads: self.begin_threads_load() })
    }

    fn fail(&mut self, err: SubmitError) {
        if let Some(msg) = err.user_message(self.strings) {
            self.form = FormState::Errored(msg);
        }
    }
}
