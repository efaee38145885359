//! Fetch helpers for the feedback endpoints.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ApiError::Unavailable`, since these
//! endpoints only exist behind the page's own origin.
//!
//! ERROR HANDLING
//! ==============
//! Response bodies are decoded regardless of HTTP status: the Django views
//! answer validation failures with a 4xx carrying `{success: false, error}`.
//! Anything that is not decodable JSON of the expected shape surfaces as
//! `ApiError::Decode`; fetch failures as `ApiError::Network`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SubmitRequest, SubmitResponse, Thread};
#[cfg(feature = "csr")]
use super::types::ThreadsResponse;

/// Header Django's CSRF middleware reads the anti-forgery token from.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Cookie Django stores the anti-forgery token in.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Transport-level failure talking to a feedback endpoint.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Pick the anti-forgery token: the configured one, else the cookie value,
/// else empty.
pub fn resolve_csrf_token(configured: Option<&str>, cookie: impl FnOnce() -> Option<String>) -> String {
    match configured {
        Some(token) if !token.is_empty() => token.to_owned(),
        _ => cookie().unwrap_or_default(),
    }
}

/// POST a feedback message as JSON.
///
/// # Errors
///
/// Returns `ApiError` when the request cannot be sent or the body is not a
/// submission response.
pub async fn submit_feedback(url: &str, csrf_token: &str, payload: &SubmitRequest) -> Result<SubmitResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/json")
            .header(CSRF_HEADER, csrf_token)
            .json(payload)?
            .send()
            .await?;
        Ok(resp.json::<SubmitResponse>().await?)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, csrf_token, payload);
        Err(ApiError::Unavailable)
    }
}

/// GET the current user's support threads.
///
/// # Errors
///
/// Returns `ApiError` when the request fails or the body is not a thread
/// list.
pub async fn fetch_threads(url: &str) -> Result<Vec<Thread>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url).send().await?;
        let body = resp.json::<ThreadsResponse>().await?;
        Ok(body.threads)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}
