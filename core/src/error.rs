//! Error types for the lighting client.
//!
//! # Design
//! Every failure of an operation surfaces as one `RequestError`. The
//! variants only record where the failure came from; none of them is
//! retryable or recoverable from the client's point of view.

use thiserror::Error;

/// Errors returned by `LightingClient` operations.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The service answered with a status other than 200.
    #[error("request failed with status code {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, refused connection,
    /// timeout, truncated body).
    #[error("error in request: {0}")]
    Transport(#[from] TransportError),

    /// A 200 response whose body is not JSON.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// `set_color` was given something other than `#RGB` or `#RRGGBB`.
    #[error("invalid hex code {0:?}: must be #RRGGBB or #RGB")]
    InvalidColor(String),
}

impl RequestError {
    /// Status code of a rejected request, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Transport-level failure reported by a `Transport` implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    /// Message built from `err` and every error in its `source()` chain,
    /// joined with `": "`. Causes already quoted by their parent are skipped.
    pub fn from_chain(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let part = cause.to_string();
            if !message.contains(&part) {
                message.push_str(": ");
                message.push_str(&part);
            }
            source = cause.source();
        }
        TransportError(message)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::from_chain(&err)
    }
}
