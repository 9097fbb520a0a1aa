//! Error classification.
//!
//! Call sites in this crate tag errors with an explicit [`ErrorKind`].
//! [`classify_message`] is the compatibility shim for reports that arrive
//! untagged: it infers a kind from substrings of the message text, in a
//! fixed order, case-sensitively. It is deliberately kept as a fallback
//! only — message text is a fragile thing to hang status codes on.

use axum::http::StatusCode;
use serde::Serialize;

/// Tagged error categories and their HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Timeout,
    NotFound,
    Validation,
    Unauthorized,
    /// No specific category; the responder falls back to the
    /// caller-supplied status code.
    Other,
}

impl ErrorKind {
    /// Status code for this kind. `Other` has none: the caller's fallback
    /// code applies.
    pub fn status(self) -> Option<StatusCode> {
        match self {
            ErrorKind::Timeout => Some(StatusCode::REQUEST_TIMEOUT),
            ErrorKind::NotFound => Some(StatusCode::NOT_FOUND),
            ErrorKind::Validation => Some(StatusCode::BAD_REQUEST),
            ErrorKind::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            ErrorKind::Other => None,
        }
    }
}

/// Infer a kind from message text. First matching rule wins; matching is
/// case-sensitive substring containment.
pub fn classify_message(message: &str) -> Option<ErrorKind> {
    if message.contains("timeout") {
        Some(ErrorKind::Timeout)
    } else if message.contains("not found") || message.contains("No data") {
        Some(ErrorKind::NotFound)
    } else if message.contains("validation") || message.contains("invalid") {
        Some(ErrorKind::Validation)
    } else if message.contains("unauthorized") || message.contains("API key") {
        Some(ErrorKind::Unauthorized)
    } else {
        None
    }
}
