//! Normalized error report and response body.

use serde::Serialize;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::config::RuntimeMode;
use crate::error::kind::ErrorKind;

const FALLBACK_MESSAGE: &str = "Internal server error";

/// An error as handed to the responder: an open payload with optional
/// kind, message, diagnostic trace, and structured details.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ErrorReport {
    pub kind: Option<ErrorKind>,
    pub message: Option<String>,
    pub trace: Option<String>,
    pub details: Option<Value>,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// JSON body of every error response. `stack` and `details` are emitted
/// only in development mode; `ErrorBody::from_report` is the single place
/// that decides, so the disclosure boundary cannot drift.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorBody {
    pub fn from_report(report: &ErrorReport, mode: RuntimeMode) -> Self {
        let timestamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();

        let (stack, details) = if mode.is_development() {
            (report.trace.clone(), report.details.clone())
        } else {
            (None, None)
        };

        Self {
            error: true,
            message: report
                .message
                .clone()
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
            timestamp,
            stack,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_report() -> ErrorReport {
        ErrorReport::new("disk full")
            .with_trace("at io::write\nat flush")
            .with_details(json!({"device": "sda1"}))
    }

    #[test]
    fn production_never_discloses_stack_or_details() {
        let body = ErrorBody::from_report(&full_report(), RuntimeMode::Production);
        assert!(body.stack.is_none());
        assert!(body.details.is_none());

        let json = serde_json::to_value(&body).unwrap();
        let map = json.as_object().unwrap();
        assert!(!map.contains_key("stack"));
        assert!(!map.contains_key("details"));
    }

    #[test]
    fn development_includes_stack_and_details_when_available() {
        let body = ErrorBody::from_report(&full_report(), RuntimeMode::Development);
        assert_eq!(body.stack.as_deref(), Some("at io::write\nat flush"));
        assert_eq!(body.details, Some(json!({"device": "sda1"})));
    }

    #[test]
    fn development_omits_absent_diagnostics() {
        let body = ErrorBody::from_report(&ErrorReport::new("oops"), RuntimeMode::Development);
        let json = serde_json::to_value(&body).unwrap();
        let map = json.as_object().unwrap();
        assert!(!map.contains_key("stack"));
        assert!(!map.contains_key("details"));
    }

    #[test]
    fn missing_message_falls_back() {
        let body = ErrorBody::from_report(&ErrorReport::default(), RuntimeMode::Production);
        assert_eq!(body.message, "Internal server error");
    }

    #[test]
    fn body_always_flags_error_and_carries_timestamp() {
        let body = ErrorBody::from_report(&ErrorReport::new("x"), RuntimeMode::Production);
        assert!(body.error);
        // RFC 3339: date, 'T', time.
        assert!(body.timestamp.contains('T'));
    }
}
