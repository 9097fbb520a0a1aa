//! Error response construction.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::config::RuntimeMode;
use crate::error::body::{ErrorBody, ErrorReport};
use crate::error::kind::classify_message;
use crate::observability::metrics;

/// Resolve the status code for a report: an explicit kind wins, then the
/// message-classification shim, then the caller's fallback.
pub fn resolve_status(report: &ErrorReport, fallback: StatusCode) -> StatusCode {
    if let Some(status) = report.kind.and_then(|k| k.status()) {
        return status;
    }
    report
        .message
        .as_deref()
        .and_then(classify_message)
        .and_then(|k| k.status())
        .unwrap_or(fallback)
}

/// Normalize an error into a JSON response. Logs the raw report before
/// normalizing, so the full error always reaches the logs even when the
/// client body is stripped down in production mode.
pub fn error_response(report: &ErrorReport, fallback: StatusCode, mode: RuntimeMode) -> Response {
    tracing::error!(
        kind = ?report.kind,
        message = report.message.as_deref().unwrap_or("<none>"),
        details = ?report.details,
        "Request failed"
    );

    let status = resolve_status(report, fallback);
    let body = ErrorBody::from_report(report, mode);
    metrics::record_error_response(status.as_u16());

    (status, Json(body)).into_response()
}
