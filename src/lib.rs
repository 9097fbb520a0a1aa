//! Request-validation and error-normalization helpers for an HTTP ingest
//! gateway.
//!
//! The core is a small, stateless library: precondition checks on incoming
//! requests (content type, body/file presence, file size), a denylist input
//! sanitizer, base64 size estimation, and a responder that normalizes any
//! error into a JSON body with a status code. The `http` module wraps the
//! helpers in an axum service that exercises all of them.

pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod sanitize;
pub mod validate;

pub use config::{GuardConfig, LimitsConfig, RuntimeMode};
pub use error::{error_response, ErrorBody, ErrorKind, ErrorReport};
pub use http::GuardServer;
pub use sanitize::{sanitize_text, sanitize_value};
pub use validate::{
    file_within_limit, image_estimate_within_limit, validate_request, RequestDescriptor,
    ValidationReport,
};
