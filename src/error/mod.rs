//! Error normalization subsystem.
//!
//! # Data Flow
//! ```text
//! failure at a call site
//!     → ErrorReport (tagged kind, message, optional trace/details)
//!     → responder.rs (log raw error, resolve status, build body)
//!     → ErrorBody JSON to the client
//!         production: message + timestamp only
//!         development: + stack, + details
//! ```
//!
//! # Design Decisions
//! - Explicit ErrorKind tags are primary; substring classification of
//!   message text survives only as a shim for untagged reports
//! - The disclosure boundary (stack/details) lives in exactly one place
//! - Every response body has `error: true`, a message, and a timestamp

pub mod body;
pub mod kind;
pub mod responder;

pub use body::{ErrorBody, ErrorReport};
pub use kind::{classify_message, ErrorKind};
pub use responder::{error_response, resolve_status};
