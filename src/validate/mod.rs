//! Request validation subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → http layer builds RequestDescriptor (content type, body, file)
//!     → request.rs (content-type / presence / file-size rules)
//!     → ValidationReport (all failures collected)
//!     → size.rs (standalone buffer and base64 estimate checks)
//! ```
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: descriptor + limits → report
//! - Limits arrive as explicit values; no ambient environment reads

pub mod request;
pub mod size;

pub use request::{
    validate_request, FileUpload, RequestDescriptor, ValidationReport, ACCEPTED_MEDIA_TYPES,
};
pub use size::{file_within_limit, image_estimate_within_limit};
