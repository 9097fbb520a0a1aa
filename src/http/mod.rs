//! HTTP surface of the ingest gateway.
//!
//! # Data Flow
//! ```text
//! incoming request
//!     → request_id.rs (attach x-request-id)
//!     → server.rs (descriptor → validator → sanitizer → receipt)
//!     → error responder for every rejection
//! ```

pub mod request_id;
pub mod server;

pub use request_id::X_REQUEST_ID;
pub use server::{GuardServer, IngestReceipt};
