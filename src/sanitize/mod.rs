//! Input sanitization subsystem.
//!
//! # Design Decisions
//! - Denylist, not allowlist: only the listed injection patterns are
//!   stripped, and the limitation is documented rather than silently
//!   widened
//! - Non-string values pass through untouched
//! - Patterns compiled once, shared across calls

pub mod denylist;

pub use denylist::{sanitize_text, sanitize_value};
