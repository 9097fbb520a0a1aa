//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (MAX_FILE_SIZE, NODE_ENV)
//!     → GuardConfig (immutable)
//!     → shared by value/Arc with the server and handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Environment is read once at load time; downstream functions take
//!   explicit config values and never touch ambient process state

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{GuardConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, RuntimeMode};
