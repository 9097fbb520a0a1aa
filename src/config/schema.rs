//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the ingest
//! gateway. All types derive Serde traits for deserialization from config
//! files, and every field has a default so a minimal (or absent) config file
//! is enough to run.

use serde::{Deserialize, Serialize};

/// Root configuration for the ingest gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GuardConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Request validation limits.
    pub limits: LimitsConfig,

    /// Runtime mode, gates diagnostic disclosure in error responses.
    pub mode: RuntimeMode,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Limits applied by the request validator and the HTTP body layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum accepted file upload size in bytes.
    pub max_file_size: u64,

    /// Maximum estimated decoded size for base64 image payloads, in bytes.
    pub max_image_estimate: u64,

    /// Maximum request body size accepted by the HTTP layer, in bytes.
    /// Must exceed `max_file_size` so the validator, not the transport,
    /// produces the oversize error.
    pub body_limit: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10_485_760, // 10 MiB
            max_image_estimate: 100_000,
            body_limit: 12 * 1024 * 1024,
        }
    }
}

/// Runtime mode. Development mode attaches `stack` and `details` to error
/// responses; production mode never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    #[default]
    Production,
}

impl RuntimeMode {
    pub fn is_development(self) -> bool {
        matches!(self, RuntimeMode::Development)
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
