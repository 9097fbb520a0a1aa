//! HTTP server setup and the ingest handler.
//!
//! # Responsibilities
//! - Create the Axum Router with the ingest and health routes
//! - Wire up middleware (tracing, timeout, body limits, request ID)
//! - Build a RequestDescriptor from each incoming request
//! - Run the validator, normalize rejections through the error responder
//! - Sanitize accepted textual payloads before acknowledging them

use std::time::{Duration, Instant};

use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, FromRequest, Multipart, State},
    http::{header, Request, StatusCode},
    middleware,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{GuardConfig, LimitsConfig, RuntimeMode};
use crate::error::{error_response, ErrorKind, ErrorReport};
use crate::http::request_id::{request_id_middleware, X_REQUEST_ID};
use crate::observability::metrics;
use crate::sanitize::{sanitize_text, sanitize_value};
use crate::validate::{image_estimate_within_limit, validate_request, FileUpload, RequestDescriptor};

/// Application state injected into handlers. Limits and mode are explicit
/// values; handlers never read the process environment.
#[derive(Clone)]
pub struct AppState {
    pub limits: LimitsConfig,
    pub mode: RuntimeMode,
}

/// HTTP server for the ingest gateway.
pub struct GuardServer {
    router: Router,
    config: GuardConfig,
}

impl GuardServer {
    /// Create a new server with the given configuration.
    pub fn new(config: GuardConfig) -> Self {
        let state = AppState {
            limits: config.limits.clone(),
            mode: config.mode,
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GuardConfig, state: AppState) -> Router {
        Router::new()
            .route("/ingest", post(ingest_handler))
            .route("/health", get(health_handler))
            .layer(DefaultBodyLimit::max(config.limits.body_limit))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(config.limits.body_limit))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mode = ?self.config.mode,
            max_file_size = self.config.limits.max_file_size,
            "Ingest gateway starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Ingest gateway stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Clone the router, mainly for in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Acknowledgement returned for accepted payloads.
#[derive(Debug, Serialize)]
pub struct IngestReceipt {
    pub accepted: bool,
    pub content_type: Option<String>,
    /// Size of the accepted payload after sanitization, or the uploaded
    /// file size.
    pub bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// Main ingest handler: descriptor → validator → sanitizer → receipt.
async fn ingest_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let descriptor = match build_descriptor(request, content_type, state.limits.body_limit).await {
        Ok(d) => d,
        Err(report) => {
            let response = error_response(&report, StatusCode::BAD_REQUEST, state.mode);
            metrics::record_ingest(response.status().as_u16(), start);
            return response;
        }
    };

    let report = validate_request(&descriptor, &state.limits);
    if !report.is_valid {
        tracing::warn!(
            request_id = %request_id,
            errors = ?report.errors,
            "Request rejected by validator"
        );
        metrics::record_validation_failures(report.errors.len());
        let error = ErrorReport::new(report.errors.join("; "))
            .with_kind(ErrorKind::Validation)
            .with_details(json!({ "errors": report.errors }));
        let response = error_response(&error, StatusCode::BAD_REQUEST, state.mode);
        metrics::record_ingest(response.status().as_u16(), start);
        return response;
    }

    let receipt = match build_receipt(&descriptor, &state.limits) {
        Ok(r) => r,
        Err(report) => {
            let response = error_response(&report, StatusCode::BAD_REQUEST, state.mode);
            metrics::record_ingest(response.status().as_u16(), start);
            return response;
        }
    };

    tracing::debug!(
        request_id = %request_id,
        bytes = receipt.bytes,
        "Payload accepted"
    );
    metrics::record_ingest(StatusCode::OK.as_u16(), start);
    (StatusCode::OK, Json(receipt)).into_response()
}

/// Liveness probe.
async fn health_handler() -> &'static str {
    "ok"
}

/// Pull the validator-relevant fields off the framework request. Multipart
/// requests contribute their first file part as the upload; everything
/// else contributes the raw body bytes.
async fn build_descriptor(
    request: Request<Body>,
    content_type: Option<String>,
    body_limit: usize,
) -> Result<RequestDescriptor, ErrorReport> {
    let is_multipart = content_type
        .as_deref()
        .map(|v| essence(v).eq_ignore_ascii_case("multipart/form-data"))
        .unwrap_or(false);

    if is_multipart {
        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| multipart_error(e.to_string()))?;
        let mut file = None;
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e.to_string()))?
        {
            // Text fields are not uploads; only a field with a filename
            // counts as the file, so a fileless form still fails the
            // presence rule.
            let name = match field.file_name() {
                Some(name) => name.to_string(),
                None => continue,
            };
            let data = field
                .bytes()
                .await
                .map_err(|e| multipart_error(e.to_string()))?;
            file = Some(FileUpload {
                name: Some(name),
                size: data.len() as u64,
            });
            break;
        }
        Ok(RequestDescriptor {
            content_type,
            body: None,
            file,
        })
    } else {
        let bytes = axum::body::to_bytes(request.into_body(), body_limit)
            .await
            .map_err(|e| {
                ErrorReport::new(format!("invalid request body: {e}"))
                    .with_kind(ErrorKind::Validation)
            })?;
        Ok(RequestDescriptor {
            content_type,
            body: Some(bytes),
            file: None,
        })
    }
}

/// Sanitize the accepted payload and build its receipt.
fn build_receipt(
    descriptor: &RequestDescriptor,
    limits: &LimitsConfig,
) -> Result<IngestReceipt, ErrorReport> {
    if let Some(file) = &descriptor.file {
        return Ok(IngestReceipt {
            accepted: true,
            content_type: descriptor.content_type.clone(),
            bytes: file.size,
            file_name: file.name.clone(),
        });
    }

    let body = descriptor.body.clone().unwrap_or_else(Bytes::new);

    if descriptor.matches_media_type("application/json") {
        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            ErrorReport::new(format!("invalid JSON payload: {e}")).with_kind(ErrorKind::Validation)
        })?;

        // Base64 image fields are screened by estimate, never decoded.
        if let Some(image) = value.get("image").and_then(Value::as_str) {
            if !image_estimate_within_limit(image, limits.max_image_estimate) {
                return Err(ErrorReport::new(
                    "invalid image: estimated size exceeds maximum allowed size",
                )
                .with_kind(ErrorKind::Validation));
            }
        }

        let sanitized = sanitize_value(value);
        // Mirror the text path: the receipt reports the sanitized size,
        // not the raw body length.
        let bytes = match &sanitized {
            Value::String(s) => s.len() as u64,
            other => serde_json::to_vec(other)
                .map(|v| v.len() as u64)
                .unwrap_or(body.len() as u64),
        };
        return Ok(IngestReceipt {
            accepted: true,
            content_type: descriptor.content_type.clone(),
            bytes,
            file_name: None,
        });
    }

    // text/plain
    let text = String::from_utf8_lossy(&body);
    let sanitized = sanitize_text(&text);
    Ok(IngestReceipt {
        accepted: true,
        content_type: descriptor.content_type.clone(),
        bytes: sanitized.len() as u64,
        file_name: None,
    })
}

fn essence(content_type: &str) -> &str {
    content_type.split(';').next().unwrap_or("").trim()
}

fn multipart_error(detail: String) -> ErrorReport {
    ErrorReport::new(format!("invalid multipart payload: {detail}"))
        .with_kind(ErrorKind::Validation)
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
