//! Request precondition checks.
//!
//! The validator runs every rule and collects every failure, so a client
//! fixing a rejected request sees the full list at once rather than one
//! error per round trip.

use axum::body::Bytes;
use serde::Serialize;

use crate::config::LimitsConfig;

/// Media types the ingest endpoint accepts.
pub const ACCEPTED_MEDIA_TYPES: [&str; 3] =
    ["text/plain", "application/json", "multipart/form-data"];

pub const CONTENT_TYPE_ERROR: &str =
    "Content-Type must be text/plain, application/json, or multipart/form-data";
pub const PRESENCE_ERROR: &str = "Request body or file is required";
pub const FILE_SIZE_ERROR: &str = "File size exceeds maximum allowed size";

/// An uploaded file as seen by the validator: only the declared size
/// matters for the rules, the name is carried for logging.
#[derive(Debug, Clone, Serialize)]
pub struct FileUpload {
    pub name: Option<String>,
    pub size: u64,
}

/// The fields of an incoming request the validator looks at. Built once by
/// the HTTP layer; the validator itself never touches the framework types.
#[derive(Debug, Clone, Default)]
pub struct RequestDescriptor {
    /// Raw Content-Type header value, if any.
    pub content_type: Option<String>,

    /// Request body bytes. An empty body counts as absent.
    pub body: Option<Bytes>,

    /// Uploaded file, if the request carried one.
    pub file: Option<FileUpload>,
}

impl RequestDescriptor {
    /// Media-type match against the header's essence: parameters (such as
    /// `charset` or a multipart `boundary`) are ignored, comparison is
    /// case-insensitive.
    pub fn matches_media_type(&self, media_type: &str) -> bool {
        match &self.content_type {
            Some(value) => {
                let essence = value.split(';').next().unwrap_or("").trim();
                essence.eq_ignore_ascii_case(media_type)
            }
            None => false,
        }
    }

    fn has_body(&self) -> bool {
        self.body.as_ref().is_some_and(|b| !b.is_empty())
    }
}

/// Outcome of request validation. `is_valid` is derived from `errors` at
/// construction, so the two can never disagree.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check content-type, body/file presence, and file size against the given
/// limits. Every rule is evaluated; failures accumulate in rule order.
/// Pure function of the descriptor and the limits.
pub fn validate_request(request: &RequestDescriptor, limits: &LimitsConfig) -> ValidationReport {
    let mut errors = Vec::new();

    let content_type_ok = ACCEPTED_MEDIA_TYPES
        .iter()
        .any(|mt| request.matches_media_type(mt));
    if !content_type_ok {
        errors.push(CONTENT_TYPE_ERROR.to_string());
    }

    if !request.has_body() && request.file.is_none() {
        errors.push(PRESENCE_ERROR.to_string());
    }

    if let Some(file) = &request.file {
        if file.size > limits.max_file_size {
            errors.push(FILE_SIZE_ERROR.to_string());
        }
    }

    ValidationReport::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> LimitsConfig {
        LimitsConfig::default()
    }

    fn text_request(body: &str) -> RequestDescriptor {
        RequestDescriptor {
            content_type: Some("text/plain".to_string()),
            body: Some(Bytes::copy_from_slice(body.as_bytes())),
            file: None,
        }
    }

    #[test]
    fn accepts_each_allowed_media_type() {
        for mt in ACCEPTED_MEDIA_TYPES {
            let request = RequestDescriptor {
                content_type: Some(mt.to_string()),
                body: Some(Bytes::from_static(b"payload")),
                file: None,
            };
            let report = validate_request(&request, &limits());
            assert!(report.is_valid, "{mt} should be accepted: {:?}", report.errors);
        }
    }

    #[test]
    fn media_type_parameters_are_ignored() {
        let request = RequestDescriptor {
            content_type: Some("application/json; charset=utf-8".to_string()),
            body: Some(Bytes::from_static(b"{}")),
            file: None,
        };
        assert!(validate_request(&request, &limits()).is_valid);

        let multipart = RequestDescriptor {
            content_type: Some("multipart/form-data; boundary=xyz".to_string()),
            body: None,
            file: Some(FileUpload {
                name: None,
                size: 10,
            }),
        };
        assert!(validate_request(&multipart, &limits()).is_valid);
    }

    #[test]
    fn rejects_unlisted_media_types() {
        for mt in ["application/xml", "text/html", "application/octet-stream"] {
            let request = RequestDescriptor {
                content_type: Some(mt.to_string()),
                body: Some(Bytes::from_static(b"payload")),
                file: None,
            };
            let report = validate_request(&request, &limits());
            assert!(!report.is_valid);
            assert!(report.errors.contains(&CONTENT_TYPE_ERROR.to_string()));
        }
    }

    #[test]
    fn missing_content_type_is_rejected() {
        let request = RequestDescriptor {
            content_type: None,
            body: Some(Bytes::from_static(b"payload")),
            file: None,
        };
        let report = validate_request(&request, &limits());
        assert!(report.errors.contains(&CONTENT_TYPE_ERROR.to_string()));
    }

    #[test]
    fn missing_body_and_file_fails_presence_rule() {
        let request = RequestDescriptor {
            content_type: Some("application/json".to_string()),
            body: None,
            file: None,
        };
        let report = validate_request(&request, &limits());
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec![PRESENCE_ERROR.to_string()]);
    }

    #[test]
    fn empty_body_counts_as_absent() {
        let report = validate_request(&text_request(""), &limits());
        assert!(report.errors.contains(&PRESENCE_ERROR.to_string()));
    }

    #[test]
    fn file_alone_satisfies_presence() {
        let request = RequestDescriptor {
            content_type: Some("multipart/form-data".to_string()),
            body: None,
            file: Some(FileUpload {
                name: Some("a.bin".to_string()),
                size: 1,
            }),
        };
        assert!(validate_request(&request, &limits()).is_valid);
    }

    #[test]
    fn file_size_boundary_at_default_limit() {
        let at_limit = RequestDescriptor {
            content_type: Some("multipart/form-data".to_string()),
            body: None,
            file: Some(FileUpload {
                name: None,
                size: 10_485_760,
            }),
        };
        assert!(validate_request(&at_limit, &limits()).is_valid);

        let over = RequestDescriptor {
            content_type: Some("multipart/form-data".to_string()),
            body: None,
            file: Some(FileUpload {
                name: None,
                size: 10_485_761,
            }),
        };
        let report = validate_request(&over, &limits());
        assert!(!report.is_valid);
        assert!(report.errors.contains(&FILE_SIZE_ERROR.to_string()));
    }

    #[test]
    fn multiple_failures_collect_in_rule_order() {
        let request = RequestDescriptor {
            content_type: Some("application/xml".to_string()),
            body: None,
            file: Some(FileUpload {
                name: None,
                size: 20_000_000,
            }),
        };
        let report = validate_request(&request, &limits());
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec![
                CONTENT_TYPE_ERROR.to_string(),
                FILE_SIZE_ERROR.to_string(),
            ]
        );
    }

    #[test]
    fn content_type_and_presence_fail_together() {
        // Presence and size cannot fail at once (a file satisfies
        // presence), so the maximal failure set pairs content-type with
        // each of the other two.
        let no_payload = RequestDescriptor {
            content_type: None,
            body: None,
            file: None,
        };
        let report = validate_request(&no_payload, &limits());
        assert_eq!(
            report.errors,
            vec![CONTENT_TYPE_ERROR.to_string(), PRESENCE_ERROR.to_string()]
        );
    }

    #[test]
    fn is_valid_tracks_errors() {
        let ok = ValidationReport::from_errors(vec![]);
        assert!(ok.is_valid);
        let bad = ValidationReport::from_errors(vec!["x".to_string()]);
        assert!(!bad.is_valid);
    }
}
