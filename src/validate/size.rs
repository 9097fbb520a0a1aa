//! Size checks for raw buffers and base64 payloads.

/// Default ceiling for file uploads (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760;

/// Default ceiling for the estimated decoded size of base64 images.
pub const DEFAULT_MAX_IMAGE_ESTIMATE: u64 = 100_000;

/// True iff the buffer's byte length is within `max_size`.
pub fn file_within_limit(data: &[u8], max_size: u64) -> bool {
    data.len() as u64 <= max_size
}

/// True iff the estimated decoded size of a base64 string is within
/// `max_size`. The estimate is a fixed 0.75 × character count — the
/// base64 expansion ratio — not an exact decode. Callers needing
/// exactness must decode and measure; this intentionally trades precision
/// for skipping the decode.
pub fn image_estimate_within_limit(base64_text: &str, max_size: u64) -> bool {
    let estimated = base64_text.len() as f64 * 0.75;
    estimated <= max_size as f64
}
