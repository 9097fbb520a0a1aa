//! Denylist patterns and the text sanitizer.
//!
//! This is a heuristic strip of a fixed set of known-dangerous fragments,
//! not an HTML/JS parser. The output is NOT guaranteed safe to render
//! unescaped; only the listed patterns are removed. Callers wanting real
//! guarantees need an allowlist-based encoder instead.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use serde_json::Value;

fn script_block_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        RegexBuilder::new(r"<script\b.*?</script>")
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .expect("script block regex is valid")
    })
}

fn scheme_prefix_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        RegexBuilder::new(r"javascript:")
            .case_insensitive(true)
            .build()
            .expect("scheme prefix regex is valid")
    })
}

fn event_handler_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        // No word-boundary anchor: mid-word occurrences match too.
        RegexBuilder::new(r"on\w+\s*=")
            .case_insensitive(true)
            .build()
            .expect("event handler regex is valid")
    })
}

/// Strip `<script>` blocks (contents included, non-greedy), `javascript:`
/// scheme prefixes, and inline event-handler attributes (`onclick=`,
/// `onerror =`, ...), then trim surrounding whitespace.
pub fn sanitize_text(input: &str) -> String {
    let stripped = script_block_regex().replace_all(input, "");
    let stripped = scheme_prefix_regex().replace_all(&stripped, "");
    let stripped = event_handler_regex().replace_all(&stripped, "");
    stripped.trim().to_string()
}

/// Sanitize a JSON value: strings are run through [`sanitize_text`], every
/// other type is returned unchanged. Non-textual input is a pass-through,
/// not an error.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_text(&s)),
        other => other,
    }
}
