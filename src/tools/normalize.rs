//! JSON extraction from raw model completions.
//!
//! Models asked for "ONLY valid JSON" still wrap the payload in fenced
//! code blocks often enough that stripping the fences is table stakes.
//! Nothing beyond that is repaired: the contained JSON is the model's
//! responsibility, and the contract here is strict-parse-or-fail.

use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;

use crate::core::error::ScoutError;

// Matches opening fences with an optional language tag (```json) and
// bare/closing fences, each with an optional trailing newline.
static FENCE: OnceLock<Regex> = OnceLock::new();

fn fence_re() -> &'static Regex {
    FENCE.get_or_init(|| Regex::new(r"```[A-Za-z0-9_-]*\r?\n?").expect("fence regex is valid"))
}

/// Parse one JSON object out of a raw completion into the target shape.
///
/// Strips all fenced-code-block delimiters, trims whitespace, then
/// strict-parses. Any failure (not JSON, wrong shape) raises
/// [`ScoutError::MalformedOutput`] carrying the original raw text.
/// Pure: identical raw text always yields an identical value.
pub fn normalize<T: DeserializeOwned>(raw: &str) -> Result<T, ScoutError> {
    let cleaned = fence_re().replace_all(raw, "");
    let cleaned = cleaned.trim();
    serde_json::from_str(cleaned).map_err(|e| ScoutError::MalformedOutput {
        message: e.to_string(),
        raw: raw.to_string(),
    })
}
