//! Classification of raw upstream payloads into reply text or errors.

use std::fmt;

use serde_json::Value;

/// Text used when the first candidate lacks `content.parts[0].text`.
pub const MISSING_TEXT_FALLBACK: &str = "No response generated";
/// Text used when the payload has no candidates at all.
pub const NO_CANDIDATES_FALLBACK: &str = "No response generated from AI";

/// Outcome of inspecting an upstream payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamResult {
    Success { reply_text: String },
    /// The API answered with an `error` object.
    UpstreamError { message: String },
    /// The payload was not valid JSON.
    MalformedResponse { message: String },
}

impl UpstreamResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UpstreamResult::Success { .. })
    }

    /// Final user-facing string.
    pub fn into_text(self) -> String {
        match self {
            UpstreamResult::Success { reply_text } => reply_text,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for UpstreamResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamResult::Success { reply_text } => f.write_str(reply_text),
            UpstreamResult::UpstreamError { message } => write!(f, "API Error: {message}"),
            UpstreamResult::MalformedResponse { message } => {
                write!(f, "Error parsing response: {message}")
            }
        }
    }
}

/// Classify a raw `generateContent` response body.
///
/// Never panics: every unexpected shape degrades to a descriptive result.
pub fn extract(raw_payload: &str) -> UpstreamResult {
    let root: Value = match serde_json::from_str(raw_payload) {
        Ok(root) => root,
        Err(e) => {
            return UpstreamResult::MalformedResponse {
                message: e.to_string(),
            };
        }
    };

    if let Some(error) = root.get("error") {
        let message = error
            .get("message")
            .and_then(scalar_text)
            .unwrap_or_default();
        return UpstreamResult::UpstreamError { message };
    }

    match root.get("candidates").and_then(Value::as_array) {
        Some(candidates) if !candidates.is_empty() => {
            let text = candidates[0]
                .pointer("/content/parts/0/text")
                .and_then(scalar_text)
                .unwrap_or_else(|| MISSING_TEXT_FALLBACK.to_string());
            UpstreamResult::Success {
                reply_text: text.trim().to_string(),
            }
        }
        _ => UpstreamResult::Success {
            reply_text: NO_CANDIDATES_FALLBACK.to_string(),
        },
    }
}

/// Text of a scalar JSON node; `None` for null, arrays and objects.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
