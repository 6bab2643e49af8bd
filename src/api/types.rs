//! Wire types for the sentiment prediction service

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /analyze_sentence`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRequest {
    pub text: String,
}

/// Body of `POST /analyze_paragraph`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRequest {
    pub paragraph: String,
}

/// Success body of `POST /analyze_sentence`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceResult {
    /// Free-form sentiment category
    pub label: String,
    pub score: f64,
    /// Input as normalized by the service
    pub cleaned_text: String,
    /// Trimmed input echoed back by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl SentenceResult {
    /// The normalized text, only when it differs from what the user typed
    pub fn processed_text<'a>(&'a self, input: &str) -> Option<&'a str> {
        if self.cleaned_text != input.trim() {
            Some(&self.cleaned_text)
        } else {
            None
        }
    }
}

/// Success body of `POST /analyze_paragraph`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphResult {
    pub average_label: String,
    pub average_score: f64,
    /// One `"<label> [<score>]"` entry per sentence, in paragraph order
    #[serde(default)]
    pub sentence_details: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<String>,
}

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub model_status: String,
}

impl HealthStatus {
    /// Whether the service reports a usable model
    pub fn model_ready(&self) -> bool {
        self.model_status == "trained"
    }
}

/// Error body returned with non-success statuses
///
/// `detail` is a string for application errors and an array of
/// `{loc, msg, type}` objects for request validation failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Human-readable message carried by `detail`, if any
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}
