//! Presentation classifiers for labels and scores
//!
//! Labels come from the service as free text, so tone is a substring
//! heuristic over an open domain rather than a match on known variants.
//! Tone and bucket are computed from different fields and may disagree
//! (a "Positive" label with score 0); both are rendered as-is.

use serde::Serialize;

/// Colour family for a sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentTone {
    Positive,
    Negative,
    Neutral,
}

impl SentimentTone {
    /// Case-insensitive substring match; "positive" wins over "negative"
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("positive") {
            Self::Positive
        } else if lower.contains("negative") {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Frame colour for a numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBucket {
    Positive,
    Negative,
    Neutral,
}

impl ScoreBucket {
    /// `>= 1` positive, `<= -1` negative, anything in between neutral
    pub fn from_score(score: f64) -> Self {
        if score >= 1.0 {
            Self::Positive
        } else if score <= -1.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}
