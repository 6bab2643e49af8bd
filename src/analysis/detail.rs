//! Decoding of per-sentence detail strings in paragraph results
//!
//! The service encodes each sentence as `"<label> [<integer score>]"`.
//! Decoding never fails: an entry without a bracket segment, or with a
//! non-numeric score, keeps its label and scores 0.

use std::num::IntErrorKind;

use serde::Serialize;

use super::classify::{ScoreBucket, SentimentTone};
use crate::api::ParagraphResult;

const SCORE_OPEN: &str = " [";

/// One decoded `sentence_details` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceDetail {
    pub label: String,
    pub score: i64,
    /// The entry exactly as received, which is what gets displayed
    pub raw: String,
}

impl SentenceDetail {
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(SCORE_OPEN);
        let label = parts.next().unwrap_or_default().to_string();
        let score = parts.next().map(parse_score).unwrap_or(0);
        Self {
            label,
            score,
            raw: raw.to_string(),
        }
    }

    pub fn tone(&self) -> SentimentTone {
        SentimentTone::from_label(&self.label)
    }

    pub fn bucket(&self) -> ScoreBucket {
        ScoreBucket::from_score(self.score as f64)
    }
}

/// Leading signed integer of `"<n>]"`, 0 when there is none
///
/// Out-of-range values saturate at the `i64` bounds.
fn parse_score(segment: &str) -> i64 {
    let s = segment.replacen(']', "", 1);
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let end = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| sign_len + i);
    match s[..end].parse::<i64>() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}

/// A breakdown row with its 1-based display position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub index: usize,
    #[serde(flatten)]
    pub detail: SentenceDetail,
}

/// Decode every entry, preserving order
pub fn decode_details(details: &[String]) -> Vec<SentenceDetail> {
    details.iter().map(|d| SentenceDetail::parse(d)).collect()
}

/// Sentence-by-sentence breakdown, shown only for multi-sentence paragraphs
pub fn breakdown(result: &ParagraphResult) -> Option<Vec<BreakdownEntry>> {
    if result.sentence_details.len() <= 1 {
        return None;
    }

    Some(
        decode_details(&result.sentence_details)
            .into_iter()
            .enumerate()
            .map(|(i, detail)| BreakdownEntry {
                index: i + 1,
                detail,
            })
            .collect(),
    )
}
