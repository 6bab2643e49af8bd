//! View state of the analysis form
//!
//! A single tagged value, so "loading and showing an error" cannot be
//! represented at all.

use serde::Serialize;

use super::classify::{ScoreBucket, SentimentTone};
use super::detail::{breakdown, BreakdownEntry};
use super::mode::AnalysisMode;
use crate::api::{ParagraphResult, SentenceResult};

/// A decoded success body, tagged by the mode that requested it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AnalysisResult {
    Sentence(SentenceResult),
    Paragraph(ParagraphResult),
}

impl AnalysisResult {
    pub fn mode(&self) -> AnalysisMode {
        match self {
            Self::Sentence(_) => AnalysisMode::Sentence,
            Self::Paragraph(_) => AnalysisMode::Paragraph,
        }
    }

    /// Headline label: the sentence label or the paragraph average label
    pub fn label(&self) -> &str {
        match self {
            Self::Sentence(r) => &r.label,
            Self::Paragraph(r) => &r.average_label,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            Self::Sentence(r) => r.score,
            Self::Paragraph(r) => r.average_score,
        }
    }

    pub fn tone(&self) -> SentimentTone {
        SentimentTone::from_label(self.label())
    }

    pub fn bucket(&self) -> ScoreBucket {
        ScoreBucket::from_score(self.score())
    }

    /// Per-sentence rows; `None` for sentence results and single-sentence paragraphs
    pub fn breakdown(&self) -> Option<Vec<BreakdownEntry>> {
        match self {
            Self::Sentence(_) => None,
            Self::Paragraph(r) => breakdown(r),
        }
    }
}

/// Render a score the way the service sent it: `2`, `-1`, `0.67`
pub fn format_score(score: f64) -> String {
    format!("{}", score)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Nothing submitted yet, or cleared by a mode switch
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    Error(String),
    Result(AnalysisResult),
}

impl ViewState {
    pub fn start_loading(&mut self) {
        *self = ViewState::Loading;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = ViewState::Error(message.into());
    }

    pub fn succeed(&mut self, result: AnalysisResult) {
        *self = ViewState::Result(result);
    }

    pub fn reset(&mut self) {
        *self = ViewState::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            ViewState::Result(r) => Some(r),
            _ => None,
        }
    }
}
