//! Analysis mode selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which endpoint a submission goes to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// One sentence, scored on its own
    Sentence,
    /// Several sentences, scored individually and averaged
    #[default]
    Paragraph,
}

impl AnalysisMode {
    /// Remote endpoint path segment for this mode
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Sentence => "analyze_sentence",
            Self::Paragraph => "analyze_paragraph",
        }
    }

    /// Lowercase noun used in prompts ("sentence" / "paragraph")
    pub fn noun(self) -> &'static str {
        match self {
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
        }
    }

    /// Tab label shown in the mode selector
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Sentence => "Single Sentence",
            Self::Paragraph => "Paragraph",
        }
    }

    /// Label of the submit action for this mode
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Sentence => "Analyze Sentence",
            Self::Paragraph => "Analyze Paragraph",
        }
    }

    pub fn placeholder(self) -> String {
        format!("Enter transliterated Marathi {}...", self.noun())
    }

    /// The other mode
    pub fn toggle(self) -> Self {
        match self {
            Self::Sentence => Self::Paragraph,
            Self::Paragraph => Self::Sentence,
        }
    }

    pub fn all() -> [AnalysisMode; 2] {
        [Self::Sentence, Self::Paragraph]
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentence" | "single" => Ok(Self::Sentence),
            "paragraph" | "para" => Ok(Self::Paragraph),
            other => Err(format!(
                "unknown analysis mode '{}', expected 'sentence' or 'paragraph'",
                other
            )),
        }
    }
}
