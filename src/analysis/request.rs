//! Request building: (mode, text) to endpoint and payload

use serde::Serialize;

use super::mode::AnalysisMode;
use crate::api::{ParagraphRequest, SentenceRequest};

/// A request for one of the two analysis endpoints
///
/// Text is carried verbatim; trimming only happens for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisRequest {
    Sentence(SentenceRequest),
    Paragraph(ParagraphRequest),
}

impl AnalysisRequest {
    pub fn build(mode: AnalysisMode, text: &str) -> Self {
        match mode {
            AnalysisMode::Sentence => Self::Sentence(SentenceRequest {
                text: text.to_string(),
            }),
            AnalysisMode::Paragraph => Self::Paragraph(ParagraphRequest {
                paragraph: text.to_string(),
            }),
        }
    }

    pub fn mode(&self) -> AnalysisMode {
        match self {
            Self::Sentence(_) => AnalysisMode::Sentence,
            Self::Paragraph(_) => AnalysisMode::Paragraph,
        }
    }

    /// Path of the endpoint, relative to the service base URL
    pub fn path(&self) -> String {
        format!("/{}", self.mode().endpoint())
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Sentence(r) => &r.text,
            Self::Paragraph(r) => &r.paragraph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentence_payload() {
        let req = AnalysisRequest::build(AnalysisMode::Sentence, "khup chan");
        assert_eq!(req.path(), "/analyze_sentence");
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "text": "khup chan" }));
    }

    #[test]
    fn test_paragraph_payload() {
        let req = AnalysisRequest::build(AnalysisMode::Paragraph, "chan. vait.");
        assert_eq!(req.path(), "/analyze_paragraph");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "paragraph": "chan. vait." })
        );
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let req = AnalysisRequest::build(AnalysisMode::Sentence, "  mast \n");
        assert_eq!(req.text(), "  mast \n");
        assert_eq!(req.mode(), AnalysisMode::Sentence);
    }
}
