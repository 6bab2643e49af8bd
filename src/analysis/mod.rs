//! Analysis form logic, independent of any front end
//!
//! The pipeline is linear: text + [`AnalysisMode`] are turned into an
//! [`AnalysisRequest`], sent through a [`crate::api::SentimentApi`], and the
//! outcome lands in a [`ViewState`]. Presentation helpers classify labels and
//! scores and decode paragraph breakdowns.

mod classify;
mod detail;
mod mode;
mod orchestrator;
mod request;
mod state;

pub use classify::{ScoreBucket, SentimentTone};
pub use detail::{breakdown, decode_details, BreakdownEntry, SentenceDetail};
pub use mode::AnalysisMode;
pub use orchestrator::{
    AnalysisOrchestrator, AnalysisTicket, PendingAnalysis, ValidationNotice, EMPTY_INPUT_NOTICE,
};
pub use request::AnalysisRequest;
pub use state::{format_score, AnalysisResult, ViewState};
