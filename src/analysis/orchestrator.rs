//! Drives one analysis form: input, mode, request lifecycle, view state
//!
//! Requests are split into [`AnalysisOrchestrator::begin`] and
//! [`AnalysisOrchestrator::complete`] so a UI can keep handling input while a
//! call is pending. Each `begin` hands out a ticket; a response is applied only
//! if its ticket is still current, i.e. the mode has not been switched and no
//! newer request has been issued since.

use std::fmt;

use super::mode::AnalysisMode;
use super::request::AnalysisRequest;
use super::state::{AnalysisResult, ViewState};
use crate::api::{ApiError, SentimentApi};

/// Shown instead of a request when there is nothing to analyze
pub const EMPTY_INPUT_NOTICE: &str = "Please enter some text.";

/// Synchronous rejection of a submission; never enters the error view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationNotice {
    EmptyInput,
}

impl fmt::Display for ValidationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationNotice::EmptyInput => f.write_str(EMPTY_INPUT_NOTICE),
        }
    }
}

impl std::error::Error for ValidationNotice {}

/// Identifies the submission a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket {
    mode: AnalysisMode,
    generation: u64,
}

impl AnalysisTicket {
    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }
}

/// A submission that has been accepted and is waiting for the service
#[derive(Debug, Clone)]
pub struct PendingAnalysis {
    pub ticket: AnalysisTicket,
    pub request: AnalysisRequest,
}

#[derive(Debug, Default)]
pub struct AnalysisOrchestrator {
    text: String,
    mode: AnalysisMode,
    view: ViewState,
    notice: Option<ValidationNotice>,
    /// Bumped on every submission and mode switch
    generation: u64,
}

impl AnalysisOrchestrator {
    pub fn new(mode: AnalysisMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn notice(&self) -> Option<ValidationNotice> {
        self.notice
    }

    /// Guard for re-submission while a call is outstanding
    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    /// Replace the input verbatim
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.notice = None;
    }

    /// Mutable access for editors that modify the text in place
    pub fn text_mut(&mut self) -> &mut String {
        self.notice = None;
        &mut self.text
    }

    /// Switch mode, dropping any result, error or pending request
    pub fn set_mode(&mut self, mode: AnalysisMode) {
        if mode != self.mode {
            tracing::debug!("Analysis mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        self.generation += 1;
        self.notice = None;
        self.view.reset();
    }

    /// Validate the input and enter Loading
    ///
    /// Whitespace-only input is rejected without touching the view.
    pub fn begin(&mut self) -> Result<PendingAnalysis, ValidationNotice> {
        if self.text.trim().is_empty() {
            tracing::debug!("Rejected empty {} submission", self.mode);
            self.notice = Some(ValidationNotice::EmptyInput);
            return Err(ValidationNotice::EmptyInput);
        }

        self.notice = None;
        self.generation += 1;
        self.view.start_loading();

        let request = AnalysisRequest::build(self.mode, &self.text);
        tracing::info!(
            "Submitting {} analysis ({} chars)",
            self.mode,
            self.text.chars().count()
        );

        Ok(PendingAnalysis {
            ticket: AnalysisTicket {
                mode: self.mode,
                generation: self.generation,
            },
            request,
        })
    }

    /// Whether a response for `ticket` would still be applied
    pub fn is_current(&self, ticket: &AnalysisTicket) -> bool {
        ticket.mode == self.mode && ticket.generation == self.generation
    }

    /// Apply the outcome of a call; returns false if it was discarded as stale
    pub fn complete(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<AnalysisResult, ApiError>,
    ) -> bool {
        if !self.is_current(&ticket) {
            tracing::debug!(
                "Discarding stale {} response (generation {} vs {})",
                ticket.mode,
                ticket.generation,
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(result) if result.mode() == ticket.mode => {
                tracing::info!(
                    "Analysis complete: {} ({})",
                    result.label(),
                    result.score()
                );
                self.view.succeed(result);
            }
            Ok(result) => {
                tracing::warn!(
                    "Expected a {} result but got a {} result",
                    ticket.mode,
                    result.mode()
                );
                self.view.fail(crate::api::GENERIC_FAILURE);
            }
            Err(err) => {
                tracing::warn!("Analysis failed: {}", err);
                self.view.fail(err.to_string());
            }
        }
        true
    }

    /// Submit and wait for the outcome in one call
    pub async fn analyze<A>(&mut self, api: &A) -> Result<(), ValidationNotice>
    where
        A: SentimentApi + ?Sized,
    {
        let PendingAnalysis { ticket, request } = self.begin()?;
        let outcome = api.analyze(&request).await;
        self.complete(ticket, outcome);
        Ok(())
    }
}
