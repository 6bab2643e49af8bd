//! senti: terminal client for a transliterated Marathi sentiment service
//!
//! This library provides:
//! - The analysis form logic (modes, request building, view state)
//! - An HTTP client for the prediction service
//! - Decoding and classification of sentence and paragraph results
//! - A terminal UI and one-shot CLI commands

pub mod analysis;
pub mod api;
pub mod config;
pub mod transport;
pub mod tui;

pub use analysis::{AnalysisMode, AnalysisOrchestrator, AnalysisResult, ViewState};
pub use api::{ApiError, SentimentApi, SentimentClient};
pub use config::Config;
