//! Client side of the sentiment prediction service
//!
//! - `POST /analyze_sentence` `{text}` → [`SentenceResult`]
//! - `POST /analyze_paragraph` `{paragraph}` → [`ParagraphResult`]
//! - `GET /` → [`HealthStatus`]
//!
//! Failed responses carry `{detail}`; see [`ApiError`].

mod client;
mod error;
mod types;

pub use client::{SentimentApi, SentimentClient};
pub use error::{ApiError, GENERIC_FAILURE};
pub use types::{
    ErrorBody, HealthStatus, ParagraphRequest, ParagraphResult, SentenceRequest, SentenceResult,
};
