use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::error::ApiError;
use super::types::HealthStatus;
use crate::analysis::{AnalysisRequest, AnalysisResult};

/// Anything that can answer an [`AnalysisRequest`]
///
/// Implementations make exactly one attempt per call; there is no retry.
#[async_trait]
pub trait SentimentApi: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError>;
}

/// HTTP client for the prediction service
#[derive(Debug, Clone)]
pub struct SentimentClient {
    base_url: String,
    client: reqwest::Client,
}

impl SentimentClient {
    /// Client for the service at `base_url`, using the transport's default timeouts
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            client: reqwest::Client::new(),
        }
    }

    /// Apply a whole-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        tracing::debug!("POST {}", self.url(path));
        let response = self
            .client
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(ApiError::from_network_error)?;

        Self::read_json(path, response).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        tracing::debug!("GET {}", self.url(path));
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(ApiError::from_network_error)?;

        Self::read_json(path, response).await
    }

    async fn read_json<R: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<R, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(ApiError::from_network_error)?;

        if !status.is_success() {
            let err = ApiError::from_http_status(status, &body);
            tracing::warn!("{} returned {}: {}", path, status, err);
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("{} returned an unexpected body: {}", path, e);
            ApiError::from_decode_error(e)
        })
    }

    /// Probe `GET /`
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/").await
    }
}

#[async_trait]
impl SentimentApi for SentimentClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
        let path = request.path();
        match request {
            AnalysisRequest::Sentence(body) => self
                .post_json(&path, body)
                .await
                .map(AnalysisResult::Sentence),
            AnalysisRequest::Paragraph(body) => self
                .post_json(&path, body)
                .await
                .map(AnalysisResult::Paragraph),
        }
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
