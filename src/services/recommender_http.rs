//! Recommendation service client implementation using reqwest.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::domain::{ApiConfig, AppError};
use crate::ports::{PredictReply, RecommendationClient};

/// HTTP client for the AdSpecta backend.
///
/// One request per submission: no retries, no explicit timeout, no
/// cancellation. Those are left to the transport's defaults.
#[derive(Debug, Clone)]
pub struct HttpRecommendationClient {
    base_url: Url,
    client: Client,
}

impl HttpRecommendationClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { base_url: config.base_url.clone(), client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

impl RecommendationClient for HttpRecommendationClient {
    fn predict(&self, payload: &str) -> Result<PredictReply, AppError> {
        let response = self
            .client
            .post(self.endpoint("predict"))
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_string())
            .send()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| AppError::Transport(e.to_string()))?;
        Ok(PredictReply { status, body })
    }

    fn health(&self) -> Result<PredictReply, AppError> {
        let response = self
            .client
            .get(self.endpoint("health"))
            .send()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| AppError::Transport(e.to_string()))?;
        Ok(PredictReply { status, body })
    }
}
