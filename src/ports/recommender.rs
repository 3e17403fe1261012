//! Recommendation service port definition.

use crate::domain::AppError;

/// Raw reply from the service: HTTP status plus the unparsed body. Outcome
/// classification happens in the domain, away from the transport.
#[derive(Debug, Clone)]
pub struct PredictReply {
    pub status: u16,
    pub body: String,
}

/// Port for recommendation service operations.
pub trait RecommendationClient {
    /// POST the encoded payload to `/predict` and return the raw reply.
    fn predict(&self, payload: &str) -> Result<PredictReply, AppError>;

    /// GET `/health`.
    fn health(&self) -> Result<PredictReply, AppError>;
}

/// Canned client for exercising the submission flow without a network.
#[derive(Debug, Clone, Default)]
pub struct MockRecommendationClient {
    pub predict_body: String,
    pub health_body: String,
}

impl RecommendationClient for MockRecommendationClient {
    fn predict(&self, _payload: &str) -> Result<PredictReply, AppError> {
        Ok(PredictReply { status: 200, body: self.predict_body.clone() })
    }

    fn health(&self) -> Result<PredictReply, AppError> {
        Ok(PredictReply { status: 200, body: self.health_body.clone() })
    }
}
