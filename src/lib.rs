//! adspecta: CLI client for the AdSpecta ad-space recommendation service.
//!
//! Collects campaign parameters (budget, audience type, age range), submits
//! them to the remote `/predict` endpoint, and classifies the reply into one
//! of four outcomes the renderer can display without further interpretation.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::AppContext;
use services::HttpRecommendationClient;

pub use app::commands::health::HealthStatus;
pub use domain::{
    ApiConfig, AppError, AudienceType, CampaignForm, PredictRequest, RequestOutcome,
    SubmissionState, resolve_base_url,
};

/// Submit a campaign form against the configured service and return the
/// settled outcome.
///
/// `api_url` overrides both the `ADSPECTA_API_URL` environment variable and
/// the compiled-in default. The submission itself never fails: transport and
/// parse problems land in [`RequestOutcome::Failed`]. An `Err` here means the
/// request could not even be set up (bad base URL).
pub fn recommend(form: &CampaignForm, api_url: Option<&str>) -> Result<RequestOutcome, AppError> {
    let config = ApiConfig::resolve(api_url)?;
    let client = HttpRecommendationClient::new(&config)?;
    let mut ctx = AppContext::new(client);
    Ok(app::commands::recommend::submit(&mut ctx, form))
}

/// Probe the service's `/health` endpoint.
pub fn health(api_url: Option<&str>) -> Result<HealthStatus, AppError> {
    let config = ApiConfig::resolve(api_url)?;
    let client = HttpRecommendationClient::new(&config)?;
    Ok(app::commands::health::execute(&client))
}
