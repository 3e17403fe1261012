pub mod adspace;
pub mod campaign;
pub mod config;
pub mod error;
pub mod outcome;
pub mod payload;

pub use adspace::AdSpaceView;
pub use campaign::{AudienceType, CampaignForm};
pub use config::{API_URL_ENV, ApiConfig, DEFAULT_API_URL, resolve_base_url};
pub use error::AppError;
pub use outcome::{RequestOutcome, SubmissionState, SubmissionTicket};
pub use payload::{CAMPAIGN_LAT, CAMPAIGN_LNG, PredictRequest};
