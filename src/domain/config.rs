//! Base-URL resolution for the recommendation service.

use url::Url;

use super::error::AppError;

/// Environment variable consulted for the service base URL.
pub const API_URL_ENV: &str = "ADSPECTA_API_URL";

/// Deployed backend used when no override is provided.
pub const DEFAULT_API_URL: &str = "https://adspecta3-production.up.railway.app";

/// Resolve the service base URL: a present, non-empty override wins,
/// otherwise the compiled-in default. Pure so it is testable without the
/// process environment.
pub fn resolve_base_url(override_url: Option<&str>) -> Result<Url, AppError> {
    let raw = match override_url {
        Some(value) if !value.trim().is_empty() => value.trim(),
        _ => DEFAULT_API_URL,
    };
    Url::parse(raw).map_err(|e| AppError::config_error(format!("Invalid API base URL '{raw}': {e}")))
}

/// Connection settings for the recommendation service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
}

impl ApiConfig {
    /// Resolve from an explicit override, falling back to the
    /// `ADSPECTA_API_URL` environment variable, then the compiled-in
    /// default. The environment is read once, here.
    pub fn resolve(override_url: Option<&str>) -> Result<Self, AppError> {
        let env_value = std::env::var(API_URL_ENV).ok();
        let effective = override_url.or(env_value.as_deref());
        Ok(Self { base_url: resolve_base_url(effective)? })
    }
}
