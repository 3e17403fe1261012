use thiserror::Error;

/// Library-wide error type for adspecta operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Network transport failure (DNS, connect, read).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Response body was not valid JSON. Carries the raw text so the user
    /// can see what the endpoint actually returned.
    #[error("JSON parse failed: {body}")]
    MalformedResponse { body: String },

    /// Interactive prompt failed or was aborted.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
