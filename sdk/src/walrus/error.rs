use thiserror::Error;

/// Errors returned by the [`crate::walrus::WalrusClient`].
#[derive(Debug, Error)]
pub enum WalrusError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Walrus API error ({status_code}): {message}")]
    ApiError { status_code: u16, message: String },
    #[error("Failed to serialize data to JSON: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl WalrusError {
    /// HTTP status code returned by Walrus, if the request reached it.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            WalrusError::ApiError { status_code, .. } => Some(*status_code),
            WalrusError::HttpError(e) => e.status().map(|status| status.as_u16()),
            WalrusError::SerializationError(_) => None,
        }
    }
}
