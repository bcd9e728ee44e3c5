use reqwest::StatusCode;
use thiserror::Error;

/// A failed call to the search backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Network failure, or a 2xx response whose body could not be decoded.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// The text carried by the failure action.
    ///
    /// For status errors this is the response body, falling back to the status
    /// line when the body is empty.
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { status, body } if body.trim().is_empty() => status.to_string(),
            ApiError::Status { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store is shut down")]
    Closed,
}
