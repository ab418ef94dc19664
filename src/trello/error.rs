//! Remote API error types.
//!
//! Every failure from the upstream API is classified into a small closed
//! set of categories. Validation failures never reach this module; these
//! errors only describe what the remote side (or the transport) did.

use thiserror::Error;

/// Classified error from a Trello API call.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("forbidden: {message}")]
    Forbidden { message: String },

    #[error("rate limited: {message}")]
    RateLimited { message: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("invalid response body: {message}")]
    Decode { message: String },
}

impl ApiError {
    /// Classify a non-success HTTP status plus response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            "(empty response body)".to_string()
        } else {
            body.trim().to_string()
        };

        match status {
            401 => ApiError::Unauthorized { message },
            403 => ApiError::Forbidden { message },
            404 => ApiError::NotFound { message },
            429 => ApiError::RateLimited { message },
            _ => ApiError::Api { status, message },
        }
    }

    /// Coarse category name, stable across message changes.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "not-found",
            ApiError::Unauthorized { .. } => "unauthorized",
            ApiError::Forbidden { .. } => "forbidden",
            ApiError::RateLimited { .. } => "rate-limited",
            ApiError::Api { .. } | ApiError::Transport { .. } | ApiError::Decode { .. } => "other",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode {
                message: e.to_string(),
            }
        } else {
            ApiError::Transport {
                message: e.to_string(),
            }
        }
    }
}

/// Result type for remote API operations.
pub type ApiResult<T> = Result<T, ApiError>;
