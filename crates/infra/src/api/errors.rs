//! API-specific error types
//!
//! Classifies portal API failures so callers can decide what is retryable
//! and what needs a new login.

use std::time::Duration;

use padron_domain::PadronError;
use thiserror::Error;

/// Categories of API errors for retry logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403) - retry after token refresh
    Authentication,
    /// Rate limiting errors (429) - retry with backoff
    RateLimit,
    /// Server errors (5xx) - retryable
    Server,
    /// Client errors (4xx except auth) - non-retryable
    Client,
    /// Network/connection errors - retryable
    Network,
    /// Configuration errors - non-retryable
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("client error: {0}")]
    Client(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Check if this error should be retried
    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::Authentication
                | ApiErrorCategory::RateLimit
                | ApiErrorCategory::Server
                | ApiErrorCategory::Network
        )
    }
}

impl From<PadronError> for ApiError {
    fn from(err: PadronError) -> Self {
        match err {
            PadronError::Network(message) => Self::Network(message),
            PadronError::Auth(message) => Self::Auth(message),
            PadronError::Config(message) => Self::Config(message),
            PadronError::NotFound(message) | PadronError::InvalidInput(message) => {
                Self::Client(message)
            }
            PadronError::Internal(message) => Self::Server(message),
        }
    }
}

impl From<ApiError> for PadronError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(message) => Self::Auth(message),
            ApiError::Client(message) => Self::InvalidInput(message),
            ApiError::Config(message) => Self::Config(message),
            ApiError::Network(message) | ApiError::RateLimit(message) => Self::Network(message),
            ApiError::Server(message) => Self::Internal(message),
            ApiError::Timeout(duration) => {
                Self::Network(format!("request timed out after {duration:?}"))
            }
        }
    }
}
