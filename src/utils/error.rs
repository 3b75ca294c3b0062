//! Error handling module
//!
//! Defines error types and handling logic used in the crate

use reqwest::StatusCode;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Client-side request error (configuration, transport context)
    #[error("Request error: {0}")]
    Client(#[from] anyhow::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication error
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Authorization error
    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Request rejected by the backend as invalid
    #[error("Request validation failed: {0}")]
    Validation(String),

    /// Backend reported an error
    #[error("Backend error: {0}")]
    Backend(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, please try again later")]
    RateLimit,

    /// Service temporarily unavailable
    #[error("Service temporarily unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Map a backend status code onto an error variant
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Authentication(message),
            StatusCode::FORBIDDEN => AppError::Authorization(message),
            StatusCode::BAD_REQUEST => AppError::Validation(message),
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => AppError::RateLimit,
            StatusCode::REQUEST_TIMEOUT => AppError::Timeout,
            StatusCode::SERVICE_UNAVAILABLE => AppError::ServiceUnavailable(message),
            status => AppError::Backend(format!("{} - {}", status, message)),
        }
    }

    /// The backend status code this error corresponds to, when there is one
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            AppError::Authentication(_) => Some(StatusCode::UNAUTHORIZED),
            AppError::Authorization(_) => Some(StatusCode::FORBIDDEN),
            AppError::Validation(_) => Some(StatusCode::BAD_REQUEST),
            AppError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            AppError::RateLimit => Some(StatusCode::TOO_MANY_REQUESTS),
            AppError::Timeout => Some(StatusCode::REQUEST_TIMEOUT),
            AppError::ServiceUnavailable(_) => Some(StatusCode::SERVICE_UNAVAILABLE),
            AppError::Backend(_)
            | AppError::Client(_)
            | AppError::HttpClient(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => None,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Authentication(_) => "authentication_error",
            AppError::Authorization(_) => "permission_error",
            AppError::Validation(_) => "invalid_request_error",
            AppError::NotFound(_) => "not_found_error",
            AppError::RateLimit => "rate_limit_error",
            AppError::Timeout => "timeout_error",
            AppError::ServiceUnavailable(_) => "service_unavailable_error",
            AppError::Backend(_) => "api_error",
            AppError::Client(_)
            | AppError::HttpClient(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => "client_error",
        }
    }

    /// Whether detailed error information should be logged
    pub fn should_log_details(&self) -> bool {
        !matches!(
            self,
            AppError::Authentication(_) | AppError::Authorization(_)
        )
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Error handling helper functions
#[allow(dead_code)]
pub mod helpers {
    use super::*;

    /// Create authentication error
    pub fn auth_error(message: impl Into<String>) -> AppError {
        AppError::Authentication(message.into())
    }

    /// Create validation error
    pub fn validation_error(message: impl Into<String>) -> AppError {
        AppError::Validation(message.into())
    }

    /// Create backend error
    pub fn backend_error(message: impl Into<String>) -> AppError {
        AppError::Backend(message.into())
    }

    /// Create not-found error
    pub fn not_found_error(message: impl Into<String>) -> AppError {
        AppError::NotFound(message.into())
    }

    /// Create internal error
    pub fn internal_error(message: impl Into<String>) -> AppError {
        AppError::Internal(message.into())
    }

    /// Create service unavailable error
    pub fn service_unavailable_error(message: impl Into<String>) -> AppError {
        AppError::ServiceUnavailable(message.into())
    }
}

/// Error context extension trait
#[allow(dead_code)]
pub trait ErrorContext<T> {
    /// Add validation error context
    fn validation_context(self, message: &str) -> AppResult<T>;

    /// Add backend error context
    fn backend_context(self, message: &str) -> AppResult<T>;

    /// Add internal error context
    fn internal_context(self, message: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn validation_context(self, message: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Validation(format!("{}: {}", message, e)))
    }

    fn backend_context(self, message: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Backend(format!("{}: {}", message, e)))
    }

    fn internal_context(self, message: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Internal(format!("{}: {}", message, e)))
    }
}
