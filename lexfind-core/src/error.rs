//! Error types for Lex lookups
//!
//! Service failures are flattened into a few categories, classified by how
//! callers typically need to handle them:
//!
//! - [`FindError::NotFound`] / [`FindError::EmptyResult`] - the resource does not exist
//! - [`FindError::Authentication`] - fix credentials and retry
//! - [`FindError::RateLimited`] - back off and retry
//! - [`FindError::Network`] - check connectivity, retry
//! - [`FindError::ServiceUnavailable`] - service is down, wait and retry
//! - [`FindError::Configuration`] - fix the request or client configuration
//! - [`FindError::Service`] - any other error reported by the service

use thiserror::Error;

use crate::types::ResourceKind;

/// Error code the Lex model-building service uses for missing resources
pub const NOT_FOUND_EXCEPTION: &str = "NotFoundException";

#[derive(Debug, Error)]
pub enum FindError {
    /// The requested resource version does not exist
    #[error("{kind} {name} (version {version}) not found: {message}")]
    NotFound {
        kind: ResourceKind,
        name: String,
        version: String,
        message: String,
    },

    /// The service answered without a payload
    #[error("empty result for {kind} {name} (version {version})")]
    EmptyResult {
        kind: ResourceKind,
        name: String,
        version: String,
    },

    /// Authentication or authorization failed
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Request was throttled or a service limit was hit
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Connection, DNS or timeout failure
    #[error("network error: {0}")]
    Network(String),

    /// Internal failure on the service side
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Invalid request or client configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Service error not covered by the categories above
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    #[error("{0}")]
    Other(String),
}

impl FindError {
    /// Returns true if the resource does not exist or came back empty
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::EmptyResult { .. })
    }

    /// Returns true if the service reported the given error code
    pub fn has_code(&self, expected: &str) -> bool {
        matches!(self, Self::Service { code, .. } if code == expected)
    }

    /// Returns true if this error is potentially retryable
    ///
    /// Throttling, network issues and service-side failures are transient;
    /// everything else needs a change from the caller first.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited(_) | Self::Network(_) | Self::ServiceUnavailable(_)
        )
    }
}

/// Result type for Lex lookups
pub type Result<T> = std::result::Result<T, FindError>;
