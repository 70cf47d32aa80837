//! Error classification for the arena core
//!
//! Remote failures are split into transport problems, non-success replies
//! and missing items so callers can decide on retries and user messaging.

use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure talking to a remote endpoint
    #[error("Network failure calling {endpoint}")]
    Network {
        /// Endpoint that was being called (e.g. `search`, `videos`)
        endpoint: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Remote endpoint answered with a non-success status
    #[error("Remote error from {endpoint} (HTTP {status}): {message}")]
    Remote {
        /// Endpoint that returned the error
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Message reported by the remote, or the status reason
        message: String,
    },

    /// An expected single item was absent
    #[error("{resource} '{id}' not found")]
    NotFound {
        /// Kind of resource that was looked up
        resource: String,
        /// Identifier that was looked up
        id: String,
    },

    /// Success response whose body did not have the expected shape
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode {
        /// Endpoint whose response could not be decoded
        endpoint: String,
        /// Decoder message
        message: String,
    },

    /// Validation errors
    #[error("Validation failed for {field}: {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Error message describing the validation failure
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a network error for a failed call to `endpoint`
    pub fn network(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create a remote error from a non-success status
    pub fn remote(endpoint: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            endpoint: endpoint.into(),
            status,
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create a decode error
    pub fn decode(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether a caller could reasonably retry the failed operation.
    ///
    /// Advisory only: nothing in this crate retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network { .. } => true,
            Error::Remote { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Network { .. } => "network",
            Error::Remote { .. } => "remote",
            Error::NotFound { .. } => "not_found",
            Error::Decode { .. } => "decode",
            Error::Validation { .. } => "validation",
            Error::Config { .. } => "config",
            Error::Json(..) => "json",
            Error::Toml(..) => "toml",
            Error::Url(..) => "url",
            Error::Io(..) => "io",
        }
    }
}
