//! Error types for the census geocoder.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while converting an address into coordinates.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// An address field failed its format rule
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] ValidationError),

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Provider returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Provider response was not valid JSON or is missing required fields
    #[error("malformed geocoding response: {0}")]
    MalformedResponse(String),
}

impl GeocodeError {
    /// True for transport-level failures (connection, timeout, bad status).
    ///
    /// The pipeline does not distinguish status codes beyond success and
    /// failure, but callers deciding whether a retry could help can.
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::Timeout | Self::ApiError { .. }
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with GeocodeError
pub type GeocodeResult<T> = Result<T, GeocodeError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
