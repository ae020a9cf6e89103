//! HTTP transport for the geocoding provider.
//!
//! The pipeline only needs one capability from the network: GET a URL and
//! hand back the raw response body. That capability is expressed as the
//! [`HttpFetch`] trait so tests can inject canned payloads; [`CensusClient`]
//! is the `ureq`-based implementation used in production.

mod async_wrapper;
pub use async_wrapper::{AsyncGeocoder, AsyncGeocoderImpl};

use crate::config::GeocodingConfig;
use crate::error::{GeocodeError, GeocodeResult};
use std::sync::Arc;
use std::time::Duration;

/// The GET capability the geocoding pipeline depends on.
///
/// Implementations perform a single HTTP GET and return the response body
/// as text. All failure modes are transport-level: connection failure,
/// timeout, or a non-2xx status.
pub trait HttpFetch: Send + Sync {
    /// Fetch the given URL and return the raw response body.
    fn fetch(&self, url: &str) -> GeocodeResult<String>;
}

/// Synchronous HTTP client for the Census Bureau geocoding API.
///
/// Wraps a shared `ureq::Agent` with a configured timeout. Cloning is cheap;
/// clones share the same agent and connection pool.
#[derive(Clone)]
pub struct CensusClient {
    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl CensusClient {
    /// Create a new client with the timeout from configuration.
    pub fn new(config: &GeocodingConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            agent: Arc::new(agent),
        }
    }

    /// Create a client with a 10 second timeout (useful for testing).
    #[doc(hidden)]
    pub fn with_default_timeout() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            agent: Arc::new(agent),
        }
    }

    /// Map a ureq error to a GeocodeError.
    fn map_error(&self, error: ureq::Error) -> GeocodeError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                GeocodeError::ApiError {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    GeocodeError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    GeocodeError::Timeout
                } else {
                    GeocodeError::HttpError(transport.to_string())
                }
            }
        }
    }
}

impl HttpFetch for CensusClient {
    fn fetch(&self, url: &str) -> GeocodeResult<String> {
        tracing::debug!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| self.map_error(e))?;

        response
            .into_string()
            .map_err(|e| GeocodeError::HttpError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_configured_timeout() {
        let config = GeocodingConfig {
            request_timeout: 3,
            ..GeocodingConfig::census_bureau()
        };
        let client = CensusClient::new(&config);
        // Clones share the agent.
        let _cloned = client.clone();
    }

    #[test]
    fn test_fetch_connection_failure() {
        // Nothing listens on this port.
        let client = CensusClient::with_default_timeout();
        let result = client.fetch("http://127.0.0.1:1/onelineaddress");
        assert!(matches!(
            result,
            Err(GeocodeError::HttpError(_)) | Err(GeocodeError::Timeout)
        ));
    }
}
