//! Configuration for the census geocoder.
//!
//! The provider endpoint is described by an immutable [`GeocodingConfig`]
//! passed explicitly into every component that needs it; there is no
//! process-wide singleton. The struct can be built from the known Census
//! Bureau defaults or loaded from environment variables.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Description of the geocoding provider endpoint.
///
/// All fields are set once at construction and never mutated. The query
/// parameter names `benchmark` and `format` are fixed by the provider
/// contract; only their values are configurable here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodingConfig {
    /// Provider base URL, e.g. `https://geocoding.geo.census.gov/geocoder/locations`
    pub base_url: String,

    /// Name of the query parameter carrying the one-line address
    pub address_param: String,

    /// Value for the provider's `benchmark` parameter (dataset version)
    pub benchmark: String,

    /// Value for the provider's `format` parameter (response encoding)
    pub format: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level for the binary (default: "error")
    pub log_level: String,
}

impl GeocodingConfig {
    /// The known US Census Bureau geocoding endpoint.
    pub fn census_bureau() -> Self {
        Self {
            base_url: "https://geocoding.geo.census.gov/geocoder/locations".to_string(),
            address_param: "address".to_string(),
            benchmark: "4".to_string(),
            format: "json".to_string(),
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; unset variables fall back to the Census
    /// Bureau defaults:
    /// - `GEOCODER_BASE_URL`: provider base URL
    /// - `GEOCODER_ADDRESS_PARAM`: address query parameter name
    /// - `GEOCODER_BENCHMARK`: benchmark parameter value
    /// - `GEOCODER_FORMAT`: format parameter value
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds
    /// - `LOG_LEVEL`: logging level
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; ignore a missing file.
        let _ = dotenvy::dotenv();

        let defaults = Self::census_bureau();

        let base_url = env::var("GEOCODER_BASE_URL").unwrap_or(defaults.base_url);
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "GEOCODER_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let address_param = env::var("GEOCODER_ADDRESS_PARAM").unwrap_or(defaults.address_param);
        if address_param.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "GEOCODER_ADDRESS_PARAM".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let benchmark = env::var("GEOCODER_BENCHMARK").unwrap_or(defaults.benchmark);
        let format = env::var("GEOCODER_FORMAT").unwrap_or(defaults.format);
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Self {
            base_url,
            address_param,
            benchmark,
            format,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self::census_bureau()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_census_bureau_defaults() {
        let config = GeocodingConfig::census_bureau();
        assert_eq!(
            config.base_url,
            "https://geocoding.geo.census.gov/geocoder/locations"
        );
        assert_eq!(config.address_param, "address");
        assert_eq!(config.benchmark, "4");
        assert_eq!(config.format, "json");
        assert_eq!(config.request_timeout, 10);
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_to_defaults() {
        for var in [
            "GEOCODER_BASE_URL",
            "GEOCODER_ADDRESS_PARAM",
            "GEOCODER_BENCHMARK",
            "GEOCODER_FORMAT",
            "REQUEST_TIMEOUT",
        ] {
            env::remove_var(var);
        }

        let config = GeocodingConfig::from_env().unwrap();
        assert_eq!(config, GeocodingConfig::census_bureau());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("GEOCODER_BASE_URL", "https://geocoder.test/locations");
        guard.set("GEOCODER_BENCHMARK", "Public_AR_Current");
        guard.set("REQUEST_TIMEOUT", "30");

        let config = GeocodingConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://geocoder.test/locations");
        assert_eq!(config.benchmark, "Public_AR_Current");
        assert_eq!(config.request_timeout, 30);
        // Untouched vars keep their defaults.
        assert_eq!(config.address_param, "address");
        assert_eq!(config.format, "json");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("GEOCODER_BASE_URL", "not-a-url");

        let result = GeocodingConfig::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "GEOCODER_BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_empty_address_param() {
        let mut guard = EnvGuard::new();
        guard.set("GEOCODER_ADDRESS_PARAM", "   ");

        let result = GeocodingConfig::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "GEOCODER_ADDRESS_PARAM");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        let mut guard = EnvGuard::new();
        guard.set("REQUEST_TIMEOUT", "not-a-number");

        let result = GeocodingConfig::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "REQUEST_TIMEOUT");
        }
    }
}
