//! census-geocoder - A Rust client for the US Census Bureau geocoding API.
//!
//! This library converts a structured, validated postal address into a
//! latitude/longitude pair by encoding it into a one-line-address query,
//! issuing an HTTP GET against the provider, and mapping the nested JSON
//! response into a coordinate value object.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (addresses, coordinates)
//! - **error**: custom error types for precise error handling
//! - **config**: provider endpoint description, loadable from environment
//! - **url**: deterministic query URL construction
//! - **client**: the injected HTTP GET capability and its ureq implementation
//! - **response**: tolerant mapping of the provider's JSON payload
//! - **geocoder**: the conversion pipeline tying the pieces together
//!
//! # Example
//!
//! ```no_run
//! use census_geocoder::{Address, CensusClient, Geocoder, GeocodingConfig};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeocodingConfig::census_bureau();
//! let client = Arc::new(CensusClient::new(&config));
//! let geocoder = Geocoder::new(config, client);
//!
//! let address = Address::new("USA", "100 Joe Nuxhall Way", "Cincinnati", "OH", "45202")?;
//! let coordinate = geocoder.convert(&address)?;
//! println!("{}", coordinate);
//! # Ok(())
//! # }
//! ```

// Re-export commonly used types
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod geocoder;
pub mod response;
pub mod url;

pub use client::{AsyncGeocoder, AsyncGeocoderImpl, CensusClient, HttpFetch};
pub use config::GeocodingConfig;
pub use domain::{Address, Coordinate, ValidationError};
pub use error::{ConfigError, ConfigResult, GeocodeError, GeocodeResult};
pub use geocoder::Geocoder;
pub use url::RequestUrlBuilder;
