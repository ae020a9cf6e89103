//! Address-to-coordinate conversion pipeline.

use crate::client::HttpFetch;
use crate::config::GeocodingConfig;
use crate::domain::{Address, Coordinate};
use crate::error::GeocodeResult;
use crate::response::map_coordinates;
use crate::url::RequestUrlBuilder;
use std::sync::Arc;

/// Converts a validated [`Address`] into a [`Coordinate`].
///
/// The conversion is a single synchronous sequence: build the query URL,
/// GET it through the injected [`HttpFetch`] capability, and map the JSON
/// payload. There is no retry and no state between calls; failures from the
/// transport or the mapper propagate unchanged. Instances are cheap to
/// clone and safe to share across threads.
#[derive(Clone)]
pub struct Geocoder {
    config: GeocodingConfig,
    fetcher: Arc<dyn HttpFetch>,
}

impl Geocoder {
    /// Create a geocoder for the given endpoint, with an injected transport.
    pub fn new(config: GeocodingConfig, fetcher: Arc<dyn HttpFetch>) -> Self {
        Self { config, fetcher }
    }

    /// The endpoint configuration this geocoder queries.
    pub fn config(&self) -> &GeocodingConfig {
        &self.config
    }

    /// Convert one address into a coordinate.
    ///
    /// # Errors
    ///
    /// Propagates transport errors from the fetcher and
    /// `MalformedResponse` from the payload mapper.
    pub fn convert(&self, address: &Address) -> GeocodeResult<Coordinate> {
        let url = RequestUrlBuilder::new(&self.config).build(address);
        tracing::debug!(%address, "geocoding");

        let body = self.fetcher.fetch(&url)?;
        let coordinate = map_coordinates(&body)?;

        tracing::debug!(%coordinate, "geocoded");
        Ok(coordinate)
    }
}
