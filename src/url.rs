//! Request URL construction for the geocoding provider.

use crate::config::GeocodingConfig;
use crate::domain::Address;

/// Builds the fully-encoded query URL for a one-line address lookup.
///
/// The parameter order and the literal `benchmark`/`format` key names are
/// part of the provider contract and must not be reordered. Only the address
/// value itself is percent-encoded; the configured parameter names and
/// static values are assumed URL-safe.
#[derive(Debug, Clone, Copy)]
pub struct RequestUrlBuilder<'a> {
    config: &'a GeocodingConfig,
}

impl<'a> RequestUrlBuilder<'a> {
    /// Create a builder for the given endpoint configuration.
    pub fn new(config: &'a GeocodingConfig) -> Self {
        Self { config }
    }

    /// Build the lookup URL for one address.
    ///
    /// Deterministic: the same (config, address) pair always yields the
    /// same string.
    pub fn build(&self, address: &Address) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!(
            "{}/onelineaddress?{}={}&benchmark={}&format={}",
            base,
            self.config.address_param,
            address.url_encoded_full_address(),
            self.config.benchmark,
            self.config.format
        )
    }
}
