//! Async wrapper around the synchronous geocoding pipeline.
//!
//! The core pipeline blocks on network I/O for the duration of the HTTP
//! call. Callers on an async runtime use this wrapper, which runs each
//! conversion on `tokio::task::spawn_blocking` so the runtime's worker
//! threads are never blocked.

use crate::domain::{Address, Coordinate};
use crate::error::{GeocodeError, GeocodeResult};
use crate::geocoder::Geocoder;
use async_trait::async_trait;
use std::sync::Arc;

/// Async version of the address-to-coordinate conversion.
#[async_trait]
pub trait AsyncGeocoder: Send + Sync {
    /// Convert one address into a coordinate without blocking the runtime.
    async fn convert(&self, address: Address) -> GeocodeResult<Coordinate>;
}

/// [`AsyncGeocoder`] implementation delegating to a synchronous [`Geocoder`]
/// on the blocking thread pool.
#[derive(Clone)]
pub struct AsyncGeocoderImpl {
    geocoder: Arc<Geocoder>,
}

impl AsyncGeocoderImpl {
    /// Wrap a synchronous geocoder.
    pub fn new(geocoder: Geocoder) -> Self {
        Self {
            geocoder: Arc::new(geocoder),
        }
    }
}

#[async_trait]
impl AsyncGeocoder for AsyncGeocoderImpl {
    async fn convert(&self, address: Address) -> GeocodeResult<Coordinate> {
        let geocoder = self.geocoder.clone();

        tokio::task::spawn_blocking(move || geocoder.convert(&address))
            .await
            .map_err(|e| GeocodeError::HttpError(format!("Task join error: {}", e)))?
    }
}
