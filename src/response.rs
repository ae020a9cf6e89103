//! Mapping of the provider's JSON payload into a [`Coordinate`].
//!
//! The Census Bureau response nests the values of interest under
//! `result.addressMatches[0].coordinates`. Everything else in the payload
//! (input echo, tiger line data, address components) is tolerated and
//! ignored.

use crate::domain::Coordinate;
use crate::error::{GeocodeError, GeocodeResult};
use serde::Deserialize;

/// Top-level provider response.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    /// The result body; absent when the payload is not a geocoding result
    #[serde(default)]
    pub result: Option<ResultBody>,
}

/// Body of a geocoding result.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultBody {
    /// Candidate matches for the queried address, best match first
    #[serde(default)]
    pub address_matches: Vec<AddressMatch>,
}

/// A single candidate match.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressMatch {
    /// Match coordinates; absent on some partial matches
    #[serde(default)]
    pub coordinates: Option<RawCoordinates>,

    /// The normalized address the provider matched against
    #[serde(default)]
    pub matched_address: Option<String>,
}

/// Raw coordinate pair as carried by the payload.
#[derive(Debug, Deserialize)]
pub struct RawCoordinates {
    pub x: f64,
    pub y: f64,
}

/// Extract a [`Coordinate`] from raw provider JSON.
///
/// Only the first element of `addressMatches` is consulted; additional
/// matches carry no disambiguation logic here. The payload's `x` is mapped
/// to latitude and `y` to longitude, reproducing the upstream contract
/// as observed.
///
/// # Errors
///
/// Returns `GeocodeError::MalformedResponse` when the text is not valid
/// JSON, the `result` object is missing, `addressMatches` is empty, or the
/// first match carries no coordinates.
pub fn map_coordinates(body: &str) -> GeocodeResult<Coordinate> {
    let response: GeocodeResponse = serde_json::from_str(body)
        .map_err(|e| GeocodeError::MalformedResponse(e.to_string()))?;

    let result = response
        .result
        .ok_or_else(|| GeocodeError::MalformedResponse("missing result object".to_string()))?;

    let first_match = result
        .address_matches
        .first()
        .ok_or_else(|| GeocodeError::MalformedResponse("no address matches".to_string()))?;

    let coordinates = first_match.coordinates.as_ref().ok_or_else(|| {
        GeocodeError::MalformedResponse("match is missing coordinates".to_string())
    })?;

    Ok(Coordinate::from_xy(coordinates.x, coordinates.y))
}
