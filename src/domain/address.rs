//! Address value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// Field format rules. Country, city, and state only need some alphabetic
// content; street needs a house number followed by a name; zip is a 5-digit
// code with an optional +4 extension.
static ALPHA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z ]").expect("Failed to compile alpha regex"));
static STREET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+[A-Za-z ]+").expect("Failed to compile street regex"));
static ZIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("Failed to compile zip regex"));

/// A validated US postal address.
///
/// An `Address` can only exist in validated form: construction checks every
/// field against its format rule and fails on the first violation, so any
/// instance you hold is known to be well-formed. The value is immutable;
/// [`Address::with_city`] returns a new instance instead of mutating.
///
/// # Example
///
/// ```
/// use census_geocoder::domain::Address;
///
/// let address = Address::new("USA", "100 Joe Nuxhall Way", "Cincinnati", "OH", "45202").unwrap();
/// assert_eq!(address.full_address(), "100 Joe Nuxhall Way, Cincinnati, OH 45202");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    country: String,
    street: String,
    city: String,
    state: String,
    zip: String,
}

impl Address {
    /// Create a new `Address`, validating every field.
    ///
    /// # Validation Rules
    ///
    /// - `country`, `city`, `state`: must contain at least one letter or space
    /// - `street`: must contain a digit sequence followed by letters/spaces
    ///   (the "number + name" shape, e.g. "100 Joe Nuxhall Way")
    /// - `zip`: must be 5 digits, optionally followed by a hyphen and 4 more
    ///
    /// Fields are checked in order country, street, city, state, zip; the
    /// first failure is returned and the rest are not inspected.
    ///
    /// # Errors
    ///
    /// Returns the matching `ValidationError` variant carrying the rejected
    /// value.
    pub fn new(
        country: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let country = country.into();
        let street = street.into();
        let city = city.into();
        let state = state.into();
        let zip = zip.into();

        if !ALPHA_RE.is_match(&country) {
            return Err(ValidationError::InvalidCountry(country));
        }
        if !STREET_RE.is_match(&street) {
            return Err(ValidationError::InvalidStreet(street));
        }
        if !ALPHA_RE.is_match(&city) {
            return Err(ValidationError::InvalidCity(city));
        }
        if !ALPHA_RE.is_match(&state) {
            return Err(ValidationError::InvalidState(state));
        }
        if !ZIP_RE.is_match(&zip) {
            return Err(ValidationError::InvalidZip(zip));
        }

        Ok(Self {
            country,
            street,
            city,
            state,
            zip,
        })
    }

    /// Get the country field.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Get the street field.
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Get the city field.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Get the state field.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Get the zip field.
    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// The single-line form the geocoding provider expects:
    /// `"{street}, {city}, {state} {zip}"`.
    ///
    /// Country is validated at construction but intentionally not part of
    /// the line; the provider is US-only.
    pub fn full_address(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }

    /// Percent-encoded form of [`Address::full_address`] suitable for use as
    /// a URL query value (space becomes `%20`, comma becomes `%2C`).
    pub fn url_encoded_full_address(&self) -> String {
        urlencoding::encode(&self.full_address()).into_owned()
    }

    /// Return a new `Address` with `city` replaced and every other field
    /// unchanged. The full rule set is re-run on the new instance.
    pub fn with_city(&self, city: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(
            self.country.clone(),
            self.street.clone(),
            city,
            self.state.clone(),
            self.zip.clone(),
        )
    }
}

// Serde support - deserialize with validation so no unvalidated Address can
// enter through a serialization boundary.
impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawAddress {
            country: String,
            street: String,
            city: String,
            state: String,
            zip: String,
        }

        let raw = RawAddress::deserialize(deserializer)?;
        Address::new(raw.country, raw.street, raw.city, raw.state, raw.zip)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_address())
    }
}
