//! Domain validation errors.

use std::fmt;

/// Errors that can occur during address field validation.
///
/// Each variant carries the rejected value so callers can see exactly which
/// input was refused. Validation stops at the first failing field, so a
/// single error is always reported even if several fields are bad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided country is invalid.
    InvalidCountry(String),

    /// The provided street is invalid.
    InvalidStreet(String),

    /// The provided city is invalid.
    InvalidCity(String),

    /// The provided state is invalid.
    InvalidState(String),

    /// The provided zip code is invalid.
    InvalidZip(String),
}

impl ValidationError {
    /// Name of the address field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidCountry(_) => "country",
            Self::InvalidStreet(_) => "street",
            Self::InvalidCity(_) => "city",
            Self::InvalidState(_) => "state",
            Self::InvalidZip(_) => "zip",
        }
    }

    /// The rejected input value.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidCountry(v)
            | Self::InvalidStreet(v)
            | Self::InvalidCity(v)
            | Self::InvalidState(v)
            | Self::InvalidZip(v) => v,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid {}", self.value(), self.field())
    }
}

impl std::error::Error for ValidationError {}
