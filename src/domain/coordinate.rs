//! Coordinate value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable latitude/longitude pair.
///
/// Both components are held as decimal strings rather than floats so the
/// values survive serialization and comparison without float-formatting
/// drift. Instances are produced by the response mapper or built directly
/// from known values (e.g. in tests).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: String,
    longitude: String,
}

impl Coordinate {
    /// Create a coordinate from already-rendered decimal strings.
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Create a coordinate from raw payload numbers.
    ///
    /// The provider payload carries `x`/`y` as JSON numbers; they are
    /// rendered here to 14 significant digits with trailing zeros trimmed,
    /// matching the precision the upstream contract was observed with.
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self {
            latitude: format_decimal(x),
            longitude: format_decimal(y),
        }
    }

    /// Get the latitude as a decimal string.
    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    /// Get the longitude as a decimal string.
    pub fn longitude(&self) -> &str {
        &self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Render a float to 14 significant digits, trimming trailing zeros.
fn format_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    let decimals = if magnitude >= 1.0 {
        let integer_digits = magnitude.log10().floor() as usize + 1;
        14usize.saturating_sub(integer_digits)
    } else {
        // Zeros between the decimal point and the first nonzero digit are
        // not significant and must not eat into the 14 digits.
        let leading_zeros = (-magnitude.log10()).ceil() as usize - 1;
        13 + leading_zeros
    };
    let rendered = format!("{:.*}", decimals, value);

    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        rendered
    }
}
