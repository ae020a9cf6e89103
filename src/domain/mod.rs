//! Domain value objects and types.
//!
//! This module contains type-safe representations of the geocoding domain:
//! validated postal addresses and latitude/longitude pairs. These value
//! objects validate at construction time and prevent invalid data from
//! being represented in the system.

pub mod address;
pub mod coordinate;
pub mod errors;

pub use address::Address;
pub use coordinate::Coordinate;
pub use errors::ValidationError;
