//! Locator data model: coordinates, normalized places, and the provider's
//! wire format they are mapped from.

mod coordinate;
mod place;
pub mod provider;

pub use coordinate::{Coordinate, CoordinateError};
pub use place::{Place, ADDRESS_UNAVAILABLE, UNKNOWN_NAME};
