//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod bootcamp_repository;
mod geocoder;

#[cfg(test)]
pub use bootcamp_repository::MockBootcampRepository;
pub use bootcamp_repository::BootcampRepository;
#[cfg(test)]
pub use geocoder::MockGeocoder;
pub use geocoder::{FixtureGeocoder, GeocodeCandidate, Geocoder, GeocoderError};
