//! Driven port for resolving free-text addresses into coordinates.
//!
//! Adapters own the transport (HTTP provider, fixture, cache). The domain only
//! sees an ordered list of candidates and takes the first.

use async_trait::async_trait;

use super::define_port_error;

/// One candidate match returned by a geocoding provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeocodeCandidate {
    /// Latitude in WGS84.
    pub latitude: f64,
    /// Longitude in WGS84.
    pub longitude: f64,
    /// ISO country code, e.g. `US`.
    pub country_code: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub street_name: Option<String>,
    /// Region code, e.g. `MA`.
    pub state_code: Option<String>,
    pub formatted_address: Option<String>,
}

define_port_error! {
    /// Errors raised while talking to a geocoding provider.
    pub enum GeocoderError {
        /// The provider could not be reached.
        Transport { message: String } =>
            "geocoder transport failed: {message}",
        /// The provider did not answer within the configured timeout.
        Timeout { message: String } =>
            "geocoder timed out: {message}",
        /// The provider refused the request (bad key, quota, malformed query).
        Rejected { message: String } =>
            "geocoder rejected the request: {message}",
        /// The provider answered with a payload we could not decode.
        Decode { message: String } =>
            "geocoder response could not be decoded: {message}",
    }
}

/// Port for resolving an address into candidate locations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve `address` into zero or more candidates, best match first.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use devcamper::domain::ports::{FixtureGeocoder, Geocoder};
    ///
    /// let candidates = FixtureGeocoder.geocode("233 Bay State Rd Boston MA").await?;
    /// assert_eq!(candidates.len(), 1);
    /// # Ok::<(), devcamper::domain::ports::GeocoderError>(())
    /// ```
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>, GeocoderError>;
}

/// Fixture geocoder placing every address at Boston's Beacon Hill.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGeocoder;

#[async_trait]
impl Geocoder for FixtureGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>, GeocoderError> {
        if address.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![GeocodeCandidate {
            latitude: 42.358_894,
            longitude: -71.063_611,
            country_code: Some("US".to_owned()),
            city: Some("Boston".to_owned()),
            zipcode: Some("02108".to_owned()),
            street_name: Some("24 Beacon St".to_owned()),
            state_code: Some("MA".to_owned()),
            formatted_address: Some("24 Beacon St, Boston, MA 02108, US".to_owned()),
        }])
    }
}
