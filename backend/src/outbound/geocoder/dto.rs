//! DTOs for decoding MapQuest geocoding responses.
//!
//! The adapter decodes into these transport DTOs first, then maps the
//! locations of the first result into domain [`GeocodeCandidate`]s. The best
//! match must decode; malformed runner-up locations are dropped.

use serde::Deserialize;
use tracing::debug;

use crate::domain::ports::GeocodeCandidate;

/// MapQuest reports success with status code zero.
pub(super) const MAPQUEST_OK: i64 = 0;

#[derive(Debug, Deserialize)]
pub(super) struct MapQuestResponseDto {
    pub(super) info: MapQuestInfoDto,
    #[serde(default)]
    pub(super) results: Vec<MapQuestResultDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MapQuestInfoDto {
    pub(super) statuscode: i64,
    #[serde(default)]
    pub(super) messages: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MapQuestResultDto {
    #[serde(default)]
    pub(super) locations: Vec<MapQuestLocationDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MapQuestLocationDto {
    pub(super) lat_lng: Option<MapQuestLatLngDto>,
    #[serde(default)]
    pub(super) street: String,
    /// City.
    #[serde(default)]
    pub(super) admin_area5: String,
    /// State or region code.
    #[serde(default)]
    pub(super) admin_area3: String,
    /// Country code.
    #[serde(default)]
    pub(super) admin_area1: String,
    #[serde(default)]
    pub(super) postal_code: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct MapQuestLatLngDto {
    pub(super) lat: f64,
    pub(super) lng: f64,
}

impl MapQuestResponseDto {
    pub(super) fn into_candidates(self) -> Result<Vec<GeocodeCandidate>, String> {
        let Some(first) = self.results.into_iter().next() else {
            return Ok(Vec::new());
        };
        let mut locations = first.locations.into_iter();
        let Some(best) = locations.next() else {
            return Ok(Vec::new());
        };
        let mut candidates = vec![best.into_candidate()?];
        candidates.extend(locations.filter_map(|location| {
            location
                .into_candidate()
                .inspect_err(|reason| debug!(%reason, "skipping malformed runner-up location"))
                .ok()
        }));
        Ok(candidates)
    }
}

impl MapQuestLocationDto {
    fn into_candidate(self) -> Result<GeocodeCandidate, String> {
        let lat_lng = self
            .lat_lng
            .ok_or_else(|| "location is missing latLng".to_owned())?;
        if !lat_lng.lat.is_finite() || !lat_lng.lng.is_finite() {
            return Err("location includes non-finite coordinates".to_owned());
        }
        let formatted_address = formatted_address(
            &self.street,
            &self.admin_area5,
            &self.admin_area3,
            &self.postal_code,
            &self.admin_area1,
        );
        Ok(GeocodeCandidate {
            latitude: lat_lng.lat,
            longitude: lat_lng.lng,
            country_code: non_blank(self.admin_area1),
            city: non_blank(self.admin_area5),
            zipcode: non_blank(self.postal_code),
            street_name: non_blank(self.street),
            state_code: non_blank(self.admin_area3),
            formatted_address,
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// `street, city, state zip, country`, dropping blank parts.
fn formatted_address(
    street: &str,
    city: &str,
    state: &str,
    zipcode: &str,
    country: &str,
) -> Option<String> {
    let region = [state.trim(), zipcode.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let parts: Vec<&str> = [street.trim(), city.trim(), region.as_str(), country.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}
