//! Bootcamp record types.
//!
//! A bootcamp moves through three shapes:
//! - [`BootcampInput`]: the loosely typed payload submitted by clients;
//! - [`BootcampFields`]: the attributes that passed schema validation;
//! - [`Bootcamp`]: the stored record, carrying its derived slug and location.
//!
//! The stored record has no free-text address. The address only lives on the
//! input and on the pending record handled by the pre-persist pipeline.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Error;

mod career;
mod validation;

pub use career::{Career, ParseCareerError};
pub use validation::{
    ValidatedBootcamp, ValidationMode, DESCRIPTION_MAX, NAME_MAX, PHONE_MAX, RATING_MAX,
    RATING_MIN,
};

/// Photo stored when none is supplied.
pub const DEFAULT_PHOTO: &str = "no-photo.jpg";

/// Stable bootcamp identifier assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BootcampId(Uuid);

impl BootcampId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a client-supplied identifier.
    ///
    /// # Errors
    /// Returns [`Error::InvalidIdentifier`] when `raw` is not a UUID.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        raw.parse()
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for BootcampId {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| Error::invalid_identifier(raw))
    }
}

impl fmt::Display for BootcampId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// GeoJSON geometry kind; only points are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    #[default]
    Point,
}

/// Structured location derived from a geocoded address.
///
/// ## Invariants
/// - `coordinates` is `[longitude, latitude]`, GeoJSON order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    pub coordinates: [f64; 2],
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
}

impl Location {
    /// Longitude component of the point.
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    /// Latitude component of the point.
    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Client payload for creating or updating a bootcamp.
///
/// Every field is optional at this layer; required-ness is a schema rule
/// enforced by validation so that all violations are reported together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootcampInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub careers: Option<Vec<String>>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub photo: Option<String>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
    pub accept_gi: Option<bool>,
}

impl BootcampInput {
    /// Overlay this patch onto the stored attributes of `existing`.
    ///
    /// Fields absent from the patch keep their stored values. The address is
    /// taken from the patch only, since stored records never carry one.
    pub fn merged_onto(self, existing: &BootcampFields) -> Self {
        let current = existing.clone();
        Self {
            name: self.name.or(Some(current.name)),
            description: self.description.or(Some(current.description)),
            website: self.website.or(current.website),
            phone: self.phone.or(current.phone),
            email: self.email.or(current.email),
            address: self.address,
            careers: self.careers.or_else(|| {
                Some(
                    current
                        .careers
                        .iter()
                        .map(|career| career.as_str().to_owned())
                        .collect(),
                )
            }),
            average_rating: self.average_rating.or(current.average_rating),
            average_cost: self.average_cost.or(current.average_cost),
            photo: self.photo.or(Some(current.photo)),
            housing: self.housing.or(Some(current.housing)),
            job_assistance: self.job_assistance.or(Some(current.job_assistance)),
            job_guarantee: self.job_guarantee.or(Some(current.job_guarantee)),
            accept_gi: self.accept_gi.or(Some(current.accept_gi)),
        }
    }
}

/// Bootcamp attributes that satisfied every schema rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootcampFields {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub careers: Vec<Career>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_cost: Option<f64>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
}

/// A bootcamp as durably stored.
///
/// ## Invariants
/// - `slug` is `slugify(fields.name)`.
/// - `location` is always resolved; there is no address field.
/// - `created_at` never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bootcamp {
    pub id: BootcampId,
    pub slug: String,
    #[serde(flatten)]
    pub fields: BootcampFields,
    pub location: Location,
    pub created_at: DateTime<Utc>,
}

impl Bootcamp {
    /// Name of the bootcamp.
    pub fn name(&self) -> &str {
        self.fields.name.as_str()
    }
}
