//! Pre-persist pipeline for bootcamp records.
//!
//! Before any write, a pending record passes through an ordered list of named
//! stages. Each stage consumes the record and returns a new value; the first
//! failure aborts the whole write. The standard pipeline is:
//!
//! 1. [`SlugStage`]: derive the slug from the name (pure; fails only when the
//!    name has nothing to slug);
//! 2. [`GeocodeStage`]: resolve the free-text address into a [`Location`] and
//!    drop the address (suspends on the geocoder).
//!
//! [`PrePersistPipeline::run`] only yields a [`ResolvedBootcamp`] once the
//! record has a slug, a location, and no address left.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::ports::{GeocodeCandidate, Geocoder, GeocoderError};
use super::{
    BootcampFields, Error, FieldViolation, GeometryKind, Location, ValidatedBootcamp,
    is_valid_slug, slugify,
};

const UNSLUGGABLE_NAME: &str = "Name must contain at least one letter or digit";

/// A record on its way to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingBootcamp {
    pub fields: BootcampFields,
    pub slug: Option<String>,
    pub address: Option<String>,
    pub location: Option<Location>,
}

impl PendingBootcamp {
    /// Start a pending record for a brand-new bootcamp.
    pub fn new(validated: ValidatedBootcamp) -> Self {
        Self {
            fields: validated.fields,
            slug: None,
            address: validated.address,
            location: None,
        }
    }

    /// Start a pending record for an update, carrying the stored location.
    pub fn for_update(validated: ValidatedBootcamp, stored_location: Location) -> Self {
        Self {
            fields: validated.fields,
            slug: None,
            address: validated.address,
            location: Some(stored_location),
        }
    }

    /// Position of this record in the persist state machine.
    pub fn state(&self) -> PersistState {
        match (&self.slug, &self.location, &self.address) {
            (None, _, _) => PersistState::Pending,
            (Some(_), Some(_), None) => PersistState::LocationResolved,
            (Some(_), _, _) => PersistState::SlugSet,
        }
    }
}

/// States a single persist attempt moves through.
///
/// `Pending → SlugSet → LocationResolved → Stored`, or
/// `Pending → SlugSet → Failed` when geocoding fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistState {
    Pending,
    SlugSet,
    LocationResolved,
    Stored,
    Failed,
}

impl fmt::Display for PersistState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::SlugSet => "slug_set",
            Self::LocationResolved => "location_resolved",
            Self::Stored => "stored",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// A record that cleared every stage and may be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBootcamp {
    pub fields: BootcampFields,
    pub slug: String,
    pub location: Location,
}

impl TryFrom<PendingBootcamp> for ResolvedBootcamp {
    type Error = Error;

    fn try_from(pending: PendingBootcamp) -> Result<Self, Self::Error> {
        let PendingBootcamp {
            fields,
            slug,
            address,
            location,
        } = pending;
        if let Some(address) = address {
            return Err(Error::geocode_unresolved(address));
        }
        let slug = slug
            .filter(|slug| is_valid_slug(slug))
            .ok_or_else(|| Error::internal("record reached storage without a valid slug"))?;
        let location =
            location.ok_or_else(|| Error::internal("record reached storage without a location"))?;
        Ok(Self {
            fields,
            slug,
            location,
        })
    }
}

/// One named transformation applied before a write.
#[async_trait]
pub trait PrePersistStage: Send + Sync {
    /// Stable stage name used in logs.
    fn name(&self) -> &'static str;

    /// Transform the record, or fail the write.
    async fn apply(&self, record: PendingBootcamp) -> Result<PendingBootcamp, Error>;
}

/// Stage 1: derive the slug from the current name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlugStage;

#[async_trait]
impl PrePersistStage for SlugStage {
    fn name(&self) -> &'static str {
        "slug"
    }

    async fn apply(&self, record: PendingBootcamp) -> Result<PendingBootcamp, Error> {
        let slug = slugify(&record.fields.name);
        if !is_valid_slug(&slug) {
            return Err(Error::field_validation(vec![FieldViolation::new(
                "name",
                UNSLUGGABLE_NAME,
            )]));
        }
        Ok(PendingBootcamp {
            slug: Some(slug),
            ..record
        })
    }
}

/// Stage 2: resolve the address into a structured location.
///
/// Records without an address keep whatever location they already carry.
#[derive(Clone)]
pub struct GeocodeStage {
    geocoder: Arc<dyn Geocoder>,
}

impl GeocodeStage {
    /// Build the stage around a geocoding port.
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self { geocoder }
    }
}

#[async_trait]
impl PrePersistStage for GeocodeStage {
    fn name(&self) -> &'static str {
        "geocode"
    }

    async fn apply(&self, record: PendingBootcamp) -> Result<PendingBootcamp, Error> {
        let Some(address) = record.address.as_deref() else {
            return Ok(record);
        };
        let candidates = self
            .geocoder
            .geocode(address)
            .await
            .map_err(map_geocoder_error)?;
        let Some(best) = candidates.into_iter().next() else {
            return Err(Error::geocode_unresolved(address));
        };
        Ok(PendingBootcamp {
            location: Some(location_from_candidate(best)),
            address: None,
            ..record
        })
    }
}

/// Build a GeoJSON point location from a geocoder candidate.
pub fn location_from_candidate(candidate: GeocodeCandidate) -> Location {
    Location {
        kind: GeometryKind::Point,
        coordinates: [candidate.longitude, candidate.latitude],
        formatted_address: candidate.formatted_address,
        street: candidate.street_name,
        city: candidate.city,
        state: candidate.state_code,
        zipcode: candidate.zipcode,
        country: candidate.country_code,
    }
}

fn map_geocoder_error(error: GeocoderError) -> Error {
    Error::geocode_transport(error.to_string())
}

/// Ordered list of stages run before every write.
#[derive(Clone)]
pub struct PrePersistPipeline {
    stages: Vec<Arc<dyn PrePersistStage>>,
}

impl PrePersistPipeline {
    /// Compose an explicit list of stages, applied left to right.
    pub fn new(stages: Vec<Arc<dyn PrePersistStage>>) -> Self {
        Self { stages }
    }

    /// Slug first, then geocoding.
    pub fn standard(geocoder: Arc<dyn Geocoder>) -> Self {
        Self::new(vec![
            Arc::new(SlugStage),
            Arc::new(GeocodeStage::new(geocoder)),
        ])
    }

    /// Names of the configured stages, in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the failing stage's error, or an error when the final record
    /// still lacks a slug or location.
    pub async fn run(&self, record: PendingBootcamp) -> Result<ResolvedBootcamp, Error> {
        let mut current = record;
        for stage in &self.stages {
            let before = current.state();
            current = match stage.apply(current).await {
                Ok(next) => next,
                Err(error) => {
                    debug!(
                        stage = stage.name(),
                        from = %before,
                        to = %PersistState::Failed,
                        %error,
                        "pre-persist stage failed"
                    );
                    return Err(error);
                }
            };
            debug!(
                stage = stage.name(),
                from = %before,
                to = %current.state(),
                "pre-persist stage applied"
            );
        }
        ResolvedBootcamp::try_from(current)
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
