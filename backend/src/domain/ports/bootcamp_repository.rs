//! Port abstraction for bootcamp persistence adapters.
//!
//! Adapters run the pre-persist pipeline before every write, so a record
//! handed back by [`BootcampRepository::create`] or
//! [`BootcampRepository::update`] always carries a slug and a resolved
//! location. Failures are already translated into [`Error`] at the adapter
//! boundary.

use async_trait::async_trait;

use crate::domain::{Bootcamp, BootcampInput, Error};

/// Persistence operations for bootcamp records.
///
/// Identifiers arrive as raw client strings; adapters reject values that do
/// not parse with [`Error::InvalidIdentifier`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BootcampRepository: Send + Sync {
    /// Validate, slug, geocode and store a new bootcamp.
    async fn create(&self, input: BootcampInput) -> Result<Bootcamp, Error>;

    /// Apply `patch` over the stored record and rerun the pipeline.
    async fn update(&self, id: &str, patch: BootcampInput) -> Result<Bootcamp, Error>;

    /// Remove a bootcamp. No dependent records are touched.
    async fn delete(&self, id: &str) -> Result<(), Error>;

    /// Fetch a single bootcamp.
    async fn find_by_id(&self, id: &str) -> Result<Bootcamp, Error>;
}
