//! In-process document store for bootcamp records.
//!
//! Emulates the behaviour of a document database collection: UUID ids, a
//! unique index on `name`, schema validation before writes. Store failures
//! are raised as [`DocumentStoreFault`]s and translated by
//! [`map_document_store_fault`] before they leave the adapter.
//!
//! The pre-persist pipeline runs before the write lock is taken, so no lock
//! is held while the geocoder is awaited.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::error_mapping::{DocumentStoreFault, map_document_store_fault};
use crate::domain::ports::{BootcampRepository, Geocoder};
use crate::domain::{
    Bootcamp, BootcampId, BootcampInput, Error, PendingBootcamp, PersistState,
    PrePersistPipeline, ResolvedBootcamp, ValidatedBootcamp, ValidationMode,
};

/// Bootcamp repository holding records in memory.
pub struct InMemoryBootcampRepository {
    records: RwLock<HashMap<BootcampId, Bootcamp>>,
    pipeline: PrePersistPipeline,
    clock: Arc<dyn Clock>,
}

impl InMemoryBootcampRepository {
    /// Create an empty store that runs `pipeline` before every write.
    pub fn new(pipeline: PrePersistPipeline, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            pipeline,
            clock,
        }
    }

    /// Create an empty store using the standard pipeline and the system clock.
    pub fn with_geocoder(geocoder: Arc<dyn Geocoder>) -> Self {
        Self::new(
            PrePersistPipeline::standard(geocoder),
            Arc::new(mockable::DefaultClock),
        )
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    async fn resolve(&self, pending: PendingBootcamp) -> Result<ResolvedBootcamp, Error> {
        self.pipeline.run(pending).await.inspect_err(|error| {
            debug!(state = %PersistState::Failed, %error, "bootcamp not stored");
        })
    }

    async fn stored(&self, id: &str) -> Result<(BootcampId, Bootcamp), Error> {
        let id = parse_id(id)?;
        let records = self.records.read().await;
        records
            .get(&id)
            .cloned()
            .map(|record| (id, record))
            .ok_or_else(|| Error::not_found(id))
    }
}

fn parse_id(raw: &str) -> Result<BootcampId, Error> {
    BootcampId::parse(raw).map_err(|_| map_document_store_fault(DocumentStoreFault::cast(raw)))
}

fn validate(input: BootcampInput, mode: ValidationMode) -> Result<ValidatedBootcamp, Error> {
    input
        .validate(mode)
        .map_err(|violations| map_document_store_fault(DocumentStoreFault::validation(violations)))
}

fn ensure_unique_name(
    records: &HashMap<BootcampId, Bootcamp>,
    name: &str,
    except: Option<BootcampId>,
) -> Result<(), Error> {
    let taken = records
        .values()
        .any(|record| Some(record.id) != except && record.name() == name);
    if taken {
        return Err(map_document_store_fault(DocumentStoreFault::duplicate_key(
            "name",
        )));
    }
    Ok(())
}

#[async_trait]
impl BootcampRepository for InMemoryBootcampRepository {
    async fn create(&self, input: BootcampInput) -> Result<Bootcamp, Error> {
        let validated = validate(input, ValidationMode::RequireAddress)?;
        let resolved = self.resolve(PendingBootcamp::new(validated)).await?;

        let mut records = self.records.write().await;
        ensure_unique_name(&records, &resolved.fields.name, None)?;
        let record = Bootcamp {
            id: BootcampId::random(),
            slug: resolved.slug,
            fields: resolved.fields,
            location: resolved.location,
            created_at: self.clock.utc(),
        };
        records.insert(record.id, record.clone());
        info!(id = %record.id, slug = %record.slug, state = %PersistState::Stored, "bootcamp created");
        Ok(record)
    }

    async fn update(&self, id: &str, patch: BootcampInput) -> Result<Bootcamp, Error> {
        let (id, existing) = self.stored(id).await?;
        let validated = validate(
            patch.merged_onto(&existing.fields),
            ValidationMode::AddressOptional,
        )?;
        let resolved = self
            .resolve(PendingBootcamp::for_update(validated, existing.location))
            .await?;

        let mut records = self.records.write().await;
        if !records.contains_key(&id) {
            return Err(Error::not_found(id));
        }
        ensure_unique_name(&records, &resolved.fields.name, Some(id))?;
        let record = Bootcamp {
            id,
            slug: resolved.slug,
            fields: resolved.fields,
            location: resolved.location,
            created_at: existing.created_at,
        };
        records.insert(id, record.clone());
        info!(id = %record.id, slug = %record.slug, state = %PersistState::Stored, "bootcamp updated");
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        let id = parse_id(id)?;
        let removed = self.records.write().await.remove(&id);
        match removed {
            Some(_) => {
                info!(%id, "bootcamp deleted");
                Ok(())
            }
            None => Err(Error::not_found(id)),
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Bootcamp, Error> {
        self.stored(id).await.map(|(_, record)| record)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
