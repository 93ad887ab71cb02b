//! Persistence adapters for bootcamp records.
//!
//! The store speaks in document-database failure conventions
//! ([`DocumentStoreFault`]); [`map_document_store_fault`] is the single place
//! those conventions are turned into domain errors.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use devcamper::domain::ports::FixtureGeocoder;
//! use devcamper::outbound::persistence::InMemoryBootcampRepository;
//!
//! let repo = InMemoryBootcampRepository::with_geocoder(Arc::new(FixtureGeocoder));
//! ```

pub mod error_mapping;
mod memory;

pub use error_mapping::{DocumentStoreFault, map_document_store_fault};
pub use memory::InMemoryBootcampRepository;
