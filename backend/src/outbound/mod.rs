//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: in-process document store for bootcamp records
//! - **geocoder**: MapQuest-backed address resolution
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod geocoder;
pub mod persistence;
