//! Domain types, rules and ports.
//!
//! Nothing in here knows about HTTP or a concrete store. Inbound adapters turn
//! [`Error`] into responses; outbound adapters implement the traits in
//! [`ports`].

pub mod bootcamp;
pub mod error;
pub mod lifecycle;
pub mod ports;
pub mod slug;
pub mod trace_id;

pub use self::bootcamp::{
    Bootcamp, BootcampFields, BootcampId, BootcampInput, Career, DEFAULT_PHOTO, GeometryKind,
    Location, ParseCareerError, ValidatedBootcamp, ValidationMode,
};
pub use self::error::{Error, FieldViolation};
pub use self::lifecycle::{
    GeocodeStage, PendingBootcamp, PersistState, PrePersistPipeline, PrePersistStage,
    ResolvedBootcamp, SlugStage,
};
pub use self::slug::{is_valid_slug, slugify};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
