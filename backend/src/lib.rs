//! DevCamper backend library.
//!
//! Hexagonal layout: [`domain`] holds the bootcamp model, validation rules,
//! pre-persist pipeline and ports; [`outbound`] implements those ports;
//! [`inbound`] exposes the HTTP API; [`server`] wires everything together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
