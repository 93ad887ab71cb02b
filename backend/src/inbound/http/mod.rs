//! HTTP inbound adapter exposing REST endpoints.

pub mod bootcamps;
pub mod error;

pub use error::{ApiResult, ErrorEnvelope, ErrorPayload};
