//! Domain-level failure taxonomy.
//!
//! These errors are transport agnostic. The HTTP adapter normalises them into
//! the `{ "success": false, "error": ... }` envelope; outbound adapters map
//! their own failure shapes into one of these variants at the boundary.

use std::fmt;

/// A single field that failed schema validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: &'static str,
    message: String,
}

impl FieldViolation {
    /// Record a violation against `field`.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending field as exposed over the API.
    pub fn field(&self) -> &str {
        self.field
    }

    /// Human-readable validation message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Failures raised while handling a bootcamp request.
///
/// The set is closed: every failure the persistence, geocoding or HTTP layers
/// can produce is expressed as one of these cases, with [`Error::Unknown`] as
/// the catch-all.
///
/// # Examples
/// ```
/// use devcamper::domain::Error;
///
/// let err = Error::invalid_identifier("xyz");
/// assert_eq!(err.to_string(), "invalid identifier: xyz");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// An identifier did not parse into the store's id type.
    #[error("invalid identifier: {value}")]
    InvalidIdentifier { value: String },
    /// A uniqueness constraint was violated.
    #[error("duplicate key violation{}", field_suffix(.field))]
    DuplicateField { field: Option<String> },
    /// One or more fields failed schema validation, in declaration order.
    #[error("validation failed for {} field(s)", violation_count(.violations))]
    FieldValidation { violations: Vec<FieldViolation> },
    /// The geocoder returned no candidates for the address.
    #[error("address could not be geocoded: {address}")]
    GeocodeUnresolved { address: String },
    /// The geocoder could not be reached or answered with an error.
    #[error("geocoding transport failed: {message}")]
    GeocodeTransport { message: String },
    /// Any other failure, optionally carrying its own message and status.
    #[error("{}", unknown_message(.message))]
    Unknown {
        message: Option<String>,
        status: Option<u16>,
    },
}

fn field_suffix(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|name| format!(" on {name}"))
        .unwrap_or_default()
}

fn violation_count(violations: &[FieldViolation]) -> usize {
    violations.len()
}

fn unknown_message(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("unknown failure")
}

impl Error {
    /// Convenience constructor for [`Error::InvalidIdentifier`].
    pub fn invalid_identifier(value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
        }
    }

    /// Convenience constructor for [`Error::DuplicateField`].
    pub fn duplicate_field(field: Option<String>) -> Self {
        Self::DuplicateField { field }
    }

    /// Convenience constructor for [`Error::FieldValidation`].
    pub fn field_validation(violations: Vec<FieldViolation>) -> Self {
        Self::FieldValidation { violations }
    }

    /// Convenience constructor for [`Error::GeocodeUnresolved`].
    pub fn geocode_unresolved(address: impl Into<String>) -> Self {
        Self::GeocodeUnresolved {
            address: address.into(),
        }
    }

    /// Convenience constructor for [`Error::GeocodeTransport`].
    pub fn geocode_transport(message: impl Into<String>) -> Self {
        Self::GeocodeTransport {
            message: message.into(),
        }
    }

    /// Unknown failure with a message and no status; renders as a 500.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: Some(message.into()),
            status: None,
        }
    }

    /// Unknown failure carrying an explicit HTTP status.
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self::Unknown {
            message: Some(message.into()),
            status: Some(status),
        }
    }

    /// A well-formed identifier that matched no record.
    pub fn not_found(id: impl fmt::Display) -> Self {
        Self::with_status(404, format!("Resource not found with id of {id}"))
    }
}
