//! Document-store failure shapes and their translation into domain errors.
//!
//! The store reports failures the way document databases conventionally do:
//! a `name` tag (`CastError`, `ValidationError`), a numeric driver `code`
//! (`11000` for a unique index violation), and free-form extras. Only
//! [`map_document_store_fault`] interprets those conventions.

use tracing::debug;

use crate::domain::{Error, FieldViolation};

/// Failure tag for an identifier that does not fit the id type.
pub const CAST_ERROR: &str = "CastError";
/// Failure tag for schema validation failures.
pub const VALIDATION_ERROR: &str = "ValidationError";
/// Driver code for a unique index violation.
pub const DUPLICATE_KEY_CODE: i64 = 11000;

/// A raw failure as reported by the document store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentStoreFault {
    pub name: Option<String>,
    pub code: Option<i64>,
    /// Offending value, for cast failures.
    pub value: Option<String>,
    /// Offending index key, for duplicate-key failures.
    pub key: Option<String>,
    pub status: Option<u16>,
    pub message: Option<String>,
    /// Per-field failures, in schema declaration order.
    pub errors: Vec<FieldViolation>,
}

impl DocumentStoreFault {
    /// `value` could not be cast into the store's id type.
    pub fn cast(value: impl Into<String>) -> Self {
        Self {
            name: Some(CAST_ERROR.to_owned()),
            value: Some(value.into()),
            message: Some("Cast to ObjectId failed".to_owned()),
            ..Self::default()
        }
    }

    /// A unique index on `key` rejected the write.
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self {
            code: Some(DUPLICATE_KEY_CODE),
            key: Some(key.into()),
            message: Some("E11000 duplicate key error".to_owned()),
            ..Self::default()
        }
    }

    /// The schema rejected one or more fields.
    pub fn validation(errors: Vec<FieldViolation>) -> Self {
        Self {
            name: Some(VALIDATION_ERROR.to_owned()),
            message: Some("Bootcamp validation failed".to_owned()),
            errors,
            ..Self::default()
        }
    }
}

/// Translate a store fault into a domain error.
///
/// Checks run in a fixed order and the first match wins: cast failure,
/// duplicate key, schema validation, then the generic fallback carrying the
/// fault's own message and status.
///
/// # Examples
/// ```
/// use devcamper::domain::Error;
/// use devcamper::outbound::persistence::{DocumentStoreFault, map_document_store_fault};
///
/// let error = map_document_store_fault(DocumentStoreFault::cast("xyz"));
/// assert_eq!(error, Error::invalid_identifier("xyz"));
/// ```
pub fn map_document_store_fault(fault: DocumentStoreFault) -> Error {
    debug!(
        name = fault.name.as_deref(),
        code = fault.code,
        status = fault.status,
        "document store operation failed"
    );

    let DocumentStoreFault {
        name,
        code,
        value,
        key,
        status,
        message,
        errors,
    } = fault;

    match (name.as_deref(), code) {
        (Some(CAST_ERROR), _) => Error::invalid_identifier(value.unwrap_or_default()),
        (_, Some(DUPLICATE_KEY_CODE)) => Error::duplicate_field(key),
        (Some(VALIDATION_ERROR), _) => Error::field_validation(errors),
        _ => Error::Unknown { message, status },
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for store fault translation.

    use super::*;
    use rstest::rstest;

    fn violation() -> FieldViolation {
        FieldViolation::new("name", "Please add a name")
    }

    #[test]
    fn cast_faults_become_invalid_identifiers() {
        let error = map_document_store_fault(DocumentStoreFault::cast("xyz"));
        assert_eq!(error, Error::invalid_identifier("xyz"));
    }

    #[test]
    fn duplicate_key_faults_keep_the_key() {
        let error = map_document_store_fault(DocumentStoreFault::duplicate_key("name"));
        assert_eq!(error, Error::duplicate_field(Some("name".to_owned())));
    }

    #[test]
    fn validation_faults_keep_violation_order() {
        let violations = vec![
            violation(),
            FieldViolation::new("careers", "Please add at least one career"),
        ];
        let error = map_document_store_fault(DocumentStoreFault::validation(violations.clone()));
        assert_eq!(error, Error::field_validation(violations));
    }

    #[rstest]
    #[case::cast_beats_duplicate(Some(CAST_ERROR), Some(DUPLICATE_KEY_CODE), "invalid")]
    #[case::cast_beats_validation(Some(CAST_ERROR), None, "invalid")]
    #[case::duplicate_beats_validation(Some(VALIDATION_ERROR), Some(DUPLICATE_KEY_CODE), "duplicate")]
    #[case::code_alone_is_duplicate(Some("MongoServerError"), Some(DUPLICATE_KEY_CODE), "duplicate")]
    #[case::other_codes_fall_through(Some("MongoServerError"), Some(121), "unknown")]
    fn first_matching_rule_wins(
        #[case] name: Option<&str>,
        #[case] code: Option<i64>,
        #[case] expected: &str,
    ) {
        let fault = DocumentStoreFault {
            name: name.map(str::to_owned),
            code,
            value: Some("xyz".to_owned()),
            errors: vec![violation()],
            ..DocumentStoreFault::default()
        };
        let error = map_document_store_fault(fault);
        let matched = match expected {
            "invalid" => matches!(error, Error::InvalidIdentifier { .. }),
            "duplicate" => matches!(error, Error::DuplicateField { .. }),
            "unknown" => matches!(error, Error::Unknown { .. }),
            _ => panic!("unsupported test expectation: {expected}"),
        };
        assert!(matched, "expected {expected}, got {error:?}");
    }

    #[test]
    fn fallback_carries_message_and_status() {
        let fault = DocumentStoreFault {
            status: Some(503),
            message: Some("store offline".to_owned()),
            ..DocumentStoreFault::default()
        };
        assert_eq!(
            map_document_store_fault(fault),
            Error::with_status(503, "store offline")
        );
    }
}
