//! HTTP adapter mapping for domain errors.
//!
//! Every failure leaving a handler, and every extractor failure routed
//! through [`json_error_handler`] or [`path_error_handler`], is rendered by
//! [`normalize`] into exactly one `{"success": false, "error": ...}` body.
//! The failure is logged with the active trace id before it is translated.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const SERVER_ERROR: &str = "Server Error";
const DUPLICATE_FIELD: &str = "Duplicate field value entered";
const GEOCODER_UNAVAILABLE: &str = "Geocoding service unavailable";

/// Either one message or every field violation, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorPayload {
    Message(String),
    Messages(Vec<String>),
}

/// Failure body returned by every endpoint.
///
/// ```json
/// {"success": false, "error": "Resource not found with id of xyz"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorPayload,
}

impl ErrorEnvelope {
    fn message(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorPayload::Message(message.into()),
        }
    }

    fn messages(messages: Vec<String>) -> Self {
        Self {
            success: false,
            error: ErrorPayload::Messages(messages),
        }
    }
}

/// Status used when a failure carries no usable status of its own.
fn status_or_default(status: Option<u16>) -> StatusCode {
    status
        .filter(|code| (400..=599).contains(code))
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Translate a domain failure into its HTTP status and envelope.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use devcamper::domain::Error;
/// use devcamper::inbound::http::error::{ErrorPayload, normalize};
///
/// let (status, body) = normalize(&Error::invalid_identifier("xyz"));
/// assert_eq!(status, StatusCode::NOT_FOUND);
/// assert_eq!(
///     body.error,
///     ErrorPayload::Message("Resource not found with id of xyz".into())
/// );
/// ```
pub fn normalize(error: &Error) -> (StatusCode, ErrorEnvelope) {
    match error {
        Error::InvalidIdentifier { value } => (
            StatusCode::NOT_FOUND,
            ErrorEnvelope::message(format!("Resource not found with id of {value}")),
        ),
        Error::DuplicateField { .. } => (
            StatusCode::BAD_REQUEST,
            ErrorEnvelope::message(DUPLICATE_FIELD),
        ),
        Error::FieldValidation { violations } => (
            StatusCode::BAD_REQUEST,
            ErrorEnvelope::messages(
                violations
                    .iter()
                    .map(|violation| violation.message().to_owned())
                    .collect(),
            ),
        ),
        Error::GeocodeUnresolved { address } => (
            StatusCode::BAD_REQUEST,
            ErrorEnvelope::message(format!("Unable to geocode address {address}")),
        ),
        Error::GeocodeTransport { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorEnvelope::message(GEOCODER_UNAVAILABLE),
        ),
        Error::Unknown { message, status } => (
            status_or_default(*status),
            ErrorEnvelope::message(message.as_deref().unwrap_or(SERVER_ERROR)),
        ),
    }
}

/// Whether the failure will render as a 5xx, judged from the raw error.
fn is_server_failure(error: &Error) -> bool {
    match error {
        Error::GeocodeTransport { .. } => true,
        Error::Unknown { status, .. } => status_or_default(*status).is_server_error(),
        _ => false,
    }
}

fn log_failure(error: &Error) {
    let trace_id = TraceId::current().map(|id| id.to_string());
    if is_server_failure(error) {
        error!(trace_id = trace_id.as_deref(), error = ?error, "request failed");
    } else {
        warn!(trace_id = trace_id.as_deref(), error = %error, "request rejected");
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        normalize(self).0
    }

    fn error_response(&self) -> HttpResponse {
        log_failure(self);
        let (status, envelope) = normalize(self);
        HttpResponse::build(status).json(envelope)
    }
}

/// Route malformed JSON bodies through the error envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::with_status(StatusCode::BAD_REQUEST.as_u16(), err.to_string()).into()
}

/// Route path extraction failures through the error envelope.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::with_status(StatusCode::BAD_REQUEST.as_u16(), err.to_string()).into()
}

#[cfg(test)]
mod tests;
