//! Tests for HTTP error normalisation.

use super::*;
use crate::domain::FieldViolation;
use crate::outbound::persistence::{DocumentStoreFault, map_document_store_fault};
use actix_web::body::to_bytes;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

async fn render(error: Error) -> (StatusCode, Value) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("envelope JSON deserialisation succeeds");
    (status, body)
}

#[rstest]
#[case::invalid_identifier(Error::invalid_identifier("xyz"), StatusCode::NOT_FOUND)]
#[case::duplicate(Error::duplicate_field(Some("name".into())), StatusCode::BAD_REQUEST)]
#[case::validation(Error::field_validation(Vec::new()), StatusCode::BAD_REQUEST)]
#[case::unresolved(Error::geocode_unresolved("nowhere"), StatusCode::BAD_REQUEST)]
#[case::transport(Error::geocode_transport("refused"), StatusCode::SERVICE_UNAVAILABLE)]
#[case::not_found(Error::not_found("abc"), StatusCode::NOT_FOUND)]
#[case::teapot(Error::with_status(418, "short and stout"), StatusCode::IM_A_TEAPOT)]
#[case::internal(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case::success_status(Error::with_status(200, "fine"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case::out_of_range(Error::with_status(999, "odd"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_failure(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[actix_web::test]
async fn cast_fault_renders_not_found_envelope() {
    let error = map_document_store_fault(DocumentStoreFault::cast("xyz"));

    let (status, body) = render(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"success": false, "error": "Resource not found with id of xyz"})
    );
}

#[rstest]
#[actix_web::test]
async fn duplicate_key_fault_hides_the_key() {
    let error = map_document_store_fault(DocumentStoreFault::duplicate_key("name"));

    let (status, body) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"success": false, "error": "Duplicate field value entered"})
    );
}

#[rstest]
#[actix_web::test]
async fn validation_fault_lists_every_message_in_order() {
    let violations = vec![
        FieldViolation::new("name", "Please add a name"),
        FieldViolation::new("description", "Please add a description"),
        FieldViolation::new("careers", "Please add at least one career"),
    ];
    let error = map_document_store_fault(DocumentStoreFault::validation(violations));

    let (status, body) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": [
                "Please add a name",
                "Please add a description",
                "Please add at least one career"
            ]
        })
    );
}

#[rstest]
#[case::with_message(Error::with_status(409, "conflict"), "conflict")]
#[case::without_message(Error::Unknown { message: None, status: None }, "Server Error")]
#[case::unresolved(Error::geocode_unresolved("1 Nowhere Ln"), "Unable to geocode address 1 Nowhere Ln")]
#[case::transport(Error::geocode_transport("tcp connect error"), "Geocoding service unavailable")]
fn fallback_messages(#[case] error: Error, #[case] expected: &str) {
    let (_, envelope) = normalize(&error);
    assert!(!envelope.success);
    assert_eq!(envelope.error, ErrorPayload::Message(expected.to_owned()));
}

#[rstest]
#[actix_web::test]
async fn error_response_works_inside_a_trace_scope() {
    let trace_id = TraceId::generate();

    let (status, body) =
        TraceId::scope(trace_id, render(Error::geocode_transport("refused"))).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Geocoding service unavailable");
}

async fn items(_body: web::Json<Value>, _id: web::Path<u32>) -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[rstest]
#[case::malformed_json("/items/1", "{not json")]
#[case::bad_path("/items/abc", r#"{"name":"x"}"#)]
#[actix_web::test]
async fn extractor_failures_use_the_envelope(#[case] uri: &str, #[case] payload: &str) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .route("/items/{id}", web::post().to(items)),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri(uri)
        .insert_header(("content-type", "application/json"))
        .set_payload(payload.to_owned())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[rstest]
#[case::invalid_identifier(Error::invalid_identifier("xyz"))]
#[case::duplicate(Error::duplicate_field(None))]
#[case::validation(Error::field_validation(Vec::new()))]
#[case::unresolved(Error::geocode_unresolved("nowhere"))]
#[case::transport(Error::geocode_transport("refused"))]
#[case::not_found(Error::not_found("abc"))]
#[case::internal(Error::internal("boom"))]
#[case::bare(Error::Unknown { message: None, status: None })]
#[case::out_of_range(Error::with_status(302, "moved"))]
#[case::gateway(Error::with_status(502, "upstream"))]
fn log_severity_is_decided_before_normalizing(#[case] error: Error) {
    let (status, _) = normalize(&error);
    assert_eq!(is_server_failure(&error), status.is_server_error());
}
