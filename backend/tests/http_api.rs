//! End-to-end checks of the assembled HTTP application.

use std::sync::Arc;

use actix_web::http::{Method, StatusCode};
use actix_web::test;
use devcamper::domain::TRACE_ID_HEADER;
use devcamper::domain::ports::FixtureGeocoder;
use devcamper::outbound::persistence::InMemoryBootcampRepository;
use devcamper::server::{AppDependencies, build_app};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn deps() -> AppDependencies {
    let repository = InMemoryBootcampRepository::with_geocoder(Arc::new(FixtureGeocoder));
    AppDependencies::new(Arc::new(repository))
}

#[rstest]
#[case::list(Method::GET, "/api/v1/bootcamps", "Show all bootcamps")]
#[case::get(Method::GET, "/api/v1/bootcamps/1", "Get bootcamp 1")]
#[case::create(Method::POST, "/api/v1/bootcamps", "Create a new bootcamp")]
#[case::update(Method::PUT, "/api/v1/bootcamps/1", "Update bootcamp 1")]
#[case::delete(Method::DELETE, "/api/v1/bootcamps/1", "Delete bootcamp 1")]
#[actix_web::test]
async fn every_bootcamp_route_acknowledges(
    deps: AppDependencies,
    #[case] method: Method,
    #[case] uri: &str,
    #[case] msg: &str,
) {
    let app = test::init_service(build_app(deps)).await;

    let request = test::TestRequest::default()
        .method(method)
        .uri(uri)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header present")
        .to_str()
        .expect("trace id is ascii")
        .to_owned();
    assert!(uuid::Uuid::parse_str(&trace_id).is_ok());
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"success": true, "msg": msg}));
}

#[rstest]
#[actix_web::test]
async fn caller_trace_id_is_echoed(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;
    let supplied = "2f1c7a0e-3f7e-4f60-9d2b-4a3a9c1b8e21";

    let request = test::TestRequest::get()
        .uri("/api/v1/bootcamps")
        .insert_header((TRACE_ID_HEADER, supplied))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(
        response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some(supplied)
    );
}

#[rstest]
#[actix_web::test]
async fn unmatched_routes_are_not_found(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;

    let request = test::TestRequest::get()
        .uri("/api/v2/bootcamps")
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[cfg(debug_assertions)]
#[rstest]
#[actix_web::test]
async fn openapi_document_is_served(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;

    let request = test::TestRequest::get()
        .uri("/api-docs/openapi.json")
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let doc: Value = test::read_body_json(response).await;
    assert!(doc["paths"]["/api/v1/bootcamps/{id}"]["delete"].is_object());
}
