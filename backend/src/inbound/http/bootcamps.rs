//! Bootcamp API handlers.
//!
//! ```text
//! GET    /api/v1/bootcamps
//! GET    /api/v1/bootcamps/{id}
//! POST   /api/v1/bootcamps
//! PUT    /api/v1/bootcamps/{id}
//! DELETE /api/v1/bootcamps/{id}
//! ```
//!
//! Handlers acknowledge the request and echo the identifier. They do not
//! touch the repository yet.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;

/// Acknowledgement body returned by the bootcamp endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StubResponse {
    pub success: bool,
    pub msg: String,
}

impl StubResponse {
    fn ok(msg: impl Into<String>) -> web::Json<Self> {
        web::Json(Self {
            success: true,
            msg: msg.into(),
        })
    }
}

/// List every bootcamp.
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps",
    responses(
        (status = 200, description = "Acknowledged", body = StubResponse),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["bootcamps"],
    operation_id = "listBootcamps"
)]
#[get("/bootcamps")]
pub async fn list_bootcamps() -> ApiResult<web::Json<StubResponse>> {
    Ok(StubResponse::ok("Show all bootcamps"))
}

/// Fetch one bootcamp.
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{id}",
    params(("id" = String, Path, description = "Bootcamp identifier")),
    responses(
        (status = 200, description = "Acknowledged", body = StubResponse),
        (status = 404, description = "Not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["bootcamps"],
    operation_id = "getBootcamp"
)]
#[get("/bootcamps/{id}")]
pub async fn get_bootcamp(id: web::Path<String>) -> ApiResult<web::Json<StubResponse>> {
    Ok(StubResponse::ok(format!("Get bootcamp {id}")))
}

/// Create a bootcamp.
#[utoipa::path(
    post,
    path = "/api/v1/bootcamps",
    responses(
        (status = 200, description = "Acknowledged", body = StubResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["bootcamps"],
    operation_id = "createBootcamp"
)]
#[post("/bootcamps")]
pub async fn create_bootcamp() -> ApiResult<web::Json<StubResponse>> {
    Ok(StubResponse::ok("Create a new bootcamp"))
}

/// Update a bootcamp.
#[utoipa::path(
    put,
    path = "/api/v1/bootcamps/{id}",
    params(("id" = String, Path, description = "Bootcamp identifier")),
    responses(
        (status = 200, description = "Acknowledged", body = StubResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 404, description = "Not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["bootcamps"],
    operation_id = "updateBootcamp"
)]
#[put("/bootcamps/{id}")]
pub async fn update_bootcamp(id: web::Path<String>) -> ApiResult<web::Json<StubResponse>> {
    Ok(StubResponse::ok(format!("Update bootcamp {id}")))
}

/// Delete a bootcamp.
#[utoipa::path(
    delete,
    path = "/api/v1/bootcamps/{id}",
    params(("id" = String, Path, description = "Bootcamp identifier")),
    responses(
        (status = 200, description = "Acknowledged", body = StubResponse),
        (status = 404, description = "Not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["bootcamps"],
    operation_id = "deleteBootcamp"
)]
#[delete("/bootcamps/{id}")]
pub async fn delete_bootcamp(id: web::Path<String>) -> ApiResult<web::Json<StubResponse>> {
    Ok(StubResponse::ok(format!("Delete bootcamp {id}")))
}

/// Register the bootcamp handlers on a scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_bootcamps)
        .service(get_bootcamp)
        .service(create_bootcamp)
        .service(update_bootcamp)
        .service(delete_bootcamp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{Method, StatusCode};
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    #[rstest]
    #[case::list(Method::GET, "/api/v1/bootcamps", "Show all bootcamps")]
    #[case::get(Method::GET, "/api/v1/bootcamps/5d713995b721c3bb38c1f5d0", "Get bootcamp 5d713995b721c3bb38c1f5d0")]
    #[case::create(Method::POST, "/api/v1/bootcamps", "Create a new bootcamp")]
    #[case::update(Method::PUT, "/api/v1/bootcamps/abc", "Update bootcamp abc")]
    #[case::delete(Method::DELETE, "/api/v1/bootcamps/42", "Delete bootcamp 42")]
    #[actix_web::test]
    async fn handlers_acknowledge_requests(
        #[case] method: Method,
        #[case] uri: &str,
        #[case] expected: &str,
    ) {
        let app = actix_test::init_service(
            App::new().service(web::scope("/api/v1").configure(configure)),
        )
        .await;

        let request = actix_test::TestRequest::default()
            .method(method)
            .uri(uri)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: StubResponse = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            StubResponse {
                success: true,
                msg: expected.to_owned(),
            }
        );
    }
}
