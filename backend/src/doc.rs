//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the bootcamp endpoints and the response envelopes.
//! The document is served by Swagger UI in debug builds and exported with
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::bootcamps::StubResponse;
use crate::inbound::http::error::{ErrorEnvelope, ErrorPayload};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevCamper API",
        description = "Bootcamp directory backend.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::bootcamps::list_bootcamps,
        crate::inbound::http::bootcamps::get_bootcamp,
        crate::inbound::http::bootcamps::create_bootcamp,
        crate::inbound::http::bootcamps::update_bootcamp,
        crate::inbound::http::bootcamps::delete_bootcamp,
    ),
    components(schemas(StubResponse, ErrorEnvelope, ErrorPayload)),
    tags(
        (name = "bootcamps", description = "Bootcamp directory operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_bootcamp_operation() {
        let doc = ApiDoc::openapi();

        let collection = doc
            .paths
            .paths
            .get("/api/v1/bootcamps")
            .expect("collection path registered");
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());

        let item = doc
            .paths
            .paths
            .get("/api/v1/bootcamps/{id}")
            .expect("item path registered");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }

    #[test]
    fn registers_envelope_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components present").schemas;
        for name in ["StubResponse", "ErrorEnvelope", "ErrorPayload"] {
            assert!(schemas.contains_key(name), "{name} schema missing");
        }
    }
}
