//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::{Environment, ParseEnvironmentError, ServerSettings, ServerSettingsError};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Condition, Logger};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::BootcampRepository;
use crate::inbound::http::bootcamps;
use crate::inbound::http::error::{json_error_handler, path_error_handler};

/// Per-worker dependencies shared by every app instance.
#[derive(Clone)]
pub struct AppDependencies {
    pub repository: web::Data<dyn BootcampRepository>,
}

impl AppDependencies {
    pub fn new(repository: Arc<dyn BootcampRepository>) -> Self {
        Self {
            repository: web::Data::from(repository),
        }
    }
}

/// Assemble the application: extractor error handlers, tracing, the
/// bootcamp API, and Swagger UI in debug builds.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies { repository } = deps;

    let api = web::scope("/api/v1").configure(bootcamps::configure);

    let app = App::new()
        .app_data(repository)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .wrap(Trace)
        .service(api);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from a prepared [`ServerConfig`].
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        environment,
        repository,
    } = config;
    let deps = AppDependencies::new(repository);
    let log_requests = environment.is_development();

    let server = HttpServer::new(move || {
        build_app(deps.clone()).wrap(Condition::new(log_requests, Logger::default()))
    })
    .bind(bind_addr)?
    .run();

    info!(
        mode = %environment,
        port = bind_addr.port(),
        "Server running in {environment} mode on port {}",
        bind_addr.port()
    );
    Ok(server)
}
