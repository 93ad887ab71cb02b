//! Backend entry-point: loads settings, installs tracing, and serves the API.

use std::ffi::OsString;
use std::sync::Arc;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use devcamper::domain::ports::{FixtureGeocoder, Geocoder};
use devcamper::outbound::geocoder::GeocoderSettings;
use devcamper::outbound::persistence::InMemoryBootcampRepository;
use devcamper::server::{Environment, ServerConfig, ServerSettings, create_server};
use ortho_config::OrthoConfig;

fn init_tracing(environment: Environment) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let outcome = match environment {
        Environment::Development => builder.pretty().try_init(),
        Environment::Production => builder.json().try_init(),
    };
    if let Err(e) = outcome {
        warn!(error = %e, "tracing init failed");
    }
}

fn build_geocoder(
    settings: &GeocoderSettings,
    environment: Environment,
) -> std::io::Result<Arc<dyn Geocoder>> {
    match settings.build_geocoder() {
        Ok(geocoder) => Ok(geocoder),
        Err(e) if environment.is_development() => {
            warn!(error = %e, "using fixture geocoder (dev only)");
            Ok(Arc::new(FixtureGeocoder))
        }
        Err(e) => Err(std::io::Error::other(format!(
            "failed to configure geocoder: {e}"
        ))),
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let server_settings = ServerSettings::load_from_iter([OsString::from("devcamper")])
        .map_err(|e| std::io::Error::other(format!("failed to load server settings: {e}")))?;
    let environment = server_settings
        .environment()
        .map_err(std::io::Error::other)?;
    init_tracing(environment);

    let geocoder_settings = GeocoderSettings::load_from_iter([OsString::from("devcamper")])
        .map_err(|e| std::io::Error::other(format!("failed to load geocoder settings: {e}")))?;
    let geocoder = build_geocoder(&geocoder_settings, environment)?;
    let repository = Arc::new(InMemoryBootcampRepository::with_geocoder(geocoder));

    let bind_addr = server_settings
        .bind_addr()
        .map_err(std::io::Error::other)?;
    let config = ServerConfig::new(bind_addr, repository).with_environment(environment);
    create_server(config)?.await
}
