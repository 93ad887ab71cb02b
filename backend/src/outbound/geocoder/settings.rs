//! Geocoder configuration loaded via OrthoConfig.

use std::sync::Arc;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use super::MapQuestGeocoder;
use crate::domain::ports::{FixtureGeocoder, Geocoder};

const DEFAULT_PROVIDER: &str = "mapquest";
const DEFAULT_ENDPOINT: &str = "https://www.mapquestapi.com/geocoding/v1/address";

/// Geocoding provider settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GEOCODER")]
pub struct GeocoderSettings {
    /// Provider name: `mapquest`, or `fixture` for offline development.
    pub provider: Option<String>,
    /// Provider API key.
    pub api_key: Option<String>,
    /// Override for the provider endpoint.
    pub endpoint: Option<String>,
    /// Per-request timeout in seconds.
    #[ortho_config(default = 10)]
    pub timeout_seconds: u64,
}

/// Reasons the configured geocoder cannot be built.
#[derive(Debug, Error)]
pub enum GeocoderSettingsError {
    #[error("unsupported geocoder provider `{provider}`")]
    UnsupportedProvider { provider: String },
    #[error("GEOCODER_API_KEY must be set for the {provider} provider")]
    MissingApiKey { provider: String },
    #[error("invalid geocoder endpoint `{endpoint}`: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build geocoder HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl GeocoderSettings {
    /// Return the configured provider, falling back to MapQuest.
    pub fn provider(&self) -> &str {
        self.provider.as_deref().unwrap_or(DEFAULT_PROVIDER)
    }

    /// Return the configured endpoint, falling back to the public MapQuest URL.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Return the configured request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }

    /// Build the geocoder adapter these settings describe.
    ///
    /// # Errors
    ///
    /// Fails for unknown providers, a missing API key, a malformed endpoint,
    /// or when the HTTP client cannot be constructed.
    pub fn build_geocoder(&self) -> Result<Arc<dyn Geocoder>, GeocoderSettingsError> {
        match self.provider() {
            "fixture" => Ok(Arc::new(FixtureGeocoder)),
            "mapquest" => {
                let api_key = self
                    .api_key
                    .as_deref()
                    .filter(|key| !key.trim().is_empty())
                    .ok_or_else(|| GeocoderSettingsError::MissingApiKey {
                        provider: DEFAULT_PROVIDER.to_owned(),
                    })?;
                let endpoint = Url::parse(self.endpoint()).map_err(|source| {
                    GeocoderSettingsError::InvalidEndpoint {
                        endpoint: self.endpoint().to_owned(),
                        source,
                    }
                })?;
                let geocoder = MapQuestGeocoder::new(endpoint, api_key, self.timeout())?;
                Ok(Arc::new(geocoder))
            }
            other => Err(GeocoderSettingsError::UnsupportedProvider {
                provider: other.to_owned(),
            }),
        }
    }
}
