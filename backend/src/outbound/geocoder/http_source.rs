//! Reqwest-backed MapQuest geocoder adapter.
//!
//! This adapter owns transport details only: request construction, timeout
//! and HTTP error mapping, MapQuest status handling, and JSON decoding into
//! domain candidates.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::{MAPQUEST_OK, MapQuestResponseDto};
use crate::domain::ports::{GeocodeCandidate, Geocoder, GeocoderError};

/// Geocoder calling the MapQuest geocoding v1 `address` endpoint.
pub struct MapQuestGeocoder {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl MapQuestGeocoder {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }

    fn request_url(&self, address: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("location", address);
        url
    }
}

#[async_trait]
impl Geocoder for MapQuestGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>, GeocoderError> {
        let response = self
            .client
            .get(self.request_url(address))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let candidates = parse_candidates(body.as_ref())?;
        debug!(candidates = candidates.len(), "mapquest geocode completed");
        Ok(candidates)
    }
}

fn parse_candidates(body: &[u8]) -> Result<Vec<GeocodeCandidate>, GeocoderError> {
    let decoded: MapQuestResponseDto = serde_json::from_slice(body).map_err(|error| {
        GeocoderError::decode(format!("invalid MapQuest JSON payload: {error}"))
    })?;
    if decoded.info.statuscode != MAPQUEST_OK {
        return Err(map_provider_status(
            decoded.info.statuscode,
            &decoded.info.messages,
        ));
    }
    decoded.into_candidates().map_err(GeocoderError::decode)
}

/// MapQuest signals request problems in `info.statuscode` even on HTTP 200.
fn map_provider_status(code: i64, messages: &[String]) -> GeocoderError {
    let message = if messages.is_empty() {
        format!("statuscode {code}")
    } else {
        format!("statuscode {code}: {}", messages.join("; "))
    };
    if (400..500).contains(&code) {
        GeocoderError::rejected(message)
    } else {
        GeocoderError::transport(message)
    }
}

fn map_transport_error(error: reqwest::Error) -> GeocoderError {
    if error.is_timeout() {
        GeocoderError::timeout(error.to_string())
    } else {
        GeocoderError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GeocoderError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            GeocoderError::timeout(message)
        }
        _ if status.is_client_error() => GeocoderError::rejected(message),
        _ => GeocoderError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
