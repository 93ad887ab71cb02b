//! Geocoding outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `Geocoder` port
//! backed by MapQuest, plus the settings that select and configure it.

mod dto;
mod http_source;
mod settings;

pub use http_source::MapQuestGeocoder;
pub use settings::{GeocoderSettings, GeocoderSettingsError};
