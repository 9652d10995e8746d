//! Country geocoding module using the OpenStreetMap Nominatim API
//! Resolves a country name to representative map coordinates.

use serde::Deserialize;
use thiserror::Error;

const API_URL: &str = "https://nominatim.openstreetmap.org/search";

// Nominatim usage policy requires an identifying User-Agent.
const USER_AGENT: &str = concat!("barcode-origin/", env!("CARGO_PKG_VERSION"));

/// Representative coordinates for a country
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One entry of the Nominatim search response; lat/lon arrive as strings
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("no geocoding result for country")]
    NoResult,
    #[error("invalid coordinate in response: {0}")]
    InvalidCoordinate(#[from] std::num::ParseFloatError),
}

/// Fetches representative coordinates for a country by name
pub async fn lookup_coordinates(country: &str) -> Result<Coordinates, GeocodeError> {
    let client = reqwest::Client::new();

    let results: Vec<SearchResult> = client
        .get(API_URL)
        .query(&[("country", country), ("format", "json"), ("limit", "1")])
        .header("User-Agent", USER_AGENT)
        .timeout(std::time::Duration::from_secs(10))
        .send()
        .await?
        .json()
        .await?;

    let first = results.into_iter().next().ok_or(GeocodeError::NoResult)?;

    Ok(Coordinates {
        lat: first.lat.parse()?,
        lon: first.lon.parse()?,
    })
}
