//! Zippopotam.us client, the production geocoding provider.
//!
//! The API is free and unauthenticated. Two endpoints are used:
//! `GET /us/{zip}` and `GET /us/{state}/{city}`. Field names in the
//! payload contain spaces (`"post code"`, `"place name"`) and the
//! coordinates are string-typed, so decoding goes through dedicated
//! response structs rather than the public [`PlaceLookup`] type.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::{GeocodingError, GeocodingProvider, MAX_PLACE_CANDIDATES, PlaceLookup, Result};

const DEFAULT_BASE_URL: &str = "https://api.zippopotam.us/us";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Async HTTP client for the Zippopotam.us geocoding API.
///
/// The underlying `reqwest` client carries a bounded timeout so a slow
/// geocoding service can never stall a search request indefinitely; a
/// timeout surfaces as a transient `Err` and the caller degrades.
#[derive(Debug, Clone)]
pub struct ZippopotamClient {
    http: reqwest::Client,
    base_url: String,
}

impl ZippopotamClient {
    /// Create a client with the default endpoint and a 5 second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the endpoint base URL. Intended for tests against a local stub.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get(&self, url: &str) -> Result<Option<reqwest::Response>> {
        let response = self.http.get(url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            // The API answers 404 for well-formed queries that match nothing.
            return Ok(None);
        }
        Ok(Some(response.error_for_status()?))
    }
}

impl GeocodingProvider for ZippopotamClient {
    #[instrument(name = "Zippopotam ZIP lookup", level = "debug", skip(self))]
    async fn lookup_zip(&self, code: &str) -> Result<Option<PlaceLookup>> {
        let url = format!("{}/{code}", self.base_url);
        let Some(response) = self.get(&url).await? else {
            debug!(code, "ZIP code confirmed not found");
            return Ok(None);
        };

        let body: ZipResponse = response.json().await?;
        let Some(place) = body.places.into_iter().next() else {
            return Err(GeocodingError::InvalidResponse(format!(
                "ZIP response for {code} contained no places"
            )));
        };

        Ok(Some(PlaceLookup {
            zip_code: body.post_code,
            city: place.place_name,
            state: place.state,
            state_code: place.state_abbreviation,
            latitude: parse_coordinate(&place.latitude)?,
            longitude: parse_coordinate(&place.longitude)?,
        }))
    }

    #[instrument(name = "Zippopotam city lookup", level = "debug", skip(self))]
    async fn lookup_city_state(&self, city: &str, state_code: &str) -> Result<Vec<PlaceLookup>> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            state_code.to_ascii_lowercase(),
            urlencode(city)
        );
        let Some(response) = self.get(&url).await? else {
            debug!(city, state_code, "city/state confirmed not found");
            return Ok(Vec::new());
        };

        let body: CityResponse = response.json().await?;
        body.places
            .into_iter()
            .take(MAX_PLACE_CANDIDATES)
            .map(|place| {
                Ok(PlaceLookup {
                    zip_code: place.post_code,
                    city: body.place_name.clone(),
                    state: body.state.clone(),
                    state_code: body.state_abbreviation.clone(),
                    latitude: parse_coordinate(&place.latitude)?,
                    longitude: parse_coordinate(&place.longitude)?,
                })
            })
            .collect()
    }
}

fn parse_coordinate(raw: &str) -> Result<f64> {
    raw.parse().map_err(|_| {
        GeocodingError::InvalidResponse(format!("coordinate is not a number: {raw:?}"))
    })
}

/// Minimal percent-encoding for the city path segment (spaces are the only
/// character the API needs escaped in practice).
fn urlencode(segment: &str) -> String {
    segment.trim().replace(' ', "%20")
}

#[derive(Debug, serde::Deserialize)]
struct ZipResponse {
    #[serde(rename = "post code")]
    post_code: String,
    places: Vec<ZipResponsePlace>,
}

#[derive(Debug, serde::Deserialize)]
struct ZipResponsePlace {
    #[serde(rename = "place name")]
    place_name: String,
    state: String,
    #[serde(rename = "state abbreviation")]
    state_abbreviation: String,
    latitude: String,
    longitude: String,
}

#[derive(Debug, serde::Deserialize)]
struct CityResponse {
    #[serde(rename = "place name")]
    place_name: String,
    state: String,
    #[serde(rename = "state abbreviation")]
    state_abbreviation: String,
    places: Vec<CityResponsePlace>,
}

#[derive(Debug, serde::Deserialize)]
struct CityResponsePlace {
    #[serde(rename = "post code")]
    post_code: String,
    latitude: String,
    longitude: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_zip_response_payload() {
        let raw = r#"{
            "post code": "78701",
            "country": "United States",
            "country abbreviation": "US",
            "places": [{
                "place name": "Austin",
                "longitude": "-97.7426",
                "state": "Texas",
                "state abbreviation": "TX",
                "latitude": "30.2713"
            }]
        }"#;

        let body: ZipResponse = serde_json::from_str(raw).expect("should decode");
        assert_eq!(body.post_code, "78701");
        assert_eq!(body.places.len(), 1);
        assert_eq!(body.places[0].place_name, "Austin");
        assert_eq!(body.places[0].state_abbreviation, "TX");
        assert_eq!(parse_coordinate(&body.places[0].latitude).unwrap(), 30.2713);
    }

    #[test]
    fn decodes_city_response_payload() {
        let raw = r#"{
            "country abbreviation": "US",
            "places": [
                {"place name": "Austin", "longitude": "-97.7426", "post code": "78701", "latitude": "30.2713"},
                {"place name": "Austin", "longitude": "-97.7166", "post code": "78702", "latitude": "30.2632"}
            ],
            "country": "United States",
            "place name": "Austin",
            "state": "Texas",
            "state abbreviation": "TX"
        }"#;

        let body: CityResponse = serde_json::from_str(raw).expect("should decode");
        assert_eq!(body.place_name, "Austin");
        assert_eq!(body.state_abbreviation, "TX");
        assert_eq!(body.places.len(), 2);
        assert_eq!(body.places[1].post_code, "78702");
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        assert!(parse_coordinate("30.27").is_ok());
        assert!(parse_coordinate("north").is_err());
    }

    #[test]
    fn encodes_city_path_segment() {
        assert_eq!(urlencode("San Antonio"), "San%20Antonio");
        assert_eq!(urlencode("  Austin "), "Austin");
    }
}
