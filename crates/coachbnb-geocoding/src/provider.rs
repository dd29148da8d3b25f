use std::future::Future;

use crate::Result;

/// A single geocoded place as returned by a provider lookup.
///
/// Mirrors the record shape the rest of the stack already consumes:
/// a postal code, its city/state labels and a point. Latitude and
/// longitude are plain degrees.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlaceLookup {
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub state_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// An external geocoding service that can resolve US postal codes and
/// city/state pairs to coordinates.
///
/// Implementations must distinguish a confirmed miss (`Ok(None)` /
/// `Ok(empty)`) from a transient failure (`Err`); the search core's
/// degradation and fallback behavior is built on that distinction.
pub trait GeocodingProvider: Send + Sync {
    /// Resolve a ZIP code. `Ok(None)` means the service confirmed the code
    /// does not exist.
    fn lookup_zip(&self, code: &str) -> impl Future<Output = Result<Option<PlaceLookup>>> + Send;

    /// Resolve a city/state pair to up to [`MAX_PLACE_CANDIDATES`] matching
    /// places, most relevant first. `Ok(empty)` means a confirmed miss.
    ///
    /// [`MAX_PLACE_CANDIDATES`]: crate::MAX_PLACE_CANDIDATES
    fn lookup_city_state(
        &self,
        city: &str,
        state_code: &str,
    ) -> impl Future<Output = Result<Vec<PlaceLookup>>> + Send;
}
