//! Location resolution: turn a [`LocationQuery`] into coordinates.
//!
//! Resolution degrades gracefully. A nonsense ZIP, an unknown city or a
//! provider outage never fails the search; it yields
//! [`Resolution::Unresolved`] and the caller runs an unfiltered,
//! unranked-by-distance search instead.

use tracing::{debug, instrument, warn};

use coachbnb_geocoding::{GeocodingProvider, PlaceLookup};

use crate::{
    model::GeoPoint,
    query::{LocationQuery, is_zip_shape},
};

/// A successfully resolved search center.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub point: GeoPoint,
    pub radius_miles: f64,
    /// Human-readable label ("Austin, TX 78701") when the provider
    /// supplied one; absent for raw coordinate queries.
    pub display_text: Option<String>,
}

/// Outcome of resolving a [`LocationQuery`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(ResolvedLocation),
    /// No coordinates available: the query carried no location, the
    /// provider confirmed a miss, or the provider failed.
    Unresolved,
}

impl Resolution {
    #[must_use]
    pub fn location(&self) -> Option<&ResolvedLocation> {
        match self {
            Self::Resolved(location) => Some(location),
            Self::Unresolved => None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

fn resolved_from_lookup(lookup: &PlaceLookup, radius_miles: f64) -> Option<ResolvedLocation> {
    let point = GeoPoint::new(lookup.latitude, lookup.longitude)?;
    Some(ResolvedLocation {
        point,
        radius_miles,
        display_text: Some(format!(
            "{}, {} {}",
            lookup.city, lookup.state_code, lookup.zip_code
        )),
    })
}

/// Resolve a location query against a geocoding provider.
///
/// `radius_miles` is attached to the resolved location for ZIP and place
/// queries; a `Point` query carries its own radius and ignores it.
#[instrument(skip(provider), level = "debug")]
pub async fn resolve_query<P: GeocodingProvider>(
    provider: &P,
    query: &LocationQuery,
    radius_miles: f64,
) -> Resolution {
    match query {
        LocationQuery::None => Resolution::Unresolved,
        LocationQuery::Point {
            point,
            radius_miles: own_radius,
        } => {
            // A hand-built point query may carry a garbage radius.
            let effective = if own_radius.is_finite() && *own_radius >= 0.0 {
                *own_radius
            } else {
                radius_miles
            };
            Resolution::Resolved(ResolvedLocation {
                point: *point,
                radius_miles: effective,
                display_text: None,
            })
        }
        LocationQuery::Zip(code) => {
            if !is_zip_shape(code) {
                debug!(code, "zip code has implausible shape, skipping lookup");
                return Resolution::Unresolved;
            }
            match provider.lookup_zip(code).await {
                Ok(Some(lookup)) => resolved_from_lookup(&lookup, radius_miles)
                    .map_or(Resolution::Unresolved, Resolution::Resolved),
                Ok(None) => {
                    debug!(code, "zip code not found");
                    Resolution::Unresolved
                }
                Err(error) => {
                    warn!(code, %error, "zip lookup failed, searching without location");
                    Resolution::Unresolved
                }
            }
        }
        LocationQuery::Place { city, state_code } => {
            match provider.lookup_city_state(city, state_code).await {
                Ok(lookups) => lookups
                    .first()
                    .and_then(|lookup| resolved_from_lookup(lookup, radius_miles))
                    .map_or_else(
                        || {
                            debug!(city, state_code, "place not found");
                            Resolution::Unresolved
                        },
                        Resolution::Resolved,
                    ),
                Err(error) => {
                    warn!(city, state_code, %error, "place lookup failed, searching without location");
                    Resolution::Unresolved
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coachbnb_geocoding::Result as GeocodingResult;

    struct FakeProvider {
        zip: Option<PlaceLookup>,
        places: Vec<PlaceLookup>,
        fail: bool,
    }

    impl FakeProvider {
        fn empty() -> Self {
            Self {
                zip: None,
                places: Vec::new(),
                fail: false,
            }
        }

        fn austin() -> Self {
            Self {
                zip: Some(austin_lookup()),
                places: vec![austin_lookup()],
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                zip: None,
                places: Vec::new(),
                fail: true,
            }
        }
    }

    fn austin_lookup() -> PlaceLookup {
        PlaceLookup {
            zip_code: "78701".into(),
            city: "Austin".into(),
            state: "Texas".into(),
            state_code: "TX".into(),
            latitude: 30.2672,
            longitude: -97.7431,
        }
    }

    impl GeocodingProvider for FakeProvider {
        async fn lookup_zip(&self, _code: &str) -> GeocodingResult<Option<PlaceLookup>> {
            if self.fail {
                return Err(coachbnb_geocoding::GeocodingError::InvalidResponse(
                    "boom".into(),
                ));
            }
            Ok(self.zip.clone())
        }

        async fn lookup_city_state(
            &self,
            _city: &str,
            _state_code: &str,
        ) -> GeocodingResult<Vec<PlaceLookup>> {
            if self.fail {
                return Err(coachbnb_geocoding::GeocodingError::InvalidResponse(
                    "boom".into(),
                ));
            }
            Ok(self.places.clone())
        }
    }

    #[tokio::test]
    async fn resolves_zip_with_display_text() {
        let provider = FakeProvider::austin();
        let resolution =
            resolve_query(&provider, &LocationQuery::Zip("78701".into()), 25.0).await;

        let location = resolution.location().expect("should resolve");
        assert_eq!(location.point.latitude, 30.2672);
        assert_eq!(location.radius_miles, 25.0);
        assert_eq!(location.display_text.as_deref(), Some("Austin, TX 78701"));
    }

    #[tokio::test]
    async fn resolves_place_from_first_candidate() {
        let provider = FakeProvider::austin();
        let query = LocationQuery::Place {
            city: "Austin".into(),
            state_code: "TX".into(),
        };
        let resolution = resolve_query(&provider, &query, 40.0).await;

        let location = resolution.location().expect("should resolve");
        assert_eq!(location.radius_miles, 40.0);
    }

    #[tokio::test]
    async fn malformed_zip_never_reaches_the_provider() {
        let provider = FakeProvider::failing();
        let resolution =
            resolve_query(&provider, &LocationQuery::Zip("not-a-zip".into()), 25.0).await;
        assert!(!resolution.is_resolved());
    }

    #[tokio::test]
    async fn confirmed_miss_is_unresolved() {
        let provider = FakeProvider::empty();
        let resolution =
            resolve_query(&provider, &LocationQuery::Zip("00000".into()), 25.0).await;
        assert_eq!(resolution, Resolution::Unresolved);
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_unresolved() {
        let provider = FakeProvider::failing();
        let resolution =
            resolve_query(&provider, &LocationQuery::Zip("78701".into()), 25.0).await;
        assert_eq!(resolution, Resolution::Unresolved);
    }

    #[tokio::test]
    async fn point_query_passes_through_with_its_own_radius() {
        let provider = FakeProvider::empty();
        let point = GeoPoint::new(30.0, -97.0).expect("valid point");
        let query = LocationQuery::Point {
            point,
            radius_miles: 75.0,
        };
        let resolution = resolve_query(&provider, &query, 25.0).await;

        let location = resolution.location().expect("should resolve");
        assert_eq!(location.point, point);
        assert_eq!(location.radius_miles, 75.0);
        assert_eq!(location.display_text, None);
    }

    #[tokio::test]
    async fn point_query_with_bad_radius_uses_the_fallback() {
        let provider = FakeProvider::empty();
        let query = LocationQuery::Point {
            point: GeoPoint::new(30.0, -97.0).expect("valid point"),
            radius_miles: -1.0,
        };
        let resolution = resolve_query(&provider, &query, 25.0).await;
        assert_eq!(
            resolution.location().expect("should resolve").radius_miles,
            25.0
        );
    }

    #[tokio::test]
    async fn resolution_is_idempotent() {
        let provider = FakeProvider::austin();
        let query = LocationQuery::Zip("78701".into());
        let first = resolve_query(&provider, &query, 25.0).await;
        let second = resolve_query(&provider, &query, 25.0).await;
        assert_eq!(first, second);
    }
}
