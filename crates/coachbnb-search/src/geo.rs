//! Great-circle distance and radius filtering.
//!
//! The radius filter is a deliberate O(n) scan: the candidate set is a
//! bounded coach list (tens to low hundreds of records), so a spatial
//! index would buy nothing. Keep it linear.

use crate::model::{Candidate, GeoPoint, RankedResult};

/// Mean Earth radius in miles, matching the value the distance contract
/// was written against.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance between two points in miles, via the haversine
/// formula.
///
/// ```
/// use coachbnb_search::{GeoPoint, haversine_miles};
///
/// let nyc = GeoPoint::new(40.7128, -74.0060).unwrap();
/// let la = GeoPoint::new(34.0522, -118.2437).unwrap();
/// let miles = haversine_miles(nyc, la);
/// assert!((miles - 2451.0).abs() / 2451.0 < 0.01);
/// ```
#[must_use]
pub fn haversine_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Round a distance to one decimal place for display.
#[must_use]
pub fn round_to_tenth(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}

/// Keep candidates within `radius_miles` of `center`, annotated with their
/// distance rounded to one decimal.
///
/// Candidates on the boundary are included (`<=`). Candidates without
/// coordinates are dropped: no point, no distance. A radius of zero keeps
/// only coincident points.
#[must_use]
pub fn filter_by_radius(
    candidates: Vec<Candidate>,
    center: GeoPoint,
    radius_miles: f64,
) -> Vec<RankedResult> {
    candidates
        .into_iter()
        .filter_map(|coach| {
            let location = coach.location?;
            let distance = haversine_miles(center, location);
            (distance <= radius_miles).then(|| RankedResult {
                coach,
                distance_miles: Some(round_to_tenth(distance)),
            })
        })
        .collect()
}
