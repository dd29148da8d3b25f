//! Search-facing data model: geographic points, coach records and ranked
//! search results.
//!
//! Everything here is constructed per-request and discarded with the
//! response; the core never mutates a candidate. Serde attributes keep the
//! wire shape byte-compatible with the JSON the HTTP layer already serves
//! (`pricePerHour`, `ratingAvg`, the legacy `virtualOnly` boolean, an
//! optional one-decimal `distance` on ranked results).

use chrono::{DateTime, Utc};

/// A point on the globe in decimal degrees.
///
/// Latitude is constrained to `[-90, 90]`, longitude to `[-180, 180]`;
/// [`GeoPoint::new`] rejects anything outside those ranges.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point, returning `None` for out-of-range or non-finite
    /// coordinates.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude)
        {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }
}

/// How a coach delivers sessions.
///
/// This is an exclusive partition: a coach either only trains remotely or
/// offers in-person sessions (possibly alongside virtual ones). On the wire
/// it remains the legacy `virtualOnly` boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    VirtualOnly,
    InPersonAndVirtual,
}

impl SessionMode {
    #[must_use]
    pub fn from_virtual_only(virtual_only: bool) -> Self {
        if virtual_only {
            Self::VirtualOnly
        } else {
            Self::InPersonAndVirtual
        }
    }

    #[must_use]
    pub fn is_virtual_only(self) -> bool {
        matches!(self, Self::VirtualOnly)
    }
}

impl serde::Serialize for SessionMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_virtual_only())
    }
}

impl<'de> serde::Deserialize<'de> for SessionMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Self::from_virtual_only)
    }
}

/// A coach record as seen by the search core.
///
/// Read-only input: the caller provides a fresh candidate list per request
/// (typically straight from storage) and the pipeline only filters, sorts
/// and annotates. Virtual-only coaches may legitimately lack a `location`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub slug: String,
    pub headline: String,
    pub city: String,
    #[serde(flatten)]
    pub location: Option<GeoPoint>,
    pub specialties: Vec<String>,
    pub price_per_hour: u32,
    #[serde(rename = "virtualOnly")]
    pub session_mode: SessionMode,
    #[serde(rename = "ratingAvg")]
    pub rating_average: Option<f64>,
    pub rating_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Candidate {
    /// AND semantics: true iff every requested specialty is present.
    /// An empty request list matches everything.
    #[must_use]
    pub fn has_all_specialties<S: AsRef<str>>(&self, wanted: &[S]) -> bool {
        wanted
            .iter()
            .all(|s| self.specialties.iter().any(|have| have == s.as_ref()))
    }

    /// Rating with missing values treated as zero, the ordering the sort
    /// keys use.
    #[must_use]
    pub fn rating_or_zero(&self) -> f64 {
        self.rating_average.unwrap_or(0.0)
    }
}

/// A candidate annotated with its distance from the search center.
///
/// `distance_miles` is present only when a location was resolved for the
/// request, rounded to one decimal, and serialized as `distance`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub coach: Candidate,
    #[serde(
        rename = "distance",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub distance_miles: Option<f64>,
}

impl RankedResult {
    /// Wrap a candidate with no distance annotation (location-agnostic
    /// search).
    #[must_use]
    pub fn unranked(coach: Candidate) -> Self {
        Self {
            coach,
            distance_miles: None,
        }
    }
}

/// The page of results plus the pre-pagination total.
///
/// `total` always counts every candidate that survived filtering, so
/// callers can drive "load more" UIs regardless of page size.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchOutcome {
    pub coaches: Vec<RankedResult>,
    pub total: usize,
}
