//! Typed search input: location queries, filters, sort keys and paging.
//!
//! The HTTP layer parses its query string into a [`SearchRequest`] once,
//! then [`SearchRequest::normalize`] turns it into a [`SearchPlan`] of
//! fully validated types. Nothing downstream ever inspects a loose
//! string-keyed map, and malformed numeric input is clamped here rather
//! than rejected: this sits behind a public search box, so garbage query
//! strings are expected input, not exceptional.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    config::SearchConfig,
    model::{GeoPoint, SessionMode},
};

/// Plausible US postal code shape: 3 to 5 digits (short prefixes are
/// accepted for prefix-style lookups).
static ZIP_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,5}$").expect("valid regex"));

pub(crate) fn is_zip_shape(code: &str) -> bool {
    ZIP_SHAPE.is_match(code)
}

/// Where to center the search, if anywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// A postal code to resolve through the geocoding provider.
    Zip(String),
    /// A city/state pair to resolve through the geocoding provider.
    Place { city: String, state_code: String },
    /// Already-resolved coordinates plus the search radius.
    Point { point: GeoPoint, radius_miles: f64 },
    /// No location constraint: every candidate passes the geo filter.
    None,
}

impl LocationQuery {
    /// Interpret free text from the location box: a digit run becomes a
    /// ZIP query, `"City, ST"` (or a full state name) becomes a place
    /// query, anything else means no location constraint.
    #[must_use]
    pub fn from_free_text(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::None;
        }
        if is_zip_shape(trimmed) {
            return Self::Zip(trimmed.to_string());
        }
        if let Some((city, state)) = trimmed.split_once(',') {
            let city = city.trim();
            if let (false, Some(state_code)) = (
                city.is_empty(),
                coachbnb_geocoding::normalize_state_code(state),
            ) {
                return Self::Place {
                    city: city.to_string(),
                    state_code: state_code.to_string(),
                };
            }
        }
        Self::None
    }
}

/// Attribute filters applied after any radius filtering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// AND semantics: a candidate must carry every listed specialty.
    /// Empty means no specialty constraint.
    pub specialties: Vec<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    /// `Some(VirtualOnly)` keeps only remote coaches, `Some(InPersonAndVirtual)`
    /// keeps only coaches offering in-person sessions, `None` keeps both.
    pub session_mode: Option<SessionMode>,
}

impl SearchFilters {
    #[must_use]
    pub fn matches(&self, coach: &crate::model::Candidate) -> bool {
        if !coach.has_all_specialties(&self.specialties) {
            return false;
        }
        if self.min_price.is_some_and(|min| coach.price_per_hour < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| coach.price_per_hour > max) {
            return false;
        }
        self.session_mode
            .is_none_or(|mode| coach.session_mode == mode)
    }
}

/// Result ordering. Wire values follow the existing API strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Rating descending, rating count as tie-break.
    #[default]
    Recommended,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    Newest,
    /// Nearest first; only meaningful when a location resolved, otherwise
    /// the pipeline silently falls back to [`SortKey::Recommended`].
    DistanceAsc,
}

impl SortKey {
    /// Parse a `sortBy` query parameter. Unknown or absent values mean
    /// the recommended ordering, never an error.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("price-low") => Self::PriceAsc,
            Some("price-high") => Self::PriceDesc,
            Some("rating") => Self::RatingDesc,
            Some("newest") => Self::Newest,
            Some("distance") => Self::DistanceAsc,
            _ => Self::Recommended,
        }
    }

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::PriceAsc => "price-low",
            Self::PriceDesc => "price-high",
            Self::RatingDesc => "rating",
            Self::Newest => "newest",
            Self::DistanceAsc => "distance",
        }
    }
}

/// An offset/limit page, clamped at construction so malformed paging can
/// never panic a slice or zero out a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: usize,
    offset: usize,
}

impl Page {
    /// Clamp raw paging input: `limit` to at least 1, `offset` to at
    /// least 0.
    #[must_use]
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: usize::try_from(limit.max(1)).unwrap_or(1),
            offset: usize::try_from(offset.max(0)).unwrap_or(0),
        }
    }

    #[must_use]
    pub fn limit(self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn offset(self) -> usize {
        self.offset
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// The raw search parameters as the HTTP layer hands them over, one field
/// per query parameter.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    pub zip_code: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius: Option<f64>,
    /// Free text from the location box ("78701" or "Austin, TX").
    pub location: Option<String>,
    pub specialties: Vec<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub virtual_only: Option<bool>,
    pub sort_by: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// A fully validated search: what [`SearchRequest::normalize`] produces
/// and the pipeline consumes.
#[derive(Debug, Clone)]
pub struct SearchPlan {
    pub location: LocationQuery,
    /// Radius to apply once the location resolves (already baked into a
    /// `Point` query's own radius).
    pub radius_miles: f64,
    pub filters: SearchFilters,
    pub sort: SortKey,
    pub page: Page,
}

impl SearchRequest {
    /// Turn raw parameters into a validated [`SearchPlan`].
    ///
    /// Explicit coordinates win over a ZIP code, which wins over free
    /// text. Out-of-range coordinates, negative radii and bad paging all
    /// clamp to defaults rather than erroring.
    #[must_use]
    pub fn normalize(&self, config: &SearchConfig) -> SearchPlan {
        let radius_miles = config.sanitize_radius(self.radius);

        let location = if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            GeoPoint::new(lat, lng).map_or(LocationQuery::None, |point| LocationQuery::Point {
                point,
                radius_miles,
            })
        } else if let Some(zip) = self.zip_code.as_deref().map(str::trim).filter(|z| !z.is_empty())
        {
            LocationQuery::Zip(zip.to_string())
        } else if let Some(text) = self.location.as_deref() {
            LocationQuery::from_free_text(text)
        } else {
            LocationQuery::None
        };

        let specialties = self
            .specialties
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unique()
            .map(str::to_string)
            .collect();

        let filters = SearchFilters {
            specialties,
            min_price: self.min_price,
            max_price: self.max_price,
            session_mode: self.virtual_only.map(SessionMode::from_virtual_only),
        };

        let limit = self
            .limit
            .unwrap_or(config.default_limit as i64)
            .min(config.max_limit as i64);
        let page = Page::new(limit, self.offset.unwrap_or(0));

        SearchPlan {
            location,
            radius_miles,
            filters,
            sort: SortKey::from_param(self.sort_by.as_deref()),
            page,
        }
    }
}
