//! CoachBnB search core - location-aware coach discovery.
//!
//! This crate turns raw search parameters into a ranked, paginated list
//! of coaches. A location (ZIP code, "City, ST" text or raw coordinates)
//! is resolved to coordinates through a pluggable geocoding provider,
//! candidates are filtered by great-circle distance and attribute
//! filters, then sorted and paged.
//!
//! Geocoding failures never fail a search: an unresolvable location
//! degrades to an unfiltered search without distance annotations.
//!
//! # Quick Start
//!
//! ```rust
//! use coachbnb_search::{CoachSearcher, Resolution, SearchRequest};
//! use coachbnb_geocoding::ZippopotamClient;
//!
//! let searcher = CoachSearcher::new(ZippopotamClient::new()?);
//!
//! // Offline: rank an in-memory candidate set without geocoding.
//! let request = SearchRequest {
//!     specialties: vec!["Yoga".into()],
//!     sort_by: Some("price-low".into()),
//!     ..Default::default()
//! };
//! let outcome = searcher.search_resolved(Vec::new(), &request, &Resolution::Unresolved);
//! assert_eq!(outcome.total, 0);
//! # Ok::<(), coachbnb_search::error::SearchCoreError>(())
//! ```
//!
//! For live searches, `CoachSearcher::search` resolves the request's
//! location through the provider first; see [`CoachSearcher`].
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod core;
pub mod error;
mod geo;
mod model;
mod query;
mod repository;
mod resolve;
mod search;

pub use core::CoachSearcher;

pub use config::{SearchConfig, SearchConfigBuilder};
pub use geo::{EARTH_RADIUS_MILES, haversine_miles};
pub use model::{Candidate, GeoPoint, RankedResult, SearchOutcome, SessionMode};
pub use query::{LocationQuery, Page, SearchFilters, SearchPlan, SearchRequest, SortKey};
pub use repository::{CoachRepository, InMemoryCoaches};
pub use resolve::{Resolution, ResolvedLocation, resolve_query};
pub use search::run_search;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the search core.
///
/// Sets up structured logging with configurable levels and filtering.
/// Call this once at the start of your application; later calls are
/// no-ops.
///
/// ```rust
/// use coachbnb_search::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), coachbnb_search::error::SearchCoreError>(())
/// ```
pub fn init_logging(
    level: impl Into<LevelFilter>,
) -> Result<&'static (), error::SearchCoreError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("hyper_util=warn".parse()?)
            .add_directive("reqwest=warn".parse()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .init();
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        assert!(init_logging(tracing::Level::WARN).is_ok());
        assert!(init_logging(tracing::Level::DEBUG).is_ok());
    }
}
