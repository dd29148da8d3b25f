//! The [`CoachSearcher`] facade: one entry point tying resolution,
//! filtering, ranking and pagination together.

use tracing::instrument;

use coachbnb_geocoding::GeocodingProvider;

use crate::{
    config::SearchConfig,
    error::Result,
    model::{Candidate, SearchOutcome},
    query::{LocationQuery, SearchPlan, SearchRequest},
    repository::CoachRepository,
    resolve::{Resolution, resolve_query},
    search::run_search,
};

/// High-level search engine over a geocoding provider.
///
/// ```no_run
/// use coachbnb_geocoding::ZippopotamClient;
/// use coachbnb_search::{CoachSearcher, SearchRequest};
///
/// # async fn example(coaches: Vec<coachbnb_search::Candidate>) -> anyhow::Result<()> {
/// let searcher = CoachSearcher::new(ZippopotamClient::new()?);
/// let request = SearchRequest {
///     zip_code: Some("78701".into()),
///     radius: Some(50.0),
///     sort_by: Some("distance".into()),
///     ..Default::default()
/// };
/// let outcome = searcher.search(coaches, &request).await;
/// println!("{} matches", outcome.total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CoachSearcher<P> {
    provider: P,
    config: SearchConfig,
}

impl<P: GeocodingProvider> CoachSearcher<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(provider: P, config: SearchConfig) -> Self {
        Self { provider, config }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Resolve a location query with the configured default radius.
    pub async fn resolve(&self, query: &LocationQuery) -> Resolution {
        resolve_query(&self.provider, query, self.config.default_radius_miles).await
    }

    /// Place suggestions for a location autocomplete box, capped at the
    /// configured candidate limit. Unlike [`Self::search`], a provider
    /// failure surfaces here; the caller decides how to render it.
    pub async fn suggest_places(
        &self,
        city: &str,
        state_code: &str,
    ) -> Result<Vec<coachbnb_geocoding::PlaceLookup>> {
        let mut places = self.provider.lookup_city_state(city, state_code).await?;
        places.truncate(self.config.place_candidate_limit);
        Ok(places)
    }

    /// Run a full search over an owned candidate set.
    #[instrument(skip(self, candidates, request), fields(candidates = candidates.len()))]
    pub async fn search(&self, candidates: Vec<Candidate>, request: &SearchRequest) -> SearchOutcome {
        let plan = request.normalize(&self.config);
        let resolution =
            resolve_query(&self.provider, &plan.location, plan.radius_miles).await;
        Self::run_plan(candidates, &plan, &resolution)
    }

    /// Run the ranking pipeline against an already-resolved location,
    /// skipping the geocoding round-trip. Offline callers and tests use
    /// this directly.
    #[must_use]
    pub fn search_resolved(
        &self,
        candidates: Vec<Candidate>,
        request: &SearchRequest,
        resolution: &Resolution,
    ) -> SearchOutcome {
        let plan = request.normalize(&self.config);
        Self::run_plan(candidates, &plan, resolution)
    }

    /// Fetch candidates from a repository and search them.
    pub async fn search_from<R: CoachRepository>(
        &self,
        repository: &R,
        request: &SearchRequest,
    ) -> Result<SearchOutcome> {
        let candidates = repository.coaches()?;
        Ok(self.search(candidates, request).await)
    }

    fn run_plan(
        candidates: Vec<Candidate>,
        plan: &SearchPlan,
        resolution: &Resolution,
    ) -> SearchOutcome {
        run_search(candidates, &plan.filters, resolution, plan.sort, plan.page)
    }
}
