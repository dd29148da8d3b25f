//! Search configuration and its builder.
//!
//! One place for every default the search core applies: the 25-mile
//! default radius, the 10–200 mile slider bounds, pagination limits and
//! the city/state disambiguation cap. Historically different entry points
//! disagreed on the default radius (25 in one route, 100 in another);
//! this config is the single source of truth, and the 100-mile behavior
//! is available as the [`SearchConfigBuilder::nationwide`] preset for the
//! entry point that wants it.

use crate::error::SearchCoreError;

/// Tunable defaults for the search pipeline.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Radius applied when the caller resolves a location without picking one.
    pub default_radius_miles: f64,
    /// Lower bound of the radius slider exposed by the UI.
    pub min_radius_miles: f64,
    /// Upper bound of the radius slider exposed by the UI.
    pub max_radius_miles: f64,
    /// Page size when the caller does not pass `limit`.
    pub default_limit: usize,
    /// Hard cap on the page size a caller can request.
    pub max_limit: usize,
    /// How many city/state matches to consider before taking the first.
    pub place_candidate_limit: usize,
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// Clamp a slider-style radius into the configured bounds. Explicit
    /// radii passed straight to the pipeline are not clamped; this helper
    /// exists for callers surfacing the 10–200 mile slider.
    #[must_use]
    pub fn clamped_radius(&self, radius_miles: f64) -> f64 {
        radius_miles.clamp(self.min_radius_miles, self.max_radius_miles)
    }

    /// A radius is usable if it is a finite non-negative number; anything
    /// else falls back to the default.
    #[must_use]
    pub fn sanitize_radius(&self, radius_miles: Option<f64>) -> f64 {
        match radius_miles {
            Some(r) if r.is_finite() && r >= 0.0 => r,
            _ => self.default_radius_miles,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_miles: 25.0,
            min_radius_miles: 10.0,
            max_radius_miles: 200.0,
            default_limit: 20,
            max_limit: 100,
            place_candidate_limit: coachbnb_geocoding::MAX_PLACE_CANDIDATES,
        }
    }
}

/// Builder for creating search configurations with ergonomic defaults.
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Create a new builder with sensible defaults.
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Preset for the wide-net entry point: 100-mile default radius.
    pub fn nationwide() -> Self {
        let mut builder = Self::new();
        builder.config.default_radius_miles = 100.0;
        builder
    }

    /// Set the radius used when the caller does not pick one.
    pub fn default_radius(mut self, miles: f64) -> Self {
        self.config.default_radius_miles = miles.max(0.0);
        self
    }

    /// Set the slider bounds for clamped radii.
    pub fn radius_bounds(mut self, min: f64, max: f64) -> Result<Self, SearchCoreError> {
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || min > max {
            return Err(SearchCoreError::ConfigError(format!(
                "Radius bounds must satisfy 0 <= min <= max, got {min}..{max}"
            )));
        }
        self.config.min_radius_miles = min;
        self.config.max_radius_miles = max;
        Ok(self)
    }

    /// Set the default page size (minimum 1).
    pub fn default_limit(mut self, limit: usize) -> Self {
        self.config.default_limit = limit.max(1);
        self
    }

    /// Set the maximum page size a caller may request (minimum 1).
    pub fn max_limit(mut self, limit: usize) -> Self {
        self.config.max_limit = limit.max(1);
        self
    }

    /// Set how many city/state candidates to consider, capped at the
    /// provider-side maximum.
    pub fn place_candidate_limit(mut self, limit: usize) -> Self {
        self.config.place_candidate_limit =
            limit.clamp(1, coachbnb_geocoding::MAX_PLACE_CANDIDATES);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> SearchConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder() {
        let config = SearchConfigBuilder::new().build();
        assert_eq!(config.default_radius_miles, 25.0);
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.max_limit, 100);
    }

    #[test]
    fn test_nationwide_preset() {
        let config = SearchConfigBuilder::nationwide().build();
        assert_eq!(config.default_radius_miles, 100.0);
        // Everything else keeps the standard defaults.
        assert_eq!(config.default_limit, 20);
    }

    #[test]
    fn test_method_chaining_and_overrides() {
        let config = SearchConfigBuilder::nationwide()
            .default_radius(50.0)
            .default_limit(12)
            .max_limit(48)
            .build();

        assert_eq!(config.default_radius_miles, 50.0);
        assert_eq!(config.default_limit, 12);
        assert_eq!(config.max_limit, 48);
    }

    #[test]
    fn test_radius_bounds_validation() {
        assert!(SearchConfigBuilder::new().radius_bounds(10.0, 200.0).is_ok());
        assert!(SearchConfigBuilder::new().radius_bounds(50.0, 10.0).is_err());
        assert!(SearchConfigBuilder::new().radius_bounds(-5.0, 10.0).is_err());
        assert!(
            SearchConfigBuilder::new()
                .radius_bounds(f64::NAN, 10.0)
                .is_err()
        );
    }

    #[test]
    fn test_clamped_radius() {
        let config = SearchConfig::default();
        assert_eq!(config.clamped_radius(5.0), 10.0);
        assert_eq!(config.clamped_radius(100.0), 100.0);
        assert_eq!(config.clamped_radius(500.0), 200.0);
    }

    #[test]
    fn test_sanitize_radius_falls_back_to_default() {
        let config = SearchConfig::default();
        assert_eq!(config.sanitize_radius(Some(50.0)), 50.0);
        assert_eq!(config.sanitize_radius(Some(0.0)), 0.0);
        assert_eq!(config.sanitize_radius(Some(-3.0)), 25.0);
        assert_eq!(config.sanitize_radius(Some(f64::NAN)), 25.0);
        assert_eq!(config.sanitize_radius(None), 25.0);
    }

    #[test]
    fn test_place_candidate_limit_is_capped() {
        let config = SearchConfigBuilder::new().place_candidate_limit(50).build();
        assert_eq!(
            config.place_candidate_limit,
            coachbnb_geocoding::MAX_PLACE_CANDIDATES
        );
        let config = SearchConfigBuilder::new().place_candidate_limit(0).build();
        assert_eq!(config.place_candidate_limit, 1);
    }

    #[test]
    fn test_limits_never_drop_below_one() {
        let config = SearchConfigBuilder::new()
            .default_limit(0)
            .max_limit(0)
            .build();
        assert_eq!(config.default_limit, 1);
        assert_eq!(config.max_limit, 1);
    }
}
