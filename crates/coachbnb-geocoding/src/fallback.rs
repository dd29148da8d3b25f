use tracing::warn;

use crate::{GeocodingProvider, PlaceLookup, Result};

/// Chains a secondary provider behind a primary one.
///
/// The secondary is consulted only when the primary fails transiently
/// (`Err`). A confirmed miss from the primary — `Ok(None)` for a ZIP,
/// `Ok(empty)` for a city — is final: the code genuinely does not exist,
/// and asking another service would just burn a network call to learn
/// the same thing.
#[derive(Debug, Clone)]
pub struct FallbackProvider<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackProvider<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P, S> GeocodingProvider for FallbackProvider<P, S>
where
    P: GeocodingProvider,
    S: GeocodingProvider,
{
    async fn lookup_zip(&self, code: &str) -> Result<Option<PlaceLookup>> {
        match self.primary.lookup_zip(code).await {
            Ok(found) => Ok(found),
            Err(error) => {
                warn!(%error, code, "primary geocoding provider failed, trying secondary");
                self.secondary.lookup_zip(code).await
            }
        }
    }

    async fn lookup_city_state(&self, city: &str, state_code: &str) -> Result<Vec<PlaceLookup>> {
        match self.primary.lookup_city_state(city, state_code).await {
            Ok(found) => Ok(found),
            Err(error) => {
                warn!(%error, city, state_code, "primary geocoding provider failed, trying secondary");
                self.secondary.lookup_city_state(city, state_code).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::GeocodingError;

    struct Flaky {
        calls: AtomicUsize,
    }

    impl GeocodingProvider for Flaky {
        async fn lookup_zip(&self, _code: &str) -> Result<Option<PlaceLookup>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(GeocodingError::InvalidResponse("boom".into()))
        }

        async fn lookup_city_state(&self, _: &str, _: &str) -> Result<Vec<PlaceLookup>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(GeocodingError::InvalidResponse("boom".into()))
        }
    }

    struct ConfirmedMiss {
        calls: AtomicUsize,
    }

    impl GeocodingProvider for ConfirmedMiss {
        async fn lookup_zip(&self, _code: &str) -> Result<Option<PlaceLookup>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }

        async fn lookup_city_state(&self, _: &str, _: &str) -> Result<Vec<PlaceLookup>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    struct Fixture;

    impl GeocodingProvider for Fixture {
        async fn lookup_zip(&self, code: &str) -> Result<Option<PlaceLookup>> {
            Ok(Some(PlaceLookup {
                zip_code: code.to_string(),
                city: "Austin".into(),
                state: "Texas".into(),
                state_code: "TX".into(),
                latitude: 30.2672,
                longitude: -97.7431,
            }))
        }

        async fn lookup_city_state(&self, _: &str, _: &str) -> Result<Vec<PlaceLookup>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn falls_back_on_transient_failure() {
        let provider = FallbackProvider::new(
            Flaky {
                calls: AtomicUsize::new(0),
            },
            Fixture,
        );

        let found = provider.lookup_zip("78701").await.expect("should resolve");
        assert_eq!(found.expect("should find place").city, "Austin");
    }

    #[tokio::test]
    async fn confirmed_miss_does_not_fall_back() {
        let secondary = ConfirmedMiss {
            calls: AtomicUsize::new(0),
        };
        let provider = FallbackProvider::new(
            ConfirmedMiss {
                calls: AtomicUsize::new(0),
            },
            secondary,
        );

        let found = provider.lookup_zip("00000").await.expect("should succeed");
        assert!(found.is_none());
        assert_eq!(provider.secondary.calls.load(Ordering::SeqCst), 0);
    }
}
