//! The search half of the pipeline: one provider call, one outcome.

use tracing::{debug, instrument, warn};

use kopimap_provider::{SearchProvider, SearchRegion};

use crate::annotate::{PointOfInterest, annotate};

/// Outcome of a single search invocation.
///
/// A provider failure is caught at this boundary, logged once as a
/// diagnostic, and downgraded to an empty display set; it is never
/// propagated as an error. The enum still records which of the two happened
/// so integrators can tell "query matched nothing" from "search failed"
/// when they care, while [`points`](Self::points) gives the plain display
/// contract (empty either way).
#[derive(Debug)]
pub enum SearchOutcome {
    /// The provider responded; zero or more annotations were produced.
    Results(Vec<PointOfInterest>),
    /// The provider reported an error or returned no response. Details have
    /// already been logged.
    Unavailable,
}

impl SearchOutcome {
    /// The annotations to display: empty when the search was unavailable.
    #[must_use]
    pub fn points(&self) -> &[PointOfInterest] {
        match self {
            Self::Results(points) => points,
            Self::Unavailable => &[],
        }
    }

    /// Consume the outcome, keeping the displayable annotations.
    #[must_use]
    pub fn into_points(self) -> Vec<PointOfInterest> {
        match self {
            Self::Results(points) => points,
            Self::Unavailable => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Wraps a [`SearchProvider`] and turns raw results into annotations.
///
/// Each [`search`](Self::search) call issues exactly one provider lookup:
/// no retry, no debouncing, no cancellation. Overlapping calls run
/// independently; whoever consumes the outcomes decides what "current"
/// means (see [`AnnotationBoard`](crate::AnnotationBoard)).
#[derive(Debug, Clone)]
pub struct SearchClient<P> {
    provider: P,
}

impl<P: SearchProvider> SearchClient<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Run one search and map the results to annotations.
    #[instrument(name = "Place search", level = "debug", skip(self, region))]
    pub async fn search(
        &self,
        query: &str,
        region: &SearchRegion,
        limit: usize,
    ) -> SearchOutcome {
        match self.provider.search(query, region, limit).await {
            Ok(places) => {
                debug!(results = places.len(), "Search resolved");
                SearchOutcome::Results(annotate(&places))
            }
            Err(error) => {
                // The single diagnostic for a failed search; callers only
                // ever observe the Unavailable outcome.
                warn!(%error, query, "Place search unavailable");
                SearchOutcome::Unavailable
            }
        }
    }

    /// Access the wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use kopimap_provider::{
        Coordinate, ProviderError, RawPlace, RegionSpan, Result as ProviderResult, StaticProvider,
    };

    struct FailingProvider;

    #[async_trait]
    impl SearchProvider for FailingProvider {
        async fn search(
            &self,
            _query: &str,
            _region: &SearchRegion,
            _limit: usize,
        ) -> ProviderResult<Vec<RawPlace>> {
            Err(ProviderError::Unavailable("connection reset".into()))
        }
    }

    fn region() -> SearchRegion {
        SearchRegion::new(
            Coordinate::new(1.280716, 103.850442),
            RegionSpan::new(0.008, 0.008),
        )
    }

    #[tokio::test]
    async fn test_results_are_mapped_in_order() {
        let client = SearchClient::new(StaticProvider::lau_pa_sat_sample());
        let outcome = client.search("KopiTiam", &region(), 10).await;

        let points = outcome.points();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].name, "Lau Pa Sat");
        // The unnamed entry got the fallback label, not a hole.
        assert_eq!(points[3].name, crate::UNKNOWN_LOCATION);
    }

    #[tokio::test]
    async fn test_empty_response_is_results_not_unavailable() {
        let client = SearchClient::new(StaticProvider::default());
        let outcome = client.search("KopiTiam", &region(), 10).await;

        assert!(!outcome.is_unavailable());
        assert!(outcome.points().is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_downgrades_to_empty() {
        let client = SearchClient::new(FailingProvider);
        let outcome = client.search("KopiTiam", &region(), 10).await;

        assert!(outcome.is_unavailable());
        assert!(outcome.points().is_empty());
        assert!(outcome.into_points().is_empty());
    }

    #[tokio::test]
    async fn test_limit_is_forwarded_to_the_provider() {
        let client = SearchClient::new(StaticProvider::lau_pa_sat_sample());
        let outcome = client.search("KopiTiam", &region(), 2).await;
        assert_eq!(outcome.points().len(), 2);
    }
}
