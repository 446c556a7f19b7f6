//! A deterministic in-memory provider for tests and demos.

use async_trait::async_trait;
use tracing::debug;

use crate::{RawPlace, Result, SearchProvider, SearchRegion, region::Coordinate};

/// A [`SearchProvider`] that serves a fixed list of places.
///
/// The query and region are ignored; the configured places are returned in
/// order, truncated to the requested limit. Useful for exercising the
/// pipeline without a network dependency.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    places: Vec<RawPlace>,
}

impl StaticProvider {
    #[must_use]
    pub fn new(places: Vec<RawPlace>) -> Self {
        Self { places }
    }

    /// A small sample of kopitiams around Lau Pa Sat in central Singapore.
    #[must_use]
    pub fn lau_pa_sat_sample() -> Self {
        Self::new(vec![
            RawPlace::named("Lau Pa Sat", Coordinate::new(1.280716, 103.850442)),
            RawPlace::named("Ya Kun Kaya Toast", Coordinate::new(1.2807, 103.8505)),
            RawPlace::named("Kopitiam Telok Ayer", Coordinate::new(1.2793, 103.8481)),
            RawPlace::unnamed(Coordinate::new(1.2815, 103.8512)),
        ])
    }
}

#[async_trait]
impl SearchProvider for StaticProvider {
    async fn search(
        &self,
        query: &str,
        _region: &SearchRegion,
        limit: usize,
    ) -> Result<Vec<RawPlace>> {
        debug!(query, limit, "Serving static places");
        Ok(self.places.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionSpan;

    fn any_region() -> SearchRegion {
        SearchRegion::new(Coordinate::new(1.28, 103.85), RegionSpan::new(0.008, 0.008))
    }

    #[tokio::test]
    async fn test_returns_places_in_order() {
        let provider = StaticProvider::lau_pa_sat_sample();
        let places = provider.search("KopiTiam", &any_region(), 10).await.unwrap();

        assert_eq!(places.len(), 4);
        assert_eq!(places[0].name.as_deref(), Some("Lau Pa Sat"));
        assert_eq!(places[3].name, None);
    }

    #[tokio::test]
    async fn test_truncates_to_limit() {
        let provider = StaticProvider::lau_pa_sat_sample();
        let places = provider.search("KopiTiam", &any_region(), 2).await.unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[1].name.as_deref(), Some("Ya Kun Kaya Toast"));
    }

    #[tokio::test]
    async fn test_empty_provider_yields_empty_results() {
        let provider = StaticProvider::default();
        let places = provider.search("KopiTiam", &any_region(), 10).await.unwrap();
        assert!(places.is_empty());
    }
}
