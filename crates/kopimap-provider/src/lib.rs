//! Place-search providers for the kopimap annotation pipeline.
//!
//! A provider answers a single question: given a free-text query and a map
//! viewport, which places match? Every provider implements [`SearchProvider`]
//! and returns [`RawPlace`] records, the unnormalized shape the annotation
//! layer in the `kopimap` crate turns into display-ready records.
//!
//! Two providers ship with the crate:
//! - [`NominatimProvider`] (feature `nominatim`, on by default) issues one
//!   HTTP request per search against the OSM Nominatim search API, using the
//!   viewport to bias relevance.
//! - [`StaticProvider`] serves a fixed in-memory list, for tests and demos.

use async_trait::async_trait;

pub mod memory;
#[cfg(feature = "nominatim")]
pub mod nominatim;
pub mod place;
pub mod region;

pub use memory::StaticProvider;
#[cfg(feature = "nominatim")]
pub use nominatim::NominatimProvider;
pub use place::RawPlace;
pub use region::{Coordinate, RegionSpan, SearchRegion};

mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum ProviderError {
        #[cfg(feature = "nominatim")]
        #[error("HTTP error: {0}")]
        Http(#[from] reqwest::Error),
        #[error("Failed to decode provider response: {0}")]
        Decode(#[from] serde_json::Error),
        #[error("Provider returned an unparseable {field} value: {source}")]
        InvalidCoordinate {
            field: &'static str,
            source: std::num::ParseFloatError,
        },
        #[error("Search region contains non-finite center or span values")]
        InvalidRegion,
        #[error("Provider unavailable: {0}")]
        Unavailable(String),
    }

    pub type Result<T> = std::result::Result<T, ProviderError>;
}

pub use error::{ProviderError, Result};

/// A place-search backend.
///
/// One call to [`search`](Self::search) performs one lookup: no retries, no
/// caching, no pagination. The region is a relevance hint and the limit is a
/// cap on the number of results; both are interpreted by the provider.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Look up places matching `query`, biased towards `region`, returning
    /// at most `limit` results.
    async fn search(
        &self,
        query: &str,
        region: &SearchRegion,
        limit: usize,
    ) -> Result<Vec<RawPlace>>;
}

#[async_trait]
impl<P: SearchProvider + ?Sized> SearchProvider for std::sync::Arc<P> {
    async fn search(
        &self,
        query: &str,
        region: &SearchRegion,
        limit: usize,
    ) -> Result<Vec<RawPlace>> {
        (**self).search(query, region, limit).await
    }
}
