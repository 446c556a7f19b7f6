//! Kopimap - Map Annotation Search Pipeline
//!
//! Kopimap takes a free-text place query and a map viewport, looks the query
//! up against a place-search provider, and turns the results into
//! display-ready [`PointOfInterest`] annotations on a shared
//! [`AnnotationBoard`] that a display layer reads from. It is the
//! search-to-annotation core of a map application, with the map rendering
//! itself left to the host.
//!
//! # Quick Start
//!
//! ```rust
//! use kopimap::{MapSearchPipeline, StaticProvider};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! // Search kopitiams around Lau Pa Sat with the built-in sample data.
//! let pipeline = MapSearchPipeline::new(StaticProvider::lau_pa_sat_sample());
//! let outcome = pipeline.refresh().await;
//!
//! for poi in outcome.points() {
//!     println!(
//!         "{} at ({}, {})",
//!         poi.name, poi.coordinate.latitude, poi.coordinate.longitude
//!     );
//! }
//! # });
//! ```
//!
//! Against the real Nominatim API (feature `nominatim`, on by default),
//! swap in [`NominatimProvider`] and keep everything else the same.
//!
//! # Behavior notes
//!
//! - A place without a usable provider name is labeled
//!   [`UNKNOWN_LOCATION`]; every annotation has a non-empty name.
//! - A provider failure is logged once and downgraded to the empty display
//!   set; [`SearchOutcome`] still records that it happened.
//! - Overlapping searches race: the board shows the last *response* to
//!   arrive, not the last request issued.
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod annotate;
mod board;
mod client;
mod config;
mod core;
pub mod error;

pub use annotate::{PoiId, PointOfInterest, UNKNOWN_LOCATION, annotate, label_for};
pub use board::AnnotationBoard;
pub use client::{SearchClient, SearchOutcome};
pub use config::{
    DEFAULT_LIMIT, DEFAULT_QUERY, DEFAULT_SPAN, LAU_PA_SAT, MapSearchConfig,
    MapSearchConfigBuilder,
};
pub use self::core::{MapSearchPipeline, MapSearchPipelineBuilder};

// Re-export the provider subcrate and its wire-adjacent types
pub use kopimap_provider as provider;
#[cfg(feature = "nominatim")]
pub use kopimap_provider::NominatimProvider;
pub use kopimap_provider::{
    Coordinate, ProviderError, RawPlace, RegionSpan, SearchProvider, SearchRegion, StaticProvider,
};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the kopimap library.
///
/// Sets up structured logging with configurable levels and filtering. Call
/// this once at the start of your application to see search and board
/// diagnostics, including the single warning emitted when a provider call
/// fails.
///
/// # Examples
///
/// ```rust
/// use kopimap::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), kopimap::error::KopimapError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::KopimapError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("hyper_util=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

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

    fn setup_test_env() {
        let _ = init_logging(tracing::Level::WARN);
    }

    #[tokio::test]
    async fn test_pipeline_creation_and_refresh() {
        setup_test_env();

        let pipeline = MapSearchPipeline::new(StaticProvider::lau_pa_sat_sample());
        let outcome = pipeline.refresh().await;

        assert!(!outcome.is_unavailable());
        assert!(!pipeline.board().is_empty());
    }

    #[test]
    fn test_default_configuration() {
        setup_test_env();

        let config = MapSearchConfig::default();
        assert_eq!(config.query, DEFAULT_QUERY);
        assert_eq!(config.region.center, LAU_PA_SAT);
    }

    #[test]
    fn test_provider_errors_convert_to_the_top_level_error() {
        let err: error::KopimapError = ProviderError::Unavailable("down".into()).into();
        assert!(matches!(err, error::KopimapError::Provider(_)));
        assert!(err.to_string().contains("down"));
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        setup_test_env();
        setup_test_env();

        assert!(init_logging(tracing::Level::INFO).is_ok());
    }
}
