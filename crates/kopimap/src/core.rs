//! The end-to-end pipeline: query and region in, annotation board updated.
//!
//! [`MapSearchPipeline`] is the single linear flow of the crate: it hands
//! the configured `(query, region)` pair to the [`SearchClient`], maps the
//! response to annotations, and applies the result to the
//! [`AnnotationBoard`] that display layers read from.

use std::time::Instant;

use tracing::{info, instrument};

use kopimap_provider::{SearchProvider, SearchRegion};

use crate::{
    board::AnnotationBoard,
    client::{SearchClient, SearchOutcome},
    config::MapSearchConfig,
    error::KopimapError,
};

/// Composes a search client, the annotation mapper, and the board.
///
/// Overlapping calls run independently and their results reach the board in
/// arrival order: the most recently *resolved* search determines what is
/// displayed, not the most recently issued one. In-flight searches cannot be
/// cancelled.
///
/// Cloning the pipeline shares the board, so concurrent callers observe one
/// display state.
///
/// # Examples
///
/// ```rust
/// use kopimap::{MapSearchPipeline, StaticProvider};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let pipeline = MapSearchPipeline::new(StaticProvider::lau_pa_sat_sample());
/// let outcome = pipeline.refresh().await;
///
/// assert_eq!(pipeline.board().len(), outcome.points().len());
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MapSearchPipeline<P> {
    client: SearchClient<P>,
    board: AnnotationBoard,
    config: MapSearchConfig,
}

impl<P: SearchProvider> MapSearchPipeline<P> {
    /// Create a pipeline with the default configuration
    /// (see [`MapSearchConfig::lau_pa_sat`]).
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, MapSearchConfig::default())
    }

    /// Create a pipeline with a custom configuration.
    #[must_use]
    pub fn with_config(provider: P, config: MapSearchConfig) -> Self {
        Self {
            client: SearchClient::new(provider),
            board: AnnotationBoard::new(),
            config,
        }
    }

    /// Start building a pipeline around the given provider.
    #[must_use]
    pub fn builder(provider: P) -> MapSearchPipelineBuilder<P> {
        MapSearchPipelineBuilder::new(provider)
    }

    /// The board holding the currently displayed annotations.
    #[must_use]
    pub fn board(&self) -> &AnnotationBoard {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &MapSearchConfig {
        &self.config
    }

    /// Run one search with the configured query and region, and apply the
    /// result to the board.
    ///
    /// On provider failure the board receives the empty set; the failure is
    /// logged at the client boundary and only visible in the returned
    /// [`SearchOutcome`].
    #[instrument(
        name = "Refresh annotations",
        level = "info",
        skip(self),
        fields(query = %self.config.query)
    )]
    pub async fn refresh(&self) -> SearchOutcome {
        self.run(&self.config.query, &self.config.region).await
    }

    /// Run one ad-hoc search (e.g. after the viewport moved) and apply the
    /// result to the board. The configured query and region are untouched.
    #[instrument(name = "Ad-hoc search", level = "info", skip(self, region))]
    pub async fn search(&self, query: &str, region: &SearchRegion) -> SearchOutcome {
        self.run(query, region).await
    }

    async fn run(&self, query: &str, region: &SearchRegion) -> SearchOutcome {
        let t_start = Instant::now();

        let outcome = self.client.search(query, region, self.config.limit).await;
        self.board.update(outcome.points().to_vec());

        info!(
            displayed = self.board.len(),
            unavailable = outcome.is_unavailable(),
            elapsed = ?t_start.elapsed(),
            "Annotation board updated"
        );
        outcome
    }
}

/// Builder for creating a [`MapSearchPipeline`] with custom configuration.
#[derive(Debug, Clone)]
pub struct MapSearchPipelineBuilder<P> {
    provider: P,
    config: MapSearchConfig,
}

impl<P: SearchProvider> MapSearchPipelineBuilder<P> {
    /// Create a new builder with the default configuration.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: MapSearchConfig::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: MapSearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the search query.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.config.query = query.into();
        self
    }

    /// Set the viewport.
    #[must_use]
    pub fn region(mut self, region: SearchRegion) -> Self {
        self.config.region = region;
        self
    }

    /// Set the provider-side result cap.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    /// Build the pipeline.
    ///
    /// Fails with a configuration error when the region contains non-finite
    /// center or span values, since no provider can bias towards such a
    /// viewport.
    pub fn build(self) -> Result<MapSearchPipeline<P>, KopimapError> {
        if !self.config.region.is_finite() {
            return Err(KopimapError::ConfigError(
                "search region must have finite center and span values".to_string(),
            ));
        }
        Ok(MapSearchPipeline::with_config(self.provider, self.config))
    }
}
