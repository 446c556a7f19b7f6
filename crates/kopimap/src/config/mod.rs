use kopimap_provider::{Coordinate, RegionSpan, SearchRegion};

/// Query used by the default configuration. Kopitiam means a cafe or
/// coffee/tea shop in Singapore, see <https://en.wikipedia.org/wiki/Kopi_tiam>.
pub const DEFAULT_QUERY: &str = "KopiTiam";

/// Lau Pa Sat, in the center of Singapore. Worth a visit.
pub const LAU_PA_SAT: Coordinate = Coordinate::new(1.280716, 103.850442);

/// Span of a few city blocks, matching a zoomed-in map viewport.
pub const DEFAULT_SPAN: RegionSpan = RegionSpan::new(0.008, 0.008);

/// Default cap on provider results per search.
pub const DEFAULT_LIMIT: usize = 10;

/// The fixed configuration pair driving a search: what to look for and
/// which viewport to bias results towards, plus a provider-side result cap.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSearchConfig {
    /// Free-text query sent to the provider. Not validated or normalized.
    pub query: String,
    /// Viewport used to bias search relevance.
    pub region: SearchRegion,
    /// Maximum number of provider results per search. The annotation layer
    /// itself never truncates; this is the only cap.
    pub limit: usize,
}

impl MapSearchConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> MapSearchConfigBuilder {
        MapSearchConfigBuilder::new()
    }

    /// The original demo configuration: kopitiams around Lau Pa Sat.
    #[must_use]
    pub fn lau_pa_sat() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            region: SearchRegion::new(LAU_PA_SAT, DEFAULT_SPAN),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Default for MapSearchConfig {
    fn default() -> Self {
        Self::lau_pa_sat()
    }
}

/// Builder for creating search configurations with ergonomic defaults.
#[derive(Debug, Clone, Default)]
pub struct MapSearchConfigBuilder {
    config: MapSearchConfig,
}

impl MapSearchConfigBuilder {
    /// Create a new builder seeded with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: MapSearchConfig::default(),
        }
    }

    /// Create a builder for a tight viewport with few results, suited to a
    /// fully zoomed-in map.
    #[must_use]
    pub fn nearby() -> Self {
        let mut builder = Self::new();
        builder.config.region.span = RegionSpan::new(0.004, 0.004);
        builder.config.limit = 5;
        builder
    }

    /// Create a builder covering a whole city with a generous result cap.
    #[must_use]
    pub fn citywide() -> Self {
        let mut builder = Self::new();
        builder.config.region.span = RegionSpan::new(0.08, 0.08);
        builder.config.limit = 50;
        builder
    }

    /// Set the free-text search query.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.config.query = query.into();
        self
    }

    /// Set the viewport center.
    #[must_use]
    pub fn center(mut self, latitude: f64, longitude: f64) -> Self {
        self.config.region.center = Coordinate::new(latitude, longitude);
        self
    }

    /// Set the viewport span in degrees.
    #[must_use]
    pub fn span(mut self, latitude_delta: f64, longitude_delta: f64) -> Self {
        self.config.region.span = RegionSpan::new(latitude_delta, longitude_delta);
        self
    }

    /// Set the whole region at once.
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

    /// Build the final configuration.
    #[must_use]
    pub fn build(self) -> MapSearchConfig {
        self.config
    }
}
