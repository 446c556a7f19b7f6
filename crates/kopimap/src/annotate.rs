//! Conversion of raw provider places into display-ready annotations.
//!
//! This is the second half of the pipeline: a pure, total, order-preserving
//! mapping. Every raw place produces exactly one [`PointOfInterest`]; nothing
//! is filtered, deduplicated, or truncated here.

use std::fmt;

use uuid::Uuid;

use kopimap_provider::{Coordinate, RawPlace};

/// Label given to a place whose provider record carries no usable name.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Opaque identifier of a [`PointOfInterest`].
///
/// Generated fresh at creation time and never derived from provider data,
/// so two records are never identical even when their name and coordinate
/// are: the id is what a display layer keys its markers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoiId(Uuid);

impl PoiId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A normalized, display-ready place record.
///
/// Records are created fresh on every search invocation and replaced
/// wholesale when the next search resolves; nothing merges or persists them.
#[derive(Debug, Clone)]
pub struct PointOfInterest {
    pub id: PoiId,
    /// Human-readable label, guaranteed non-empty (see [`label_for`]).
    pub name: String,
    pub coordinate: Coordinate,
}

impl PointOfInterest {
    /// Build one annotation from one raw provider place.
    ///
    /// The coordinate is copied verbatim; the name falls back to
    /// [`UNKNOWN_LOCATION`] when the provider supplied none.
    #[must_use]
    pub fn from_place(place: &RawPlace) -> Self {
        Self {
            id: PoiId::new(),
            name: label_for(place.name.as_deref()).to_string(),
            coordinate: place.coordinate,
        }
    }
}

/// Resolve the display label for an optional provider name.
///
/// Total function: a present, non-empty name is returned exactly as given;
/// an absent or empty name yields [`UNKNOWN_LOCATION`]. No other
/// normalization (trimming, casing) is applied.
#[must_use]
pub fn label_for(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => UNKNOWN_LOCATION,
    }
}

/// Convert raw provider places into display-ready annotations.
///
/// Pure and infallible: the output has the same length and order as the
/// input, one [`PointOfInterest`] per [`RawPlace`], with fresh ids.
#[must_use]
pub fn annotate(places: &[RawPlace]) -> Vec<PointOfInterest> {
    places.iter().map(PointOfInterest::from_place).collect()
}
