use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in floating-point degrees.
///
/// Coordinates are carried verbatim through the pipeline: no reprojection,
/// no clamping, and no range validation is performed on provider results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite numbers (not NaN or infinite).
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// The height and width of a [`SearchRegion`], in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionSpan {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl RegionSpan {
    #[must_use]
    pub const fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.latitude_delta.is_finite() && self.longitude_delta.is_finite()
    }
}

/// A geographic viewport used to bias search relevance.
///
/// The region describes the map area currently on screen: a center point and
/// a span covering the full width and height of the viewport. Providers use
/// it as a relevance hint, not as a hard filter; results outside the region
/// may still be returned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchRegion {
    pub center: Coordinate,
    pub span: RegionSpan,
}

impl SearchRegion {
    #[must_use]
    pub const fn new(center: Coordinate, span: RegionSpan) -> Self {
        Self { center, span }
    }

    /// Whether the center and span contain only finite values.
    ///
    /// Providers that derive a bounding box from the region require this to
    /// hold and reject the request otherwise.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.span.is_finite()
    }

    /// Northern edge of the viewport (highest latitude).
    #[must_use]
    pub fn north(&self) -> f64 {
        self.center.latitude + self.span.latitude_delta / 2.0
    }

    /// Southern edge of the viewport (lowest latitude).
    #[must_use]
    pub fn south(&self) -> f64 {
        self.center.latitude - self.span.latitude_delta / 2.0
    }

    /// Eastern edge of the viewport (highest longitude).
    #[must_use]
    pub fn east(&self) -> f64 {
        self.center.longitude + self.span.longitude_delta / 2.0
    }

    /// Western edge of the viewport (lowest longitude).
    #[must_use]
    pub fn west(&self) -> f64 {
        self.center.longitude - self.span.longitude_delta / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_edges() {
        let region = SearchRegion::new(
            Coordinate::new(1.280716, 103.850442),
            RegionSpan::new(0.008, 0.008),
        );

        assert!((region.north() - 1.284716).abs() < 1e-9);
        assert!((region.south() - 1.276716).abs() < 1e-9);
        assert!((region.east() - 103.854442).abs() < 1e-9);
        assert!((region.west() - 103.846442).abs() < 1e-9);
    }

    #[test]
    fn test_finite_checks() {
        let good = SearchRegion::new(Coordinate::new(1.28, 103.85), RegionSpan::new(0.01, 0.01));
        assert!(good.is_finite());

        let bad_center = SearchRegion::new(
            Coordinate::new(f64::NAN, 103.85),
            RegionSpan::new(0.01, 0.01),
        );
        assert!(!bad_center.is_finite());

        let bad_span = SearchRegion::new(
            Coordinate::new(1.28, 103.85),
            RegionSpan::new(f64::INFINITY, 0.01),
        );
        assert!(!bad_span.is_finite());
    }

    #[test]
    fn test_coordinate_is_copied_exactly() {
        let coordinate = Coordinate::new(-90.0, 181.5);
        // Out-of-range values are accepted as-is, nothing clamps them.
        assert_eq!(coordinate, Coordinate::new(-90.0, 181.5));
        assert!(coordinate.is_finite());
    }
}
