use serde::{Deserialize, Serialize};

use crate::region::Coordinate;

/// An unstructured place record as returned by a search provider.
///
/// This is the raw shape handed to the annotation layer: an optional name
/// (providers frequently omit or blank it) and a coordinate taken verbatim
/// from the provider response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPlace {
    pub name: Option<String>,
    pub coordinate: Coordinate,
}

impl RawPlace {
    #[must_use]
    pub fn new(name: Option<impl Into<String>>, coordinate: Coordinate) -> Self {
        Self {
            name: name.map(Into::into),
            coordinate,
        }
    }

    /// A place with a known name.
    #[must_use]
    pub fn named(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self::new(Some(name), coordinate)
    }

    /// A place the provider returned without a usable name.
    #[must_use]
    pub fn unnamed(coordinate: Coordinate) -> Self {
        Self {
            name: None,
            coordinate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let coordinate = Coordinate::new(1.2807, 103.8505);

        let named = RawPlace::named("Ya Kun Kaya Toast", coordinate);
        assert_eq!(named.name.as_deref(), Some("Ya Kun Kaya Toast"));
        assert_eq!(named.coordinate, coordinate);

        let unnamed = RawPlace::unnamed(coordinate);
        assert_eq!(unnamed.name, None);
        assert_eq!(unnamed.coordinate, coordinate);
    }
}
