//! The current-result-set controller.

use tokio::sync::watch;
use tracing::debug;

use crate::annotate::PointOfInterest;

/// Owner of the "currently displayed" annotation set.
///
/// The pipeline is the sole writer; display layers read a snapshot with
/// [`current`](Self::current) or observe changes with
/// [`subscribe`](Self::subscribe). Updates replace the whole set and apply
/// in arrival order: when searches overlap, the last *response* wins, so a
/// stale response arriving after a newer one will overwrite it. The board
/// does not correct that race.
///
/// Cloning the board shares the underlying set.
#[derive(Debug, Clone)]
pub struct AnnotationBoard {
    tx: watch::Sender<Vec<PointOfInterest>>,
}

impl AnnotationBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx }
    }

    /// Replace the displayed set with `points`.
    pub fn update(&self, points: Vec<PointOfInterest>) {
        debug!(count = points.len(), "Updating annotation board");
        self.tx.send_replace(points);
    }

    /// Snapshot of the current set.
    #[must_use]
    pub fn current(&self) -> Vec<PointOfInterest> {
        self.tx.borrow().clone()
    }

    /// Observe board changes. The receiver always reflects the latest set.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<PointOfInterest>> {
        self.tx.subscribe()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }
}

impl Default for AnnotationBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::annotate;
    use kopimap_provider::{Coordinate, RawPlace};

    fn sample(names: &[&str]) -> Vec<PointOfInterest> {
        let places: Vec<_> = names
            .iter()
            .map(|n| RawPlace::named(*n, Coordinate::new(1.28, 103.85)))
            .collect();
        annotate(&places)
    }

    #[test]
    fn test_starts_empty() {
        let board = AnnotationBoard::new();
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
        assert!(board.current().is_empty());
    }

    #[test]
    fn test_update_replaces_the_whole_set() {
        let board = AnnotationBoard::new();

        board.update(sample(&["Lau Pa Sat", "Ya Kun Kaya Toast"]));
        assert_eq!(board.len(), 2);

        // A later (possibly stale) update overwrites, never merges.
        board.update(sample(&["Kopitiam Telok Ayer"]));
        let current = board.current();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].name, "Kopitiam Telok Ayer");

        board.update(Vec::new());
        assert!(board.is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let board = AnnotationBoard::new();
        let view = board.clone();

        board.update(sample(&["Lau Pa Sat"]));
        assert_eq!(view.len(), 1);
    }

    #[tokio::test]
    async fn test_subscribers_see_the_latest_set() {
        let board = AnnotationBoard::new();
        let mut rx = board.subscribe();

        board.update(sample(&["Lau Pa Sat"]));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().len(), 1);

        board.update(sample(&["A", "B", "C"]));
        rx.changed().await.unwrap();
        let names: Vec<_> = rx
            .borrow_and_update()
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
