use std::sync::{Arc, RwLock};

use crate::cluster::pyramid::LodPyramid;
use crate::cluster::types::PointRecord;

struct Inner {
    points: Arc<Vec<PointRecord>>,
    pyramid: Option<Arc<LodPyramid>>,
}

/// Session-lifetime cache for one overlay dataset: the raw points plus the
/// lazily built LOD pyramid. Lifecycle is build-once, explicit reload,
/// query; a reload swaps the whole state, so concurrent readers see either
/// the old dataset or the new one, never a mix.
pub struct OverlayStore {
    inner: RwLock<Inner>,
}

impl OverlayStore {
    pub fn new(points: Vec<PointRecord>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                points: Arc::new(points),
                pyramid: None,
            }),
        }
    }

    pub fn points(&self) -> Arc<Vec<PointRecord>> {
        self.inner.read().unwrap().points.clone()
    }

    /// The pyramid for the current dataset, building it on first access.
    /// Two racing first readers may both build; the loser's result is
    /// dropped, which is harmless because the fold is deterministic.
    pub fn pyramid(&self) -> Arc<LodPyramid> {
        if let Some(pyramid) = &self.inner.read().unwrap().pyramid {
            return pyramid.clone();
        }

        let points = self.points();
        let built = Arc::new(LodPyramid::build(&points));
        log::debug!(
            "built lod pyramid: {} coarse / {} medium / {} fine cells",
            built.coarse.len(),
            built.medium.len(),
            built.fine.len()
        );

        let mut inner = self.inner.write().unwrap();
        if !Arc::ptr_eq(&inner.points, &points) {
            // Dataset was reloaded while we were building; serve the set
            // we built against and let the next query rebuild.
            return built;
        }
        if let Some(existing) = &inner.pyramid {
            return existing.clone();
        }
        inner.pyramid = Some(built.clone());
        built
    }

    /// Replace the dataset wholesale and drop the cached pyramid.
    pub fn reload(&self, points: Vec<PointRecord>) {
        let mut inner = self.inner.write().unwrap();
        inner.points = Arc::new(points);
        inner.pyramid = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(n: usize) -> Vec<PointRecord> {
        (0..n)
            .map(|i| PointRecord::new(i as f64 * 0.1, i as f64 * 0.2))
            .collect()
    }

    #[test]
    fn pyramid_builds_lazily_and_is_cached() {
        let store = OverlayStore::new(points(50));
        let first = store.pyramid();
        let second = store.pyramid();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn reload_replaces_dataset_and_invalidates_pyramid() {
        let store = OverlayStore::new(points(50));
        let before = store.pyramid();

        store.reload(points(10));
        assert_eq!(store.points().len(), 10);

        let after = store.pyramid();
        assert!(!Arc::ptr_eq(&before, &after));
        let total: usize = after.fine.iter().map(|c| c.member_count).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn independent_stores_do_not_share_state() {
        let a = OverlayStore::new(points(5));
        let b = OverlayStore::new(points(7));
        assert_eq!(a.points().len(), 5);
        assert_eq!(b.points().len(), 7);
    }
}
