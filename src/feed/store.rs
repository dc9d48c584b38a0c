use std::sync::{Arc, RwLock};

use crate::elements::OrbitalElementRecord;

/// Process-lifetime cache for the most recent good element set. The set is
/// swapped wholesale under the lock, so a concurrent reader sees either
/// the fully-old or the fully-new catalog, never a partial one.
#[derive(Default)]
pub struct ElementStore {
    current: RwLock<Option<Arc<Vec<OrbitalElementRecord>>>>,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Arc<Vec<OrbitalElementRecord>>> {
        self.current.read().unwrap().clone()
    }

    pub fn replace(&self, records: Vec<OrbitalElementRecord>) -> Arc<Vec<OrbitalElementRecord>> {
        let set = Arc::new(records);
        *self.current.write().unwrap() = Some(set.clone());
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::parse_catalog;

    const ISS_TLE: &str = "\
ISS (ZARYA)
1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn starts_empty_and_replaces_wholesale() {
        let store = ElementStore::new();
        assert!(store.current().is_none());

        store.replace(parse_catalog(ISS_TLE));
        let held = store.current().unwrap();
        assert_eq!(held.len(), 1);

        store.replace(Vec::new());
        assert_eq!(store.current().unwrap().len(), 0);
        // The earlier reader still owns the set it saw.
        assert_eq!(held.len(), 1);
    }
}
