use std::collections::BTreeMap;

use crate::region::types::{BoxId, Hyperbox, QueryRegion};

/// Spatial index over disjoint axis-aligned boxes. The contract is
/// correctness of overlap reporting, not a particular structure; the
/// iteration order of `boxes` and `query_overlap` is an implementation
/// detail that callers must not rely on beyond stability within one
/// store instance.
pub trait BoxStore {
    fn insert(&mut self, hbox: Hyperbox);
    fn delete(&mut self, id: BoxId) -> Option<Hyperbox>;
    fn get(&self, id: BoxId) -> Option<&Hyperbox>;
    fn query_overlap(&self, query: &QueryRegion) -> Vec<Hyperbox>;
    fn boxes(&self) -> Vec<Hyperbox>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Brute-force store over a `BTreeMap`, sufficient for the box counts
/// an ADM run accumulates. Encounter order is ascending id, which makes
/// downstream tie-breaks reproducible.
#[derive(Debug, Clone, Default)]
pub struct LinearScanStore {
    live: BTreeMap<BoxId, Hyperbox>,
}

impl LinearScanStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoxStore for LinearScanStore {
    fn insert(&mut self, hbox: Hyperbox) {
        self.live.insert(hbox.id, hbox);
    }

    fn delete(&mut self, id: BoxId) -> Option<Hyperbox> {
        self.live.remove(&id)
    }

    fn get(&self, id: BoxId) -> Option<&Hyperbox> {
        self.live.get(&id)
    }

    fn query_overlap(&self, query: &QueryRegion) -> Vec<Hyperbox> {
        self.live
            .values()
            .filter(|hbox| query.overlaps(hbox))
            .cloned()
            .collect()
    }

    fn boxes(&self) -> Vec<Hyperbox> {
        self.live.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.live.len()
    }
}
