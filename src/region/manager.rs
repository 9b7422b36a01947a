use std::collections::BTreeSet;
use std::fmt;

use crate::region::{
    error::{RegionError, invalid_request},
    store::{BoxStore, LinearScanStore},
    subtract::{classify, subtract_cones},
    types::{BoxId, Hyperbox, QueryRegion, Vector},
};

/// The part of the ideal-nadir hyperrectangle not yet known to be
/// dominated by, or dominating, any revealed solution; maintained as an
/// exact disjoint union of axis-aligned boxes.
///
/// Invariants held across every mutating operation:
/// - live boxes are pairwise interior-disjoint;
/// - live boxes plus the dominance cones of every added point cover the
///   original hyperrectangle exactly;
/// - `hypervolume` is maintained incrementally and equals the sum of
///   live box volumes;
/// - `creation_count` never decreases and counts every box ever
///   inserted, including the initial one.
pub struct PotentialRegion {
    store: Box<dyn BoxStore>,
    dimensions: usize,
    hypervolume: f64,
    creation_count: u64,
}

impl fmt::Debug for PotentialRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PotentialRegion")
            .field("dimensions", &self.dimensions)
            .field("hypervolume", &self.hypervolume)
            .field("box_count", &self.store.len())
            .field("creation_count", &self.creation_count)
            .finish_non_exhaustive()
    }
}

impl PotentialRegion {
    pub fn new(ideal: &[f64], nadir: &[f64]) -> Result<Self, RegionError> {
        Self::with_store(ideal, nadir, Box::new(LinearScanStore::new()))
    }

    pub fn with_store(
        ideal: &[f64],
        nadir: &[f64],
        mut store: Box<dyn BoxStore>,
    ) -> Result<Self, RegionError> {
        if ideal.is_empty() {
            return Err(invalid_request("ideal point cannot be empty"));
        }
        if ideal.len() != nadir.len() {
            return Err(invalid_request(format!(
                "ideal has {} dimensions but nadir has {}",
                ideal.len(),
                nadir.len()
            )));
        }
        for (i, (lo, hi)) in ideal.iter().zip(nadir).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(invalid_request(format!(
                    "bounds must be finite in dimension {i}"
                )));
            }
            if lo > hi {
                return Err(invalid_request(format!(
                    "ideal exceeds nadir in dimension {i}: {lo} > {hi}"
                )));
            }
        }

        let initial = Hyperbox::new(1, ideal.to_vec(), nadir.to_vec());
        let hypervolume = initial.volume();
        store.insert(initial);
        Ok(Self {
            store,
            dimensions: ideal.len(),
            hypervolume,
            creation_count: 1,
        })
    }

    /// Subtracts both dominance cones of `point` from the region.
    /// Returns whether the box set changed. Finding no overlapping box
    /// is a recoverable condition reported through a warning: it only
    /// occurs once the region around the point is exhausted.
    pub fn add_point(&mut self, point: &[f64]) -> Result<bool, RegionError> {
        if point.len() != self.dimensions {
            return Err(invalid_request(format!(
                "point has {} dimensions, region has {}",
                point.len(),
                self.dimensions
            )));
        }

        let candidates = self.cone_candidates(point);
        if candidates.is_empty() {
            tracing::warn!(
                target: "region",
                boxes = self.store.len(),
                created = self.creation_count,
                "no boxes intersect the dominance cones of the point"
            );
            return Ok(false);
        }

        let mut changed = false;
        for hbox in candidates {
            let classified = classify(&hbox, point);
            if classified.is_inside_cone() {
                changed = true;
                self.remove_box(hbox.id);
                tracing::debug!(target: "region", id = hbox.id, "box absorbed by cone");
                continue;
            }
            if classified.is_mixed() {
                // Neither cone contains volume of this box; it stays
                // live and the remaining candidates are still examined.
                tracing::debug!(target: "region", id = hbox.id, "mixed box skipped");
                continue;
            }

            changed = true;
            self.remove_box(hbox.id);
            let survivors = subtract_cones(classified);
            let survivor_count = survivors.len();
            for (min, max) in survivors {
                self.create_box(min, max);
            }
            tracing::debug!(
                target: "region",
                id = hbox.id,
                survivors = survivor_count,
                "box split against dominance cones"
            );
        }
        Ok(changed)
    }

    /// Unconditionally deletes a box (cycle avoidance by the
    /// controller, independent of dominance). Returns whether the box
    /// was still live.
    pub fn remove_box(&mut self, id: BoxId) -> bool {
        match self.store.delete(id) {
            Some(removed) => {
                self.hypervolume -= removed.volume();
                true
            }
            None => false,
        }
    }

    pub fn boxes(&self) -> Vec<Hyperbox> {
        self.store.boxes()
    }

    pub fn hypervolume(&self) -> f64 {
        self.hypervolume
    }

    pub fn box_count(&self) -> usize {
        self.store.len()
    }

    pub fn creation_count(&self) -> u64 {
        self.creation_count
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn create_box(&mut self, min: Vector, max: Vector) {
        self.creation_count += 1;
        let hbox = Hyperbox::new(self.creation_count, min, max);
        self.hypervolume += hbox.volume();
        self.store.insert(hbox);
    }

    fn cone_candidates(&self, point: &[f64]) -> Vec<Hyperbox> {
        let mut seen = BTreeSet::new();
        let mut candidates = Vec::new();
        for query in [QueryRegion::above(point), QueryRegion::below(point)] {
            for hbox in self.store.query_overlap(&query) {
                if seen.insert(hbox.id) {
                    candidates.push(hbox);
                }
            }
        }
        candidates
    }
}
