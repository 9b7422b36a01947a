use serde::{Deserialize, Serialize};

/// Objective vector in `R^k`.
pub type Vector = Vec<f64>;

/// Creation sequence number of a box. Ids are strictly increasing and
/// never reused; two live boxes may share identical bounds (zero-volume
/// boxes are legal) but never an id.
pub type BoxId = u64;

/// Axis-aligned box `[min, max]` in objective space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperbox {
    pub id: BoxId,
    pub min: Vector,
    pub max: Vector,
}

impl Hyperbox {
    pub fn new(id: BoxId, min: Vector, max: Vector) -> Self {
        Self { id, min, max }
    }

    pub fn dimensions(&self) -> usize {
        self.min.len()
    }

    pub fn volume(&self) -> f64 {
        self.min
            .iter()
            .zip(&self.max)
            .map(|(lo, hi)| hi - lo)
            .product()
    }
}

/// Axis-aligned query region; `f64::INFINITY` / `f64::NEG_INFINITY`
/// bounds express the unbounded half-space queries used for the two
/// dominance cones of a point.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRegion {
    pub lower: Vector,
    pub upper: Vector,
}

impl QueryRegion {
    /// The cone `[v, +inf)^k` of points dominated by `v` (minimization).
    pub fn above(v: &[f64]) -> Self {
        Self {
            lower: v.to_vec(),
            upper: vec![f64::INFINITY; v.len()],
        }
    }

    /// The cone `(-inf, v]^k` of points dominating `v`.
    pub fn below(v: &[f64]) -> Self {
        Self {
            lower: vec![f64::NEG_INFINITY; v.len()],
            upper: v.to_vec(),
        }
    }

    /// Positive-extent overlap test. Zero-extent boundary contact is
    /// deliberately not an overlap: a box only touching a cone along a
    /// face carries no volume inside it and must not be reprocessed.
    pub fn overlaps(&self, hbox: &Hyperbox) -> bool {
        self.lower
            .iter()
            .zip(&self.upper)
            .zip(hbox.min.iter().zip(&hbox.max))
            .all(|((q_lo, q_hi), (b_lo, b_hi))| q_lo < b_hi && b_lo < q_hi)
    }
}
