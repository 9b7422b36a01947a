use crate::region::{Hyperbox, Vector};

/// Convex combination `c * min + (1 - c) * max` of a box's corners.
/// Objectives are minimized, so `c` near 1 biases toward the optimistic
/// corner `min`.
pub fn representative_point(hbox: &Hyperbox, coefficient_of_optimism: f64) -> Vector {
    let c = coefficient_of_optimism;
    hbox.min
        .iter()
        .zip(&hbox.max)
        .map(|(lo, hi)| c * lo + (1.0 - c) * hi)
        .collect()
}
