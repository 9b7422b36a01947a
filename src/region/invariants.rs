use crate::region::{
    error::{RegionError, invariant_violation},
    manager::PotentialRegion,
    types::Hyperbox,
};

/// No two live boxes may share positive-volume overlap.
pub fn assert_pairwise_disjoint(region: &PotentialRegion) -> Result<(), RegionError> {
    let boxes = region.boxes();
    for (i, a) in boxes.iter().enumerate() {
        for b in &boxes[i + 1..] {
            if intersection_volume(a, b) > 0.0 {
                return Err(invariant_violation(format!(
                    "boxes {} and {} overlap with positive volume",
                    a.id, b.id
                )));
            }
        }
    }
    Ok(())
}

/// The incrementally maintained hypervolume must equal the sum of live
/// box volumes recomputed from scratch, within `tolerance`.
pub fn assert_hypervolume_consistent(
    region: &PotentialRegion,
    tolerance: f64,
) -> Result<(), RegionError> {
    let recomputed: f64 = region.boxes().iter().map(Hyperbox::volume).sum();
    let tracked = region.hypervolume();
    if (tracked - recomputed).abs() > tolerance {
        return Err(invariant_violation(format!(
            "tracked hypervolume {tracked} drifted from recomputed {recomputed}"
        )));
    }
    Ok(())
}

/// `box_count` must match the store and no live id may exceed the
/// creation counter.
pub fn assert_counters_consistent(region: &PotentialRegion) -> Result<(), RegionError> {
    let boxes = region.boxes();
    if boxes.len() != region.box_count() {
        return Err(invariant_violation(format!(
            "box_count {} disagrees with {} live boxes",
            region.box_count(),
            boxes.len()
        )));
    }
    if let Some(stray) = boxes.iter().find(|b| b.id > region.creation_count()) {
        return Err(invariant_violation(format!(
            "box {} exceeds creation count {}",
            stray.id,
            region.creation_count()
        )));
    }
    Ok(())
}

fn intersection_volume(a: &Hyperbox, b: &Hyperbox) -> f64 {
    a.min
        .iter()
        .zip(&a.max)
        .zip(b.min.iter().zip(&b.max))
        .map(|((a_lo, a_hi), (b_lo, b_hi))| (a_hi.min(*b_hi) - a_lo.max(*b_lo)).max(0.0))
        .product()
}
