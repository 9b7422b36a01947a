use crate::adm::preference::PreferenceInfo;
use crate::region::Vector;

/// External interactive optimization method. Given preference
/// information it returns newly found Pareto-optimal objective vectors;
/// entries may be `None` when an inner run fails to produce one.
pub trait SolverPort {
    fn solve(
        &mut self,
        preference: &PreferenceInfo,
        weights: &[f64],
        current_best: Option<&[f64]>,
        iteration_budget: u32,
    ) -> Vec<Option<Vector>>;
}

/// Drops `None` entries and deduplicates the remainder by exact vector
/// equality, preserving first-seen order.
pub fn filter_solver_output(raw: Vec<Option<Vector>>) -> Vec<Vector> {
    let mut out: Vec<Vector> = Vec::new();
    for candidate in raw.into_iter().flatten() {
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}
