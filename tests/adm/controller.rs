use orthant::adm::{Adm, AdmError, AdmErrorKind, PreferenceInfo, SolverPort, UtilityFunction};
use orthant::region::Vector;

use crate::{ConstantUtility, planar_adm, planar_config};

#[test]
fn given_no_solutions_and_no_retire_when_accepted_then_strict_noop() {
    let mut adm = planar_adm();
    let outcome = adm.accept(&[], &[]).expect("no-op");

    assert!(!outcome.changed);
    assert!(outcome.new_solutions.is_empty());
    assert_eq!(adm.pool_size(), 0);
    assert_eq!(adm.hypervolume(), 100.0);
    assert_eq!(adm.potential_boxes().len(), 1);
}

#[test]
fn given_known_vector_when_accepted_again_then_pool_and_region_unchanged() {
    let mut adm = planar_adm();
    let first = adm.accept_one(vec![4.0, 6.0]).expect("fresh vector");
    assert!(first.changed);
    assert_eq!(first.new_solutions.len(), 1);
    assert_eq!(adm.pool_size(), 1);

    let boxes = adm.potential_boxes();
    let second = adm.accept_one(vec![4.0, 6.0]).expect("duplicate vector");
    assert!(!second.changed);
    assert!(second.new_solutions.is_empty());
    assert_eq!(adm.pool_size(), 1);
    assert_eq!(adm.potential_boxes(), boxes);
}

#[test]
fn given_duplicates_within_one_batch_when_accepted_then_only_one_enters_the_pool() {
    let mut adm = planar_adm();
    let outcome = adm
        .accept(&[vec![4.0, 6.0], vec![4.0, 6.0], vec![2.0, 8.0]], &[])
        .expect("batch");

    assert_eq!(outcome.new_solutions.len(), 2);
    assert_eq!(adm.pool_size(), 2);
}

#[test]
fn given_retire_without_solutions_when_accepted_then_boxes_are_still_deleted() {
    let mut adm = planar_adm();
    let chosen = adm.best_box().expect("initial box");

    let outcome = adm.accept(&[], &[chosen.id]).expect("retire only");
    assert!(outcome.changed);
    assert!(outcome.new_solutions.is_empty());
    assert_eq!(adm.hypervolume(), 0.0);

    // Retiring an id that is no longer live does not flip `changed`.
    let outcome = adm.accept(&[], &[chosen.id]).expect("stale retire");
    assert!(!outcome.changed);
}

#[test]
fn given_equal_scores_when_best_box_queried_repeatedly_then_same_id_wins() {
    let mut adm = Adm::new(planar_config(), Box::new(ConstantUtility)).expect("valid config");
    adm.accept_one(vec![4.0, 6.0]).expect("split the region");

    let first = adm.best_box().expect("boxes remain");
    let second = adm.best_box().expect("boxes remain");
    assert_eq!(first.id, second.id);

    let lowest_live = adm
        .potential_boxes()
        .iter()
        .map(|b| b.id)
        .min()
        .expect("boxes remain");
    assert_eq!(first.id, lowest_live);
}

#[test]
fn given_all_boxes_retired_when_best_box_queried_then_domain_exhausted() {
    let mut adm = planar_adm();
    adm.accept_one(vec![4.0, 6.0]).expect("split the region");
    let ids: Vec<_> = adm.potential_boxes().iter().map(|b| b.id).collect();
    adm.accept(&[], &ids).expect("retire everything");

    let err = adm.best_box().expect_err("nothing left to propose");
    assert_eq!(err.kind, AdmErrorKind::DomainExhausted);

    let err = adm
        .next_iteration(&[], &[])
        .expect_err("iteration cannot choose a box either");
    assert_eq!(err.kind, AdmErrorKind::DomainExhausted);
}

#[test]
fn given_higher_utility_box_when_best_box_queried_then_it_wins() {
    let mut adm = planar_adm();
    adm.accept_one(vec![4.0, 6.0]).expect("split the region");

    // Utility is the normalized first objective, so the box whose
    // representative point has the smaller first component wins.
    let best = adm.best_box().expect("boxes remain");
    assert_eq!(best.min, vec![0.0, 6.0]);
    assert_eq!(best.max, vec![4.0, 10.0]);
}

#[test]
fn given_empty_pool_when_best_solution_queried_then_none() {
    let adm = planar_adm();
    assert_eq!(adm.best_solution().expect("no utility failure"), None);
}

#[test]
fn given_pooled_vectors_when_best_solution_queried_then_utility_maximizer_returned() {
    let mut adm = planar_adm();
    adm.accept(&[vec![4.0, 6.0], vec![2.0, 8.0]], &[])
        .expect("two fresh vectors");

    let (vector, utility) = adm
        .best_solution()
        .expect("no utility failure")
        .expect("pool not empty");
    assert_eq!(vector, vec![2.0, 8.0]);
    assert!((utility - 0.8).abs() < 1e-12);
}

struct FailingUtility;

impl UtilityFunction for FailingUtility {
    fn evaluate(&self, _y: &[f64], _ideal: &[f64], _nadir: &[f64]) -> Result<f64, AdmError> {
        Err(AdmError::new(
            AdmErrorKind::UtilityComputation,
            "synthetic failure",
        ))
    }
}

#[test]
fn given_failing_utility_when_iterating_then_error_surfaces() {
    let mut adm = Adm::new(planar_config(), Box::new(FailingUtility)).expect("valid config");

    let err = adm
        .next_iteration(&[vec![4.0, 6.0]], &[])
        .expect_err("utility failure must not be swallowed");
    assert_eq!(err.kind, AdmErrorKind::UtilityComputation);
}

struct EchoSolver {
    responses: Vec<Vec<Option<Vector>>>,
    seen_preferences: Vec<PreferenceInfo>,
}

impl SolverPort for EchoSolver {
    fn solve(
        &mut self,
        preference: &PreferenceInfo,
        _weights: &[f64],
        _current_best: Option<&[f64]>,
        _iteration_budget: u32,
    ) -> Vec<Option<Vector>> {
        self.seen_preferences.push(preference.clone());
        if self.responses.is_empty() {
            Vec::new()
        } else {
            self.responses.remove(0)
        }
    }
}

#[test]
fn given_solver_rounds_when_driven_then_solutions_flow_back_into_the_region() {
    let mut adm = planar_adm();
    let mut solver = EchoSolver {
        responses: vec![
            vec![Some(vec![4.0, 6.0]), None, Some(vec![4.0, 6.0])],
            vec![Some(vec![2.0, 8.0])],
        ],
        seen_preferences: Vec::new(),
    };

    let round_one = adm
        .run_round(&mut solver, &[1.0, 1.0], 5, &[], &[])
        .expect("first exchange");
    assert_eq!(round_one.solutions, vec![vec![4.0, 6.0]]);
    assert_eq!(adm.pool_size(), 0);

    let retire = [round_one.iteration.chosen_box.id];
    let round_two = adm
        .run_round(&mut solver, &[1.0, 1.0], 5, &round_one.solutions, &retire)
        .expect("second exchange");
    assert!(round_two.iteration.changed);
    assert_eq!(round_two.solutions, vec![vec![2.0, 8.0]]);
    assert_eq!(adm.pool_size(), 1);
    assert_eq!(adm.iteration(), 3);
    assert_eq!(solver.seen_preferences.len(), 2);
}
