use orthant::region::{PotentialRegion, RegionErrorKind};

use crate::find_by_bounds;

fn fresh_region() -> PotentialRegion {
    PotentialRegion::new(&[0.0, 0.0], &[10.0, 10.0]).expect("valid bounds")
}

#[test]
fn given_fresh_region_when_interior_point_added_then_two_orthants_remain() {
    let mut region = fresh_region();
    assert_eq!(region.hypervolume(), 100.0);
    assert_eq!(region.box_count(), 1);
    assert_eq!(region.creation_count(), 1);

    let changed = region.add_point(&[4.0, 6.0]).expect("matching dimensions");
    assert!(changed);

    let boxes = region.boxes();
    assert_eq!(boxes.len(), 2);
    find_by_bounds(&boxes, &[0.0, 6.0], &[4.0, 10.0]);
    find_by_bounds(&boxes, &[4.0, 0.0], &[10.0, 6.0]);
    assert!((region.hypervolume() - 52.0).abs() < 1e-9);
    assert_eq!(region.creation_count(), 3);
}

#[test]
fn given_point_already_subtracted_when_added_again_then_nothing_changes() {
    let mut region = fresh_region();
    region.add_point(&[4.0, 6.0]).expect("first add");
    let before = region.boxes();
    let created = region.creation_count();

    let changed = region.add_point(&[4.0, 6.0]).expect("second add");

    assert!(!changed);
    assert_eq!(region.boxes(), before);
    assert_eq!(region.creation_count(), created);
}

#[test]
fn given_successive_points_when_added_then_hypervolume_never_increases() {
    let mut region = fresh_region();
    let points = [
        [4.0, 6.0],
        [2.0, 8.0],
        [7.0, 3.0],
        [4.0, 6.0],
        [1.0, 9.5],
    ];

    let mut previous = region.hypervolume();
    for point in points {
        region.add_point(&point).expect("matching dimensions");
        let current = region.hypervolume();
        assert!(
            current <= previous + 1e-9,
            "hypervolume grew from {previous} to {current} at {point:?}"
        );
        previous = current;
    }
}

#[test]
fn given_point_on_box_boundary_when_added_then_degenerate_survivors_are_kept() {
    let mut region = fresh_region();
    region.add_point(&[4.0, 6.0]).expect("first add");

    // (4, 8) touches the [0,4]x[6,10] orthant along its right edge.
    let changed = region.add_point(&[4.0, 8.0]).expect("second add");
    assert!(changed);

    let boxes = region.boxes();
    find_by_bounds(&boxes, &[0.0, 8.0], &[4.0, 10.0]);
    let degenerate = find_by_bounds(&boxes, &[4.0, 6.0], &[4.0, 8.0]);
    assert_eq!(degenerate.volume(), 0.0);
    assert!((region.hypervolume() - 44.0).abs() < 1e-9);
}

#[test]
fn given_empty_region_when_point_added_then_warning_path_returns_unchanged() {
    let mut region = fresh_region();
    assert!(region.remove_box(1));
    assert!(region.is_empty());

    let changed = region.add_point(&[4.0, 6.0]).expect("still recoverable");
    assert!(!changed);
    assert_eq!(region.box_count(), 0);
}

#[test]
fn given_retired_box_when_removed_again_then_removal_reports_false() {
    let mut region = fresh_region();
    assert!(region.remove_box(1));
    assert!(!region.remove_box(1));
    assert_eq!(region.hypervolume(), 0.0);
}

#[test]
fn given_mismatched_point_when_added_then_invalid_request() {
    let mut region = fresh_region();
    let err = region
        .add_point(&[1.0, 2.0, 3.0])
        .expect_err("three components against a planar region");
    assert_eq!(err.kind, RegionErrorKind::InvalidRequest);
}

#[test]
fn given_inverted_bounds_when_constructed_then_invalid_request() {
    let err = PotentialRegion::new(&[5.0, 0.0], &[4.0, 10.0]).expect_err("ideal above nadir");
    assert_eq!(err.kind, RegionErrorKind::InvalidRequest);

    let err = PotentialRegion::new(&[0.0], &[f64::INFINITY]).expect_err("non-finite nadir");
    assert_eq!(err.kind, RegionErrorKind::InvalidRequest);
}

#[test]
fn given_three_objectives_when_interior_point_added_then_six_orthants_remain() {
    let mut region = PotentialRegion::new(&[0.0; 3], &[8.0; 3]).expect("valid bounds");
    region.add_point(&[2.0, 4.0, 6.0]).expect("interior point");

    assert_eq!(region.box_count(), 6);
    let removed = 2.0 * 4.0 * 6.0 + 6.0 * 4.0 * 2.0;
    assert!((region.hypervolume() - (512.0 - removed)).abs() < 1e-9);
}
