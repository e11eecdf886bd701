use approx::assert_relative_eq;

use rootscan_core::{
    from_fn,
    reference::{Cubic, NEGATIVE_ROOT, POSITIVE_ROOT, ZERO_ROOT},
};

use super::{ScanConfig, ScanError, find_all_roots, find_all_roots_in_domain};
use crate::bisection::{BracketError, Config, Status};

fn config(step: f64) -> ScanConfig {
    ScanConfig::new(step, 1e-6, Config::new(100, 1e-9, 1e-9).unwrap()).unwrap()
}

#[test]
fn finds_all_three_cubic_roots() {
    let roots = find_all_roots(&Cubic, [-3.0, 4.0], &config(0.1)).expect("should scan");

    assert_eq!(roots.len(), 3);
    assert!(roots.all_converged());
    assert!(roots.skipped().is_empty());

    let values: Vec<f64> = roots.values().collect();
    assert_relative_eq!(values[0], NEGATIVE_ROOT, epsilon = 1e-8);
    assert_relative_eq!(values[1], ZERO_ROOT, epsilon = 1e-8);
    assert_relative_eq!(values[2], POSITIVE_ROOT, epsilon = 1e-8);

    for root in &roots {
        assert!(root.residual.abs() < 1e-6);
        assert!(root.interval.width() <= 0.1 + 1e-12);
    }
}

#[test]
fn roots_are_sorted_ascending() {
    let roots = find_all_roots(&Cubic, [4.0, -3.0], &config(0.25)).expect("should scan");

    let values: Vec<f64> = roots.values().collect();
    assert_eq!(values.len(), 3);
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn grid_point_roots_are_reported_once() {
    // Zeros at 0 and 1 fall exactly on the grid, so each is detected by the
    // sub-intervals on both sides.
    let f = from_fn(|x| x * (x - 1.0));

    let roots = find_all_roots(&f, [-1.0, 2.0], &config(0.5)).expect("should scan");

    let values: Vec<f64> = roots.values().collect();
    assert_eq!(values, [0.0, 1.0]);
    assert!(roots.iter().all(|root| root.status == Status::ExactRoot));
    assert_eq!(roots.as_slice()[0].interval.as_array(), [-0.5, 0.0]);
}

#[test]
fn zeros_at_both_ends_of_a_sub_interval_are_kept() {
    // Every grid point is a root: [0, 0.5] and [0.5, 1] each have zeros at
    // both ends, and the last one ends on the domain's upper bound.
    let f = from_fn(|x| x * (x - 0.5) * (x - 1.0));

    let roots = find_all_roots(&f, [0.0, 1.0], &config(0.5)).expect("should scan");

    let values: Vec<f64> = roots.values().collect();
    assert_eq!(values, [0.0, 0.5, 1.0]);
    assert!(roots.iter().all(|root| root.status == Status::ExactRoot));
}

#[test]
fn zeros_at_both_ends_mid_domain_are_kept() {
    let f = from_fn(|x| x * (x - 0.5) * (x - 1.0));

    let roots = find_all_roots(&f, [-0.5, 1.5], &config(0.5)).expect("should scan");

    let values: Vec<f64> = roots.values().collect();
    assert_eq!(values, [0.0, 0.5, 1.0]);
}

#[test]
fn single_sub_interval_reports_both_endpoint_zeros() {
    let f = from_fn(|x| x * x - 1.0);

    let roots = find_all_roots(&f, [-1.0, 1.0], &config(2.0)).expect("should scan");

    let values: Vec<f64> = roots.values().collect();
    assert_eq!(values, [-1.0, 1.0]);
}

#[test]
fn endpoint_zero_hides_interior_sign_change() {
    let f = from_fn(|x| x * (x - 0.05));

    let roots = find_all_roots(&f, [0.0, 1.0], &config(0.1)).expect("should scan");

    let values: Vec<f64> = roots.values().collect();
    assert_eq!(values, [0.0]);
}

#[test]
fn coarse_step_misses_close_roots() {
    let f = from_fn(|x| (x - 0.1) * (x - 0.2));

    let coarse = find_all_roots(&f, [0.0, 1.0], &config(0.5)).expect("should scan");
    assert!(coarse.is_empty());

    let fine = find_all_roots(&f, [0.0, 1.0], &config(0.03)).expect("should scan");
    assert_eq!(fine.len(), 2);
}

#[test]
fn tangent_root_is_not_found() {
    let square = from_fn(|x| x * x);

    let roots = find_all_roots(&square, [-1.0, 1.0], &config(0.3)).expect("should scan");
    assert!(roots.is_empty());
}

#[test]
fn pole_on_grid_is_skipped() {
    let reciprocal = from_fn(|x| 1.0 / x);

    let roots = find_all_roots(&reciprocal, [-1.0, 1.0], &config(0.5)).expect("should scan");

    assert!(roots.is_empty());
    assert_eq!(roots.skipped().len(), 2);
    assert_eq!(roots.skipped()[0].interval.as_array(), [-0.5, 0.0]);
    assert_eq!(roots.skipped()[1].interval.as_array(), [0.0, 0.5]);
}

#[test]
fn last_sub_interval_is_clipped() {
    let f = from_fn(|x| x - 0.95);

    let roots = find_all_roots(&f, [0.0, 1.0], &config(0.3)).expect("should scan");

    assert_eq!(roots.len(), 1);
    let root = &roots.as_slice()[0];
    assert_relative_eq!(root.value, 0.95, epsilon = 1e-8);
    assert_eq!(root.interval.high(), 1.0);
}

#[test]
fn scans_function_default_domain() {
    let roots = find_all_roots_in_domain(&Cubic, &config(0.1)).expect("should scan");
    assert_eq!(roots.len(), 3);
}

#[test]
fn missing_default_domain_is_an_error() {
    let f = from_fn(|x| x - 1.0);
    assert_eq!(
        find_all_roots_in_domain(&f, &config(0.1)),
        Err(ScanError::NoDomain)
    );
}

#[test]
fn degenerate_domain_is_an_error() {
    assert_eq!(
        find_all_roots(&Cubic, [1.0, 1.0], &config(0.1)),
        Err(ScanError::InvalidDomain(BracketError::ZeroWidth))
    );
    assert_eq!(
        find_all_roots(&Cubic, [f64::NAN, 1.0], &config(0.1)),
        Err(ScanError::InvalidDomain(BracketError::NonFinite))
    );
}

#[test]
fn tiny_step_is_rejected() {
    let result = find_all_roots(&Cubic, [0.0, 1.0], &config(1e-300));
    assert!(matches!(result, Err(ScanError::TooManySteps { .. })));
}
