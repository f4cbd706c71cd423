//! Integration tests: Legendre system
//!
//! Grid-cached evaluator correctness, cache monotonicity, the thread-safe
//! backend, coefficient computation, and out-of-range signaling.

use std::sync::Arc;
use std::thread;

use approx::assert_abs_diff_eq;

use fourierlab::basis::basissystem::{
    BasisSystem,
    BasisSystemType
};
use fourierlab::expansion::coefficientset::CoefficientSet;
use fourierlab::math::curve::sampledcurve::sample_function;
use fourierlab::math::legendre::legendreevaluator::{
    LegendreEvaluator,
    ThreadSafeLegendreEvaluator
};

const EPSILON: f64 = 1e-3;

fn p2(x: f64) -> f64 {
    (3.0 * x * x - 1.0) / 2.0
}

fn p3(x: f64) -> f64 {
    (5.0 * x * x * x - 3.0 * x) / 2.0
}

fn p_coef(coefs: &CoefficientSet, k: usize) -> f64 {
    coefs.family(0).coef(k)
}

// ============================================================================
// evaluator
// ============================================================================

#[test]
fn evaluator_matches_closed_forms() {
    let evaluator = LegendreEvaluator::new();
    for &x in &[-1.2, -0.7, 0.0, 0.33, 0.9, 1.4] {
        assert_abs_diff_eq!(evaluator.value(0, x), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(evaluator.value(1, x), x, epsilon = 1e-9);
        assert_abs_diff_eq!(evaluator.value(2, x), p2(x), epsilon = 1e-4);
        assert_abs_diff_eq!(evaluator.value(3, x), p3(x), epsilon = 1e-4);
    }
}

#[test]
fn evaluator_clamps_outside_grid_domain() {
    let evaluator = LegendreEvaluator::new();
    assert_eq!(evaluator.value(3, 2.0), evaluator.value(3, 1.5));
    assert_eq!(evaluator.value(3, -7.0), evaluator.value(3, -1.5));
}

#[test]
fn cache_extends_monotonically() {
    let evaluator = LegendreEvaluator::new();
    assert_eq!(evaluator.cached_order(), 1);

    evaluator.value(5, 0.3);
    assert_eq!(evaluator.cached_order(), 5);

    // a lower-order read never shrinks or rebuilds the table
    evaluator.value(2, 0.3);
    assert_eq!(evaluator.cached_order(), 5);
}

#[test]
fn cache_reuse_never_alters_results() {
    // order n then m < n must return bit-identical values to requesting m
    // on a fresh evaluator
    let warm = LegendreEvaluator::new();
    warm.value(7, 0.42);
    let via_warm = warm.value(3, 0.42);

    let fresh = LegendreEvaluator::new();
    let via_fresh = fresh.value(3, 0.42);

    assert_eq!(via_warm, via_fresh);
}

#[test]
fn threadsafe_backend_agrees_under_concurrent_extension() {
    let shared = Arc::new(ThreadSafeLegendreEvaluator::new_threadsafe());
    let xs = [-0.9, -0.3, 0.1, 0.7];

    let handles: Vec<_> = xs
        .iter()
        .map(|&x| {
            let evaluator = Arc::clone(&shared);
            thread::spawn(move || evaluator.value(30, x))
        })
        .collect();
    let concurrent: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let reference = LegendreEvaluator::new();
    for (&x, &value) in xs.iter().zip(&concurrent) {
        assert_eq!(value, reference.value(30, x));
    }
    assert_eq!(shared.cached_order(), 30);
}

// ============================================================================
// coefficient computation
// ============================================================================

#[test]
fn recovers_p1() {
    let points = sample_function(|x| x, -1.0, 1.0, 1000);
    let system = BasisSystem::new(BasisSystemType::Legendre);
    let coefs = system.compute_coefs(&points, -1.0, 1.0, 3).unwrap();

    assert_abs_diff_eq!(coefs.c0(), 0.0, epsilon = EPSILON);
    assert_abs_diff_eq!(p_coef(&coefs, 1), 1.0, epsilon = EPSILON);
    assert_abs_diff_eq!(p_coef(&coefs, 2), 0.0, epsilon = EPSILON);
    assert_abs_diff_eq!(p_coef(&coefs, 3), 0.0, epsilon = EPSILON);
}

#[test]
fn recovers_p2() {
    let points = sample_function(p2, -1.0, 1.0, 1000);
    let system = BasisSystem::new(BasisSystemType::Legendre);
    let coefs = system.compute_coefs(&points, -1.0, 1.0, 3).unwrap();

    assert_abs_diff_eq!(coefs.c0(), 0.0, epsilon = EPSILON);
    assert_abs_diff_eq!(p_coef(&coefs, 1), 0.0, epsilon = EPSILON);
    assert_abs_diff_eq!(p_coef(&coefs, 2), 1.0, epsilon = EPSILON);
}

#[test]
fn handles_shifted_domain() {
    // f(x) = x on [0, 2] is 1 + x̃ in normalized coordinates: c0 = 1, P1 = 1
    let points = sample_function(|x| x, 0.0, 2.0, 1000);
    let system = BasisSystem::new(BasisSystemType::Legendre);
    let coefs = system.compute_coefs(&points, 0.0, 2.0, 3).unwrap();

    assert_abs_diff_eq!(coefs.c0(), 1.0, epsilon = EPSILON);
    assert_abs_diff_eq!(p_coef(&coefs, 1), 1.0, epsilon = EPSILON);
    assert_abs_diff_eq!(p_coef(&coefs, 2), 0.0, epsilon = EPSILON);
}

#[test]
fn independent_systems_agree() {
    // every system instance owns its cache; results must not depend on
    // which instance computed first
    let points = sample_function(f64::exp, -1.0, 1.0, 1000);
    let first = BasisSystem::new(BasisSystemType::Legendre);
    let second = BasisSystem::new(BasisSystemType::Legendre);

    let lhs = first.compute_coefs(&points, -1.0, 1.0, 4).unwrap();
    let rhs = second.compute_coefs(&points, -1.0, 1.0, 4).unwrap();
    assert_eq!(lhs.family(0).coefs(), rhs.family(0).coefs());
}

// ============================================================================
// approximation and out-of-range signaling
// ============================================================================

#[test]
fn approximation_is_defined_in_extension_band() {
    let points = sample_function(|x| x, -1.0, 1.0, 1000);
    let system = BasisSystem::new(BasisSystemType::Legendre);
    let coefs = system.compute_coefs(&points, -1.0, 1.0, 3).unwrap();
    let approx = system.approximation(&coefs);

    assert!(approx.value(1.4).is_some());
    assert!(approx.value(-1.4).is_some());
}

#[test]
fn single_out_of_range_term_invalidates_whole_sum() {
    let points = sample_function(|x| x, -1.0, 1.0, 1000);
    let system = BasisSystem::new(BasisSystemType::Legendre);
    let coefs = system.compute_coefs(&points, -1.0, 1.0, 3).unwrap();
    let approx = system.approximation(&coefs);

    assert!(approx.value(1.6).is_none());
    assert!(approx.value(-2.0).is_none());
}

#[test]
fn residual_decreases_with_order() {
    let points = sample_function(f64::exp, -1.0, 1.0, 1000);
    let system = BasisSystem::new(BasisSystemType::Legendre);

    let residual = |max_k: usize| -> f64 {
        let coefs = system.compute_coefs(&points, -1.0, 1.0, max_k).unwrap();
        let approx = system.approximation(&coefs);
        (0..50)
            .map(|i| {
                let x = -0.98 + 1.96 * i as f64 / 50.0;
                (approx.value(x).unwrap() - x.exp()).abs()
            })
            .sum()
    };

    let r1 = residual(1);
    let r2 = residual(2);
    let r4 = residual(4);
    assert!(r1 > r2, "r1 = {r1}, r2 = {r2}");
    assert!(r2 > r4, "r2 = {r2}, r4 = {r4}");
}
