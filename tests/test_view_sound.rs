//! Integration tests: view layer and harmonic-oscillator mapping

use approx::assert_abs_diff_eq;

use fourierlab::basis::basissystem::{
    BasisSystem,
    BasisSystemType
};
use fourierlab::expansion::coefficientset::{
    CoefficientSet,
    FamilyCoefficients
};
use fourierlab::expansion::expansionerror::ExpansionError;
use fourierlab::math::curve::sampledcurve::sample_function;
use fourierlab::sound::harmonicwave::{
    HarmonicWave,
    DEFAULT_BASE_FREQUENCY
};
use fourierlab::view::fourierview::{
    active_coefs,
    frequency_domain,
    term_series,
    CoefficientActivity
};

fn standard_set() -> CoefficientSet {
    CoefficientSet::new(
        BasisSystemType::Standard,
        1.0,
        vec![
            FamilyCoefficients::new("cos".to_owned(), vec![0.5, -2.3]),
            FamilyCoefficients::new("sin".to_owned(), vec![1.2, 0.4]),
        ],
        (0.0, 1.0),
    )
}

// ============================================================================
// activity mask
// ============================================================================

#[test]
fn all_active_mask_changes_nothing() {
    let coefs = standard_set();
    let activity = CoefficientActivity::all_active(&coefs);
    let masked = active_coefs(&coefs, &activity);

    assert_eq!(masked.c0(), coefs.c0());
    for (lhs, rhs) in masked.families().iter().zip(coefs.families()) {
        assert_eq!(lhs.coefs(), rhs.coefs());
    }
}

#[test]
fn inactive_coefficients_are_zeroed() {
    let coefs = standard_set();
    let mut activity = CoefficientActivity::all_active(&coefs);
    activity.set_active(1, 1, false);
    activity.set_c0(false);

    let masked = active_coefs(&coefs, &activity);
    assert_eq!(masked.c0(), 0.0);
    assert_eq!(masked.family(1).coef(1), 0.0);
    // everything else untouched
    assert_eq!(masked.family(0).coef(1), 0.5);
    assert_eq!(masked.family(1).coef(2), 0.4);
}

// ============================================================================
// term series
// ============================================================================

#[test]
fn term_series_labels_and_dash_flags() {
    let coefs = standard_set();
    let mut activity = CoefficientActivity::all_active(&coefs);
    activity.set_active(0, 2, false);

    let system = BasisSystem::new(BasisSystemType::Standard);
    let series = term_series(&system, &coefs, &activity, 0, (0.0, 1.0), 100);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label(), "a1");
    assert_eq!(series[1].label(), "a2");
    assert!(!series[0].dashed());
    assert!(series[1].dashed());
    assert_eq!(series[0].points().len(), 101);
}

#[test]
fn term_series_scales_by_coefficient() {
    let coefs = standard_set();
    let activity = CoefficientActivity::all_active(&coefs);
    let system = BasisSystem::new(BasisSystemType::Standard);

    let series = term_series(&system, &coefs, &activity, 0, (0.0, 1.0), 100);
    // a1·cos(2πx) at x = 0 is the raw coefficient
    assert_abs_diff_eq!(series[0].points()[0].y(), 0.5, epsilon = 1e-12);
}

#[test]
fn out_of_range_terms_leave_gaps() {
    let points = sample_function(|x| x, -1.0, 1.0, 500);
    let system = BasisSystem::new(BasisSystemType::Legendre);
    let coefs = system.compute_coefs(&points, -1.0, 1.0, 2).unwrap();
    let activity = CoefficientActivity::all_active(&coefs);

    // x ∈ [-2, 2] leaves the ±1.5 extension band on both sides
    let series = term_series(&system, &coefs, &activity, 0, (-2.0, 2.0), 100);
    assert!(series[0].points().len() < 101);
    for pt in series[0].points() {
        assert!(pt.x().abs() <= 1.5);
    }
}

#[test]
fn missing_family_yields_empty_series() {
    let coefs = standard_set();
    let activity = CoefficientActivity::all_active(&coefs);
    let system = BasisSystem::new(BasisSystemType::Standard);
    assert!(term_series(&system, &coefs, &activity, 5, (0.0, 1.0), 10).is_empty());
}

// ============================================================================
// frequency domain
// ============================================================================

#[test]
fn frequency_domain_rounds_symmetric_range() {
    let coefs = standard_set();
    // extremes are -2.3 and 1.2: range rounds up to 3 on both sides
    assert_eq!(frequency_domain(&coefs), (-3.0, 3.0));
}

#[test]
fn frequency_domain_stays_positive_for_positive_coefs() {
    let coefs = CoefficientSet::new(
        BasisSystemType::Sin,
        0.0,
        vec![FamilyCoefficients::new("sin".to_owned(), vec![0.5, 1.2])],
        (0.0, 1.0),
    );
    assert_eq!(frequency_domain(&coefs), (0.0, 2.0));
}

// ============================================================================
// harmonic wave
// ============================================================================

#[test]
fn standard_system_fills_both_harmonic_arrays() {
    let coefs = standard_set();
    let activity = CoefficientActivity::all_active(&coefs);
    let wave = HarmonicWave::from_coefs(&coefs, &activity, DEFAULT_BASE_FREQUENCY).unwrap();

    assert_eq!(wave.real().len(), 3);
    assert_eq!(wave.real()[0], 0.0);
    assert_eq!(wave.real()[1], 0.5);
    assert_eq!(wave.real()[2], -2.3);
    assert_eq!(wave.imag()[1], 1.2);
    assert_eq!(wave.imag()[2], 0.4);
    assert_eq!(wave.frequency(), DEFAULT_BASE_FREQUENCY);
}

#[test]
fn inactive_harmonics_are_muted() {
    let coefs = standard_set();
    let mut activity = CoefficientActivity::all_active(&coefs);
    activity.set_active(1, 1, false);

    let wave = HarmonicWave::from_coefs(&coefs, &activity, DEFAULT_BASE_FREQUENCY).unwrap();
    assert_eq!(wave.imag()[1], 0.0);
    assert_eq!(wave.real()[1], 0.5);
}

#[test]
fn half_period_systems_halve_the_frequency() {
    let coefs = CoefficientSet::new(
        BasisSystemType::Sin,
        0.0,
        vec![FamilyCoefficients::new("sin".to_owned(), vec![1.0])],
        (0.0, 1.0),
    );
    let activity = CoefficientActivity::all_active(&coefs);
    let wave = HarmonicWave::from_coefs(&coefs, &activity, 220.0).unwrap();

    assert_eq!(wave.frequency(), 110.0);
    assert_eq!(wave.imag()[1], 1.0);
    assert_eq!(wave.real()[1], 0.0);
}

#[test]
fn polynomial_systems_are_unsupported() {
    let coefs = CoefficientSet::new(
        BasisSystemType::Chebyshev,
        0.0,
        vec![FamilyCoefficients::new("T".to_owned(), vec![1.0])],
        (-1.0, 1.0),
    );
    let activity = CoefficientActivity::all_active(&coefs);
    let result = HarmonicWave::from_coefs(&coefs, &activity, 220.0);

    assert!(matches!(
        result,
        Err(ExpansionError::UnsupportedSystem("chebyshev"))
    ));
}
