use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use pv_plant::angles::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Degree conversion ──

#[test]
fn test_deg_rad_known_values() {
    assert_approx!(deg_to_rad(180.0), PI, 1e-12);
    assert_approx!(deg_to_rad(-45.0), -FRAC_PI_4, 1e-12);
    assert_approx!(rad_to_deg(FRAC_PI_2), 90.0, 1e-12);
}

// ── IncidenceAngle ──

#[test]
fn test_incidence_zero_orientation_zero_source() {
    assert_approx!(incidence_angle(0.0, 0.0), FRAC_PI_2, 1e-15);
}

#[test]
fn test_incidence_non_negative_branch() {
    assert_approx!(incidence_angle(FRAC_PI_4, 0.0), FRAC_PI_4, 1e-12);
    assert_approx!(incidence_angle(FRAC_PI_2, -FRAC_PI_2), -FRAC_PI_2, 1e-12);
    assert_approx!(incidence_angle(FRAC_PI_4, 0.3), FRAC_PI_2 + 0.3 - FRAC_PI_4, 1e-12);
}

#[test]
fn test_incidence_negative_branch() {
    assert_approx!(incidence_angle(-FRAC_PI_4, 0.0), FRAC_PI_4, 1e-12);
    assert_approx!(incidence_angle(-FRAC_PI_2, 0.0), 0.0, 1e-12);
    assert_approx!(incidence_angle(-FRAC_PI_4, 0.3), FRAC_PI_2 - 0.3 - FRAC_PI_4, 1e-12);
}

#[test]
fn test_incidence_jumps_at_zero_orientation() {
    let s = 0.5;
    let below = incidence_angle(-1e-12, s);
    let at = incidence_angle(0.0, s);
    assert_approx!(below, FRAC_PI_2 - s, 1e-9);
    assert_approx!(at, FRAC_PI_2 + s, 1e-9);
    assert!((at - below - 2.0 * s).abs() < 1e-9);
}

#[test]
fn test_incidence_accepts_unnormalized_angles() {
    let i = incidence_angle(7.0 * PI, -5.0 * PI);
    assert!(i.is_finite());
    assert_approx!(i, FRAC_PI_2 - 12.0 * PI, 1e-9);
}

// ── IlluminationFactor ──

#[test]
fn test_illumination_factor_clamps_behind_panel() {
    assert_eq!(illumination_factor(PI), 0.0);
    assert_eq!(illumination_factor(-PI), 0.0);
    assert_eq!(illumination_factor(3.0 * FRAC_PI_2 - 0.1), 0.0);
    assert_approx!(illumination_factor(0.0), 1.0, 1e-15);
    assert_approx!(illumination_factor(FRAC_PI_4), FRAC_PI_4.cos(), 1e-15);
}
