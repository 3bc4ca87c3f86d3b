use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI};

use pv_plant::{incidence_angle, ModuleMount, PhotovoltaicModule, PlantError};

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

fn resized_test_mount() -> ModuleMount {
    let mut m = ModuleMount::new(-FRAC_PI_2, PhotovoltaicModule::new(10, 10));
    m.set_element_counts(2, 3);
    m
}

// ── Construction ──

#[test]
fn test_default_mount() {
    let m = ModuleMount::default();
    assert_eq!(m.orientation(), 0.0);
    assert_eq!(*m.module(), PhotovoltaicModule::new(20, 30));
}

#[test]
fn test_orientation_setter_is_unconstrained() {
    let mut m = ModuleMount::oriented(FRAC_PI_4);
    m.set_orientation(-9.0 * PI);
    assert_eq!(m.orientation(), -9.0 * PI);
}

// ── CurrentPower ──

#[test]
fn test_reference_module_at_zero_orientation_gets_no_power() {
    let m = ModuleMount::new(0.0, PhotovoltaicModule::new(10, 10));
    let incidence = incidence_angle(0.0, 0.0);
    assert_approx!(incidence, FRAC_PI_2, 1e-15);
    assert_approx!(m.current_power(incidence), 0.0, 1e-9);
}

#[test]
fn test_resized_mount_scenario() {
    let m = resized_test_mount();
    assert_eq!(m.module().peak_power(), 90.0);
    assert_approx!(m.current_power(FRAC_PI_2), 0.0, 1e-9);
    assert_eq!(m.current_power(0.0), 90.0);
}

#[test]
fn test_power_is_zero_when_cosine_not_positive() {
    let m = ModuleMount::default();
    for incidence in [PI, -PI, 2.0, -2.0, 3.5, 100.0 * PI + PI] {
        assert!(incidence.cos() <= 0.0);
        assert_eq!(m.current_power(incidence), 0.0, "incidence={}", incidence);
    }
}

#[test]
fn test_power_follows_cosine_law() {
    let m = ModuleMount::default();
    assert_approx!(m.current_power(FRAC_PI_3), 4500.0, 1e-9);
    assert_approx!(m.current_power(-FRAC_PI_3), 4500.0, 1e-9);
    assert!(m.current_power(0.1) > m.current_power(0.2));
}

// ── Module accessor ──

#[test]
fn test_module_mut_edits_in_place() {
    let mut m = ModuleMount::default();
    m.module_mut().set_element_count_x(1);
    assert_eq!(m.module().elements_x(), 1);
    assert_eq!(m.module().elements_y(), 30);
}

#[test]
fn test_copied_mounts_own_independent_modules() {
    let original = ModuleMount::default();
    let mut copy = original;
    copy.set_element_counts(1, 1);
    assert_eq!(original.module().peak_power(), 9000.0);
    assert_eq!(copy.module().peak_power(), 15.0);
}

// ── Efficiency ──

#[test]
fn test_efficiency_values() {
    let m = resized_test_mount();
    assert_approx!(m.efficiency(0.0).unwrap(), 100.0, 1e-9);
    assert_approx!(m.efficiency(FRAC_PI_3).unwrap(), 50.0, 1e-9);
    assert_eq!(m.efficiency(PI).unwrap(), 0.0);
}

#[test]
fn test_efficiency_zero_peak_is_invalid_state() {
    let m = ModuleMount::new(0.0, PhotovoltaicModule::new(0, 5));
    assert!(matches!(m.efficiency(0.0), Err(PlantError::InvalidState(_))));
    assert!(matches!(m.efficiency(PI), Err(PlantError::InvalidState(_))));
    assert_eq!(m.current_power(0.0), 0.0);
}
