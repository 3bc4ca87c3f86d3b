use pv_plant::module::*;

// ── Size and power ──

#[test]
fn test_reference_module_10x10() {
    let m = PhotovoltaicModule::new(10, 10);
    assert_eq!(m.area(), 6000.0);
    assert_eq!(m.peak_power(), 1500.0);
}

#[test]
fn test_edge_lengths() {
    let m = PhotovoltaicModule::new(3, 7);
    assert_eq!(m.dim_x_cm(), 18.0);
    assert_eq!(m.dim_y_cm(), 70.0);
    assert_eq!(m.area(), m.dim_x_cm() * m.dim_y_cm());
}

#[test]
fn test_default_module_is_20x30() {
    let m = PhotovoltaicModule::default();
    assert_eq!((m.elements_x(), m.elements_y()), (20, 30));
    assert_eq!(m.area(), 120.0 * 300.0);
    assert_eq!(m.peak_power(), 9000.0);
}

#[test]
fn test_zero_size_is_degenerate_not_error() {
    let m = PhotovoltaicModule::new(0, 12);
    assert_eq!(m.area(), 0.0);
    assert_eq!(m.peak_power(), 0.0);
}

// ── Resizing ──

#[test]
fn test_set_counts_can_shrink_and_grow() {
    let mut m = PhotovoltaicModule::new(10, 10);
    m.set_element_count_x(2);
    m.set_element_count_y(3);
    assert_eq!(m.peak_power(), 90.0);
    m.set_element_counts(40, 50);
    assert_eq!(m.peak_power(), 40.0 * 50.0 * UNIT_POWER_W);
    assert_eq!(m.area(), 40.0 * UNIT_WIDTH_CM * 50.0 * UNIT_HEIGHT_CM);
}

#[test]
fn test_negative_counts_flow_through() {
    let mut m = PhotovoltaicModule::new(4, 5);
    m.set_element_count_x(-4);
    assert_eq!(m.area(), -4.0 * 6.0 * 50.0);
    assert_eq!(m.peak_power(), -300.0);
}
