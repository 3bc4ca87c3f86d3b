use std::f64::consts::FRAC_PI_2;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Angle between the light direction and the effective normal of a mount.
///
/// Both inputs are radians and neither is normalized. Negative orientations
/// take a separate branch that flips the sign of `source_angle`, which makes
/// the result jump at orientation zero: just below zero the panel sees
/// `π/2 - s`, at zero it sees `π/2 + s`. The result may leave `[0, π]`; the
/// cosine power law is defined for any real input.
pub fn incidence_angle(orientation: f64, source_angle: f64) -> f64 {
    if orientation < 0.0 {
        FRAC_PI_2 - source_angle + orientation
    } else {
        FRAC_PI_2 + source_angle - orientation
    }
}

/// Fraction of the local cosine law that reaches a panel, clamped at zero
/// once the light falls behind it.
pub fn illumination_factor(incidence: f64) -> f64 {
    let c = incidence.cos();
    if c > 0.0 {
        c
    } else {
        0.0
    }
}
