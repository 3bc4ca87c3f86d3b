use serde::{Deserialize, Serialize};

/// Width of one power-producing element, in cm.
pub const UNIT_WIDTH_CM: f64 = 6.0;
/// Height of one power-producing element, in cm.
pub const UNIT_HEIGHT_CM: f64 = 10.0;
/// Peak power of one element, in W.
pub const UNIT_POWER_W: f64 = 15.0;

pub const DEFAULT_ELEMENTS_X: i32 = 20;
pub const DEFAULT_ELEMENTS_Y: i32 = 30;

/// A rectangular panel made of `elements_x` by `elements_y` identical elements.
///
/// Counts are plain integers. Zero is a valid degenerate size (no area, no
/// power) and negative counts are not rejected; they flow through to
/// negative derived values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotovoltaicModule {
    elements_x: i32,
    elements_y: i32,
}

impl PhotovoltaicModule {
    pub fn new(elements_x: i32, elements_y: i32) -> Self {
        Self {
            elements_x,
            elements_y,
        }
    }

    pub fn elements_x(&self) -> i32 {
        self.elements_x
    }

    pub fn elements_y(&self) -> i32 {
        self.elements_y
    }

    pub fn dim_x_cm(&self) -> f64 {
        self.elements_x as f64 * UNIT_WIDTH_CM
    }

    pub fn dim_y_cm(&self) -> f64 {
        self.elements_y as f64 * UNIT_HEIGHT_CM
    }

    /// Panel area in cm².
    pub fn area(&self) -> f64 {
        self.dim_x_cm() * self.dim_y_cm()
    }

    /// Peak power in W, reached at normal incidence.
    pub fn peak_power(&self) -> f64 {
        self.elements_x as f64 * self.elements_y as f64 * UNIT_POWER_W
    }

    /// Absolute set of the X element count. Growing is as valid as shrinking.
    pub fn set_element_count_x(&mut self, n: i32) {
        self.elements_x = n;
    }

    /// Absolute set of the Y element count. Growing is as valid as shrinking.
    pub fn set_element_count_y(&mut self, n: i32) {
        self.elements_y = n;
    }

    pub fn set_element_counts(&mut self, nx: i32, ny: i32) {
        self.set_element_count_x(nx);
        self.set_element_count_y(ny);
    }
}

impl Default for PhotovoltaicModule {
    fn default() -> Self {
        Self::new(DEFAULT_ELEMENTS_X, DEFAULT_ELEMENTS_Y)
    }
}
