use serde::{Deserialize, Serialize};

/// Position of the light source, as a single angle in radians.
///
/// No normalization is applied; a sweep may push the angle past `±π`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LightSource {
    angle: f64,
}

impl LightSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(angle: f64) -> Self {
        Self { angle }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    pub fn move_by(&mut self, delta: f64) {
        self.angle += delta;
    }
}
