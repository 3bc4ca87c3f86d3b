use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::angles::illumination_factor;
use crate::error::{PlantError, PlantResult};
use crate::module::PhotovoltaicModule;

/// A module fixed at one orientation angle (radians).
///
/// The mount owns its module by value, so copying a mount copies the module
/// and later resizes on one copy never reach the other.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModuleMount {
    orientation: f64,
    module: PhotovoltaicModule,
}

impl ModuleMount {
    pub fn new(orientation: f64, module: PhotovoltaicModule) -> Self {
        Self {
            orientation,
            module,
        }
    }

    /// Mount at `orientation` carrying the default 20x30 module.
    pub fn oriented(orientation: f64) -> Self {
        Self::new(orientation, PhotovoltaicModule::default())
    }

    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    pub fn set_orientation(&mut self, angle: f64) {
        self.orientation = angle;
    }

    pub fn module(&self) -> &PhotovoltaicModule {
        &self.module
    }

    pub fn module_mut(&mut self) -> &mut PhotovoltaicModule {
        &mut self.module
    }

    pub fn set_element_counts(&mut self, nx: i32, ny: i32) {
        self.module.set_element_counts(nx, ny);
        debug!(nx, ny, area_cm2 = self.module.area(), "module resized");
    }

    /// Power delivered at the given incidence angle, in W.
    pub fn current_power(&self, incidence: f64) -> f64 {
        self.module.peak_power() * illumination_factor(incidence)
    }

    /// Delivered power as a percentage of peak power.
    ///
    /// A module with zero peak power has no meaningful efficiency and is
    /// reported as [`PlantError::InvalidState`].
    pub fn efficiency(&self, incidence: f64) -> PlantResult<f64> {
        let peak = self.module.peak_power();
        if peak == 0.0 {
            warn!(
                elements_x = self.module.elements_x(),
                elements_y = self.module.elements_y(),
                "efficiency requested for a module with zero peak power"
            );
            return Err(PlantError::InvalidState(format!(
                "module {}x{} has zero peak power",
                self.module.elements_x(),
                self.module.elements_y()
            )));
        }
        if incidence.cos() > 0.0 {
            Ok(100.0 * self.current_power(incidence) / peak)
        } else {
            Ok(0.0)
        }
    }
}
