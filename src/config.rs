use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::angles::{deg_to_rad, rad_to_deg};
use crate::error::{PlantError, PlantResult};
use crate::logging::LogConfig;
use crate::module::{PhotovoltaicModule, DEFAULT_ELEMENTS_X, DEFAULT_ELEMENTS_Y};
use crate::mount::ModuleMount;
use crate::plant::{Plant, PLANT_CAPACITY};
use crate::sweep::SweepConfig;

/// One mount as written in a config file. Orientation is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountConfig {
    pub orientation_deg: f64,
    pub elements_x: i32,
    pub elements_y: i32,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            orientation_deg: 0.0,
            elements_x: DEFAULT_ELEMENTS_X,
            elements_y: DEFAULT_ELEMENTS_Y,
        }
    }
}

impl MountConfig {
    pub fn build(&self) -> ModuleMount {
        ModuleMount::new(
            deg_to_rad(self.orientation_deg),
            PhotovoltaicModule::new(self.elements_x, self.elements_y),
        )
    }
}

impl From<&ModuleMount> for MountConfig {
    fn from(mount: &ModuleMount) -> Self {
        Self {
            orientation_deg: rad_to_deg(mount.orientation()),
            elements_x: mount.module().elements_x(),
            elements_y: mount.module().elements_y(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantConfig {
    pub mounts: Vec<MountConfig>,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self::from(&Plant::flattened_layout())
    }
}

impl From<&Plant> for PlantConfig {
    fn from(plant: &Plant) -> Self {
        Self {
            mounts: plant.mounts().iter().map(MountConfig::from).collect(),
        }
    }
}

impl PlantConfig {
    pub fn build(&self) -> PlantResult<Plant> {
        if self.mounts.len() != PLANT_CAPACITY {
            return Err(PlantError::Config(format!(
                "a plant needs exactly {} mounts, got {}",
                PLANT_CAPACITY,
                self.mounts.len()
            )));
        }
        let mut slots = [ModuleMount::default(); PLANT_CAPACITY];
        for (slot, mount) in slots.iter_mut().zip(&self.mounts) {
            *slot = mount.build();
        }
        Ok(Plant::from_mounts(slots))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub plant: PlantConfig,
    pub sweep: SweepConfig,
    /// Stand-alone mount sampled next to the plant.
    pub probe: MountConfig,
    pub log: LogConfig,
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> PlantResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.sweep.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> PlantResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
