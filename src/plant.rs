use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::angles::incidence_angle;
use crate::error::{PlantError, PlantResult};
use crate::light::LightSource;
use crate::mount::ModuleMount;

pub const PLANT_CAPACITY: usize = 10;

/// A fixed set of [`PLANT_CAPACITY`] mount slots whose powers add up.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Plant {
    slots: [ModuleMount; PLANT_CAPACITY],
}

/// One line of [`Plant::report`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub index: usize,
    pub orientation: f64,
    pub area_cm2: f64,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} angle={} area={}",
            self.index, self.orientation, self.area_cm2
        )
    }
}

fn check_index(index: usize) -> PlantResult<()> {
    if index < PLANT_CAPACITY {
        Ok(())
    } else {
        warn!(index, capacity = PLANT_CAPACITY, "slot index out of bounds");
        Err(PlantError::BoundsError {
            index,
            capacity: PLANT_CAPACITY,
        })
    }
}

impl Plant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies every supplied mount into its slot.
    pub fn from_mounts(mounts: [ModuleMount; PLANT_CAPACITY]) -> Self {
        Self { slots: mounts }
    }

    pub fn uniform(mount: ModuleMount) -> Self {
        Self::from_mounts([mount; PLANT_CAPACITY])
    }

    /// Four mounts at `+π/4`, two at `+π/2`, four at `-π/4`, all with the
    /// default 20x30 module. Spreads production over the sweep compared to a
    /// plant whose mounts share one orientation.
    ///
    /// Every slot keeps the same module so the layout isolates the effect of
    /// orientation. The worked demo additionally shrinks slots 0..=3 to 10x10
    /// with [`Plant::resize_module`]; that variant is not this layout.
    pub fn flattened_layout() -> Self {
        let mut slots = [ModuleMount::default(); PLANT_CAPACITY];
        for (index, slot) in slots.iter_mut().enumerate() {
            let orientation = match index {
                0..=3 => FRAC_PI_4,
                4 | 5 => FRAC_PI_2,
                _ => -FRAC_PI_4,
            };
            *slot = ModuleMount::oriented(orientation);
        }
        Self::from_mounts(slots)
    }

    pub fn mounts(&self) -> &[ModuleMount] {
        &self.slots
    }

    pub fn mount(&self, index: usize) -> PlantResult<&ModuleMount> {
        check_index(index)?;
        Ok(&self.slots[index])
    }

    pub fn mount_mut(&mut self, index: usize) -> PlantResult<&mut ModuleMount> {
        check_index(index)?;
        Ok(&mut self.slots[index])
    }

    /// Overwrites slot `index` with a copy of `mount`.
    pub fn install_mount(&mut self, mount: ModuleMount, index: usize) -> PlantResult<()> {
        check_index(index)?;
        debug!(index, orientation = mount.orientation(), "mount installed");
        self.slots[index] = mount;
        Ok(())
    }

    /// Resizes the module held in slot `index` in place.
    pub fn resize_module(&mut self, index: usize, nx: i32, ny: i32) -> PlantResult<()> {
        self.mount_mut(index)?.set_element_counts(nx, ny);
        Ok(())
    }

    /// Aggregate power for the given light source position, in W.
    ///
    /// A degenerate mount contributes zero without affecting the others.
    pub fn current_output(&self, source: &LightSource) -> f64 {
        self.slots
            .iter()
            .map(|m| m.current_power(incidence_angle(m.orientation(), source.angle())))
            .sum()
    }

    pub fn total_peak_power(&self) -> f64 {
        self.slots.iter().map(|m| m.module().peak_power()).sum()
    }

    pub fn report(&self) -> Vec<ReportLine> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, m)| ReportLine {
                index,
                orientation: m.orientation(),
                area_cm2: m.module().area(),
            })
            .collect()
    }
}
