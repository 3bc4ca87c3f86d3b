pub mod angles;
pub mod config;
pub mod error;
pub mod light;
pub mod logging;
pub mod module;
pub mod mount;
pub mod plant;
pub mod sweep;

pub use angles::{deg_to_rad, illumination_factor, incidence_angle, rad_to_deg};

pub use config::{MountConfig, PlantConfig, SimulationConfig};

pub use error::{PlantError, PlantResult};

pub use light::LightSource;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};

pub use module::{
    PhotovoltaicModule, DEFAULT_ELEMENTS_X, DEFAULT_ELEMENTS_Y, UNIT_HEIGHT_CM, UNIT_POWER_W,
    UNIT_WIDTH_CM,
};

pub use mount::ModuleMount;

pub use plant::{Plant, ReportLine, PLANT_CAPACITY};

pub use sweep::{
    run_sweep, solar_time, summarize, SweepConfig, SweepMetadata, SweepReport, SweepSample,
    SweepStats, MAX_SAMPLES,
};
