use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlantError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Slot index out of bounds: index={index}, capacity={capacity}")]
    BoundsError { index: usize, capacity: usize },

    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PlantResult<T> = Result<T, PlantError>;
