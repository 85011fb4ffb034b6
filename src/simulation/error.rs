use thiserror::Error;

/// Errors that can occur while running or reporting a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid trial count {0}: must be zero or positive")]
    InvalidTrialCount(i64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
