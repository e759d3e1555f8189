//! Boundary error types.
//!
//! Missing joints, gated frames and unlisted exercises are expected inputs
//! and never surface here. These errors only describe malformed data
//! arriving from outside the engine.

/// Errors raised while decoding input handed to the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Flat landmark buffer has the wrong number of values.
    #[error("Invalid landmark data length: {actual} (expected {expected})")]
    LandmarkLength { actual: usize, expected: usize },

    /// Exercise name does not match any known exercise.
    #[error("Unknown exercise '{0}'")]
    UnknownExercise(String),

    /// Orientation code outside the known range.
    #[error("Unknown orientation code {0}")]
    UnknownOrientation(u8),

    /// Configuration JSON could not be parsed.
    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration parsed but holds unusable values.
    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValue { field: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
