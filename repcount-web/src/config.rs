//! Engine configuration
//!
//! Angle thresholds live in the exercise rule table and are fixed. Only the
//! distance tolerances, which depend on the screen space coordinates are
//! scaled into, are configurable here.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::pose::Viewport;

/// Hip-drop tolerances for planks, in viewport points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlankThresholds {
    /// Hip drop above this speaks a warning once
    pub warning: f32,
    /// Hip drop above this ends the session
    pub failure: f32,
}

impl Default for PlankThresholds {
    fn default() -> Self {
        Self {
            warning: 30.0,
            failure: 50.0,
        }
    }
}

/// Runtime configuration for one controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Screen space raw estimator coordinates are scaled to
    pub viewport: Viewport,
    pub plank: PlankThresholds,
    /// Pilates sit-up: elbow must come closer than this to the knee
    pub elbow_knee_distance: f32,
    /// Joints at or below this confidence are dropped
    pub min_confidence: f32,
    /// Attach a spoken-number cue to every counted rep
    pub announce_reps: bool,
    pub plank_warning_message: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            plank: PlankThresholds::default(),
            elbow_knee_distance: 50.0,
            min_confidence: 0.0,
            announce_reps: true,
            plank_warning_message: "Keep your hips up".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            return Err(EngineError::ConfigValue {
                field: "viewport",
                message: format!(
                    "dimensions must be positive, got {}x{}",
                    self.viewport.width, self.viewport.height
                ),
            });
        }
        if !(self.plank.warning >= 0.0 && self.plank.failure > self.plank.warning) {
            return Err(EngineError::ConfigValue {
                field: "plank",
                message: format!(
                    "need 0 <= warning < failure, got {} / {}",
                    self.plank.warning, self.plank.failure
                ),
            });
        }
        if !(self.elbow_knee_distance >= 0.0) {
            return Err(EngineError::ConfigValue {
                field: "elbowKneeDistance",
                message: format!("must be non-negative, got {}", self.elbow_knee_distance),
            });
        }
        if !(0.0..1.0).contains(&self.min_confidence) {
            return Err(EngineError::ConfigValue {
                field: "minConfidence",
                message: format!("must be in [0, 1), got {}", self.min_confidence),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.plank.warning, 30.0);
        assert_eq!(config.plank.failure, 50.0);
        assert_eq!(config.elbow_knee_distance, 50.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            EngineConfig::from_json(r#"{"viewport":{"width":1080,"height":1920},"plank":{"failure":80}}"#)
                .unwrap();
        assert_eq!(config.viewport.width, 1080.0);
        assert_eq!(config.plank.warning, 30.0);
        assert_eq!(config.plank.failure, 80.0);
        assert!(config.announce_reps);
    }

    #[test]
    fn test_rejects_inverted_plank_thresholds() {
        let err = EngineConfig::from_json(r#"{"plank":{"warning":60,"failure":50}}"#).unwrap_err();
        assert!(matches!(err, EngineError::ConfigValue { field: "plank", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = EngineConfig::from_json("{viewport").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse(_)));
    }
}
