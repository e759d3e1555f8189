//! Supported exercise types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Exercise selected for a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExerciseId {
    PushUps,
    BasicSquats,
    WallSquats,
    HighKnees,
    LateralRaises,
    FrontRaises,
    PilatesSitUpsHybrid,
    Lunges,
    BicepCurls,
    JumpingJacks,
    Planks,
    /// Tracked session with no counting rule; frames are accepted silently
    Freestyle,
}

impl ExerciseId {
    /// Every exercise with a counting rule or form monitor
    pub const LISTED: [ExerciseId; 11] = [
        ExerciseId::PushUps,
        ExerciseId::BasicSquats,
        ExerciseId::WallSquats,
        ExerciseId::HighKnees,
        ExerciseId::LateralRaises,
        ExerciseId::FrontRaises,
        ExerciseId::PilatesSitUpsHybrid,
        ExerciseId::Lunges,
        ExerciseId::BicepCurls,
        ExerciseId::JumpingJacks,
        ExerciseId::Planks,
    ];

    /// Display name shown in the exercise picker
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseId::PushUps => "Push-Ups",
            ExerciseId::BasicSquats => "Basic Squats",
            ExerciseId::WallSquats => "Wall Squats",
            ExerciseId::HighKnees => "High Knees",
            ExerciseId::LateralRaises => "Lateral Raises",
            ExerciseId::FrontRaises => "Front Raises",
            ExerciseId::PilatesSitUpsHybrid => "Pilates Sit-Ups Hybrid",
            ExerciseId::Lunges => "Lunges",
            ExerciseId::BicepCurls => "Bicep Curls",
            ExerciseId::JumpingJacks => "Jumping Jacks",
            ExerciseId::Planks => "Planks",
            ExerciseId::Freestyle => "Freestyle",
        }
    }

    /// Planks are held, not repeated
    pub fn counts_reps(&self) -> bool {
        !matches!(self, ExerciseId::Planks | ExerciseId::Freestyle)
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExerciseId {
    type Err = EngineError;

    /// Accepts display names and common spellings ("Push-Ups", "pushups", "push_ups")
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let exercise = match key.as_str() {
            "pushups" | "pushup" => ExerciseId::PushUps,
            "basicsquats" | "squats" | "squat" => ExerciseId::BasicSquats,
            "wallsquats" | "wallsquat" | "wallsit" => ExerciseId::WallSquats,
            "highknees" => ExerciseId::HighKnees,
            "lateralraises" | "lateralraise" => ExerciseId::LateralRaises,
            "frontraises" | "frontraise" => ExerciseId::FrontRaises,
            "pilatessitupshybrid" | "pilatessitups" | "situps" => ExerciseId::PilatesSitUpsHybrid,
            "lunges" | "lunge" => ExerciseId::Lunges,
            "bicepcurls" | "bicepcurl" => ExerciseId::BicepCurls,
            "jumpingjacks" | "jumpingjack" => ExerciseId::JumpingJacks,
            "planks" | "plank" => ExerciseId::Planks,
            "freestyle" => ExerciseId::Freestyle,
            _ => return Err(EngineError::UnknownExercise(name.to_string())),
        };
        Ok(exercise)
    }
}
