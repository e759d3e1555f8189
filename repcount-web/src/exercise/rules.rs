//! Exercise rule table
//!
//! One entry per counted exercise. Thresholds are fixed contracts, not
//! tuning knobs. Adding an exercise means adding a row here.

use super::features::{AngleSpec, Composite, Feature, Reading};
use super::kind::ExerciseId;
use crate::pose::{BodyPart, JointId};

/// Phase-transition predicate over a feature reading
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Criterion {
    /// Both angles strictly below the threshold
    BothBelow(f32),
    /// Both angles at or below the threshold
    BothAtMost(f32),
    /// Both angles strictly above the threshold
    BothAbove(f32),
    /// At least one side raised
    EitherRaised,
    /// Neither side raised
    NeitherRaised,
    /// Composite posture fully engaged
    Engaged,
    /// Composite posture released
    Released,
}

impl Criterion {
    /// Evaluate against a reading. A reading of the wrong shape never holds.
    pub fn holds(&self, reading: &Reading) -> bool {
        match (self, reading) {
            (Criterion::BothBelow(t), Reading::Angles { left, right }) => *left < *t && *right < *t,
            (Criterion::BothAtMost(t), Reading::Angles { left, right }) => *left <= *t && *right <= *t,
            (Criterion::BothAbove(t), Reading::Angles { left, right }) => *left > *t && *right > *t,
            (Criterion::EitherRaised, Reading::Raised { left, right }) => *left || *right,
            (Criterion::NeitherRaised, Reading::Raised { left, right }) => !*left && !*right,
            (Criterion::Engaged, Reading::Posture { engaged, .. }) => *engaged,
            (Criterion::Released, Reading::Posture { released, .. }) => *released,
            _ => false,
        }
    }
}

/// Declarative description of how one exercise is counted
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExerciseRule {
    pub exercise: ExerciseId,
    pub feature: Feature,
    /// Resting → Descending
    pub enter: Criterion,
    /// Descending → Resting, counts one rep
    pub exit: Criterion,
}

impl ExerciseRule {
    pub fn required_joints(&self) -> Vec<JointId> {
        self.feature.required_joints()
    }
}

const ELBOW_ANGLE: Feature = Feature::PairedAngle(AngleSpec {
    outer: BodyPart::Shoulder,
    vertex: BodyPart::Elbow,
    inner: BodyPart::Wrist,
});

const KNEE_ANGLE: Feature = Feature::PairedAngle(AngleSpec {
    outer: BodyPart::Hip,
    vertex: BodyPart::Knee,
    inner: BodyPart::Ankle,
});

const ARM_ANGLE: Feature = Feature::PairedAngle(AngleSpec {
    outer: BodyPart::Elbow,
    vertex: BodyPart::Shoulder,
    inner: BodyPart::Hip,
});

/// Rule table indexed by exercise
static RULES: [ExerciseRule; 10] = [
    ExerciseRule {
        exercise: ExerciseId::PushUps,
        feature: ELBOW_ANGLE,
        enter: Criterion::BothBelow(120.0),
        exit: Criterion::BothAbove(160.0),
    },
    ExerciseRule {
        exercise: ExerciseId::BasicSquats,
        feature: KNEE_ANGLE,
        enter: Criterion::BothAtMost(90.0),
        exit: Criterion::BothAbove(160.0),
    },
    ExerciseRule {
        exercise: ExerciseId::Lunges,
        feature: KNEE_ANGLE,
        enter: Criterion::BothAtMost(90.0),
        exit: Criterion::BothAbove(160.0),
    },
    ExerciseRule {
        exercise: ExerciseId::WallSquats,
        feature: KNEE_ANGLE,
        enter: Criterion::BothBelow(90.0),
        exit: Criterion::BothAbove(160.0),
    },
    ExerciseRule {
        exercise: ExerciseId::HighKnees,
        feature: Feature::Height {
            upper: BodyPart::Knee,
            lower: BodyPart::Hip,
        },
        enter: Criterion::EitherRaised,
        exit: Criterion::NeitherRaised,
    },
    ExerciseRule {
        exercise: ExerciseId::BicepCurls,
        feature: ELBOW_ANGLE,
        enter: Criterion::BothBelow(60.0),
        exit: Criterion::BothAbove(160.0),
    },
    ExerciseRule {
        exercise: ExerciseId::LateralRaises,
        feature: ARM_ANGLE,
        enter: Criterion::BothAbove(70.0),
        exit: Criterion::BothBelow(30.0),
    },
    ExerciseRule {
        exercise: ExerciseId::FrontRaises,
        feature: ARM_ANGLE,
        enter: Criterion::BothAbove(70.0),
        exit: Criterion::BothBelow(30.0),
    },
    ExerciseRule {
        exercise: ExerciseId::JumpingJacks,
        feature: Feature::Composite(Composite::JumpingJack),
        enter: Criterion::Engaged,
        exit: Criterion::Released,
    },
    ExerciseRule {
        exercise: ExerciseId::PilatesSitUpsHybrid,
        feature: Feature::Composite(Composite::PilatesCrunch),
        enter: Criterion::Engaged,
        exit: Criterion::Released,
    },
];

/// Counting rule for an exercise, if it has one
pub fn rule_for(exercise: ExerciseId) -> Option<&'static ExerciseRule> {
    RULES.iter().find(|rule| rule.exercise == exercise)
}
