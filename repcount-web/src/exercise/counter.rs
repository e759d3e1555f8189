//! Hysteresis rep counter
//!
//! A rep is counted only on Descending → Resting. Enter and exit use
//! separate thresholds, so jitter around either one cannot double count.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::features::Reading;
use super::rules::ExerciseRule;
use crate::config::EngineConfig;
use crate::pose::{JointFrame, JointId};

/// Coarse position within a repetition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Top of the movement, waiting for the enter threshold
    #[default]
    Resting,
    /// Active half, waiting for the exit threshold
    Descending,
}

/// Apply one reading to a phase
///
/// Returns the next phase and whether a rep was completed. At most one
/// transition happens per call.
pub fn step(phase: Phase, rule: &ExerciseRule, reading: &Reading) -> (Phase, bool) {
    match phase {
        Phase::Resting if rule.enter.holds(reading) => (Phase::Descending, false),
        Phase::Descending if rule.exit.holds(reading) => (Phase::Resting, true),
        _ => (phase, false),
    }
}

/// Rep counter for one session
pub struct RepCounter {
    rule: &'static ExerciseRule,
    /// Cached from the rule so each frame avoids rebuilding it
    required: Vec<JointId>,
    phase: Phase,
    reps: u32,
}

impl RepCounter {
    pub fn new(rule: &'static ExerciseRule) -> Self {
        Self {
            rule,
            required: rule.required_joints(),
            phase: Phase::Resting,
            reps: 0,
        }
    }

    /// Feed one frame
    ///
    /// Returns the new rep count when this frame completed a rep. Frames
    /// missing a required joint leave phase and count untouched.
    pub fn update(&mut self, frame: &JointFrame, config: &EngineConfig) -> Option<u32> {
        if !frame.contains_all(&self.required) {
            debug!(
                "{}: skipping frame, missing {:?}",
                self.rule.exercise,
                frame
                    .missing(&self.required)
                    .map(|id| id.as_str())
                    .collect::<Vec<_>>()
            );
            return None;
        }

        let reading = self.rule.feature.read(frame, config)?;
        let (next, completed) = step(self.phase, self.rule, &reading);

        if next != self.phase {
            debug!("{}: {:?} -> {:?} ({:?})", self.rule.exercise, self.phase, next, reading);
        }
        self.phase = next;

        if completed {
            self.reps = self.reps.saturating_add(1);
            info!("{}: rep {}", self.rule.exercise, self.reps);
            Some(self.reps)
        } else {
            None
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn rule(&self) -> &'static ExerciseRule {
        self.rule
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::exercise::{rule_for, ExerciseId};
    use crate::pose::{BodyPart, Joint, Side};

    const LIMB: f32 = 100.0;

    /// Frame where the `outer`-`vertex`-`inner` angle on each side is as given
    fn limb_frame(parts: [BodyPart; 3], left: f32, right: f32) -> JointFrame {
        let [outer, vertex, inner] = parts;
        let mut points = Vec::new();
        for (side, degrees, x) in [(Side::Left, left, 100.0), (Side::Right, right, 300.0)] {
            // Outer joint straight above the vertex, inner rotated `degrees` away from it
            let middle = (x, 400.0);
            let top = (x, 400.0 - LIMB);
            let theta = degrees.to_radians();
            let end = (x + LIMB * theta.sin(), 400.0 - LIMB * theta.cos());
            for (part, (px, py)) in [(outer, top), (vertex, middle), (inner, end)] {
                points.push((JointId::sided(part, side), Joint::new(px, py, 0.9)));
            }
        }
        JointFrame::new(points)
    }

    /// Frame where the shoulder-elbow-wrist angle on each side is as given
    pub(crate) fn elbow_frame(left: f32, right: f32) -> JointFrame {
        limb_frame([BodyPart::Shoulder, BodyPart::Elbow, BodyPart::Wrist], left, right)
    }

    /// Frame where both hip-knee-ankle angles are `degrees`
    fn knee_frame(degrees: f32) -> JointFrame {
        limb_frame([BodyPart::Hip, BodyPart::Knee, BodyPart::Ankle], degrees, degrees)
    }

    fn push_up_counter() -> RepCounter {
        RepCounter::new(rule_for(ExerciseId::PushUps).unwrap())
    }

    #[test]
    fn test_elbow_frame_builder() {
        let frame = elbow_frame(100.0, 170.0);
        let left = crate::geometry::angle(
            frame.position(JointId::LeftShoulder).unwrap(),
            frame.position(JointId::LeftElbow).unwrap(),
            frame.position(JointId::LeftWrist).unwrap(),
        )
        .unwrap();
        assert!((left - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_push_up_scenario() {
        let config = EngineConfig::default();
        let mut counter = push_up_counter();

        assert_eq!(counter.update(&elbow_frame(100.0, 100.0), &config), None);
        assert_eq!(counter.phase(), Phase::Descending);

        assert_eq!(counter.update(&elbow_frame(170.0, 170.0), &config), Some(1));
        assert_eq!(counter.phase(), Phase::Resting);

        assert_eq!(counter.update(&elbow_frame(170.0, 170.0), &config), None);
        assert_eq!(counter.reps(), 1);
    }

    #[test]
    fn test_exit_without_enter_never_counts() {
        let config = EngineConfig::default();
        let mut counter = push_up_counter();
        for _ in 0..5 {
            counter.update(&elbow_frame(175.0, 175.0), &config);
        }
        assert_eq!(counter.reps(), 0);
        assert_eq!(counter.phase(), Phase::Resting);
    }

    #[test]
    fn test_jitter_between_thresholds() {
        let config = EngineConfig::default();
        let mut counter = push_up_counter();
        // Hovering in the dead band between 120 and 160 does nothing
        for angle in [130.0, 150.0, 125.0, 159.0, 140.0] {
            counter.update(&elbow_frame(angle, angle), &config);
        }
        assert_eq!(counter.reps(), 0);
        assert_eq!(counter.phase(), Phase::Resting);

        counter.update(&elbow_frame(110.0, 110.0), &config);
        for angle in [150.0, 115.0, 130.0, 118.0] {
            counter.update(&elbow_frame(angle, angle), &config);
        }
        assert_eq!(counter.reps(), 0);
        assert_eq!(counter.phase(), Phase::Descending);

        counter.update(&elbow_frame(165.0, 165.0), &config);
        assert_eq!(counter.reps(), 1);
    }

    #[test]
    fn test_one_arm_is_not_enough() {
        let config = EngineConfig::default();
        let mut counter = push_up_counter();
        counter.update(&elbow_frame(100.0, 150.0), &config);
        assert_eq!(counter.phase(), Phase::Resting);
        counter.update(&elbow_frame(100.0, 100.0), &config);
        counter.update(&elbow_frame(170.0, 140.0), &config);
        assert_eq!(counter.reps(), 0);
        assert_eq!(counter.phase(), Phase::Descending);
    }

    #[test]
    fn test_missing_joint_retains_phase() {
        let config = EngineConfig::default();
        let mut counter = push_up_counter();
        counter.update(&elbow_frame(100.0, 100.0), &config);

        let partial = JointFrame::new(
            elbow_frame(170.0, 170.0)
                .iter()
                .filter(|(id, _)| *id != JointId::LeftElbow)
                .map(|(id, joint)| (id, *joint)),
        );
        assert_eq!(counter.update(&partial, &config), None);
        assert_eq!(counter.phase(), Phase::Descending);
        assert_eq!(counter.reps(), 0);

        assert_eq!(counter.update(&elbow_frame(170.0, 170.0), &config), Some(1));
    }

    #[test]
    fn test_count_is_monotonic_over_many_cycles() {
        let config = EngineConfig::default();
        let mut counter = RepCounter::new(rule_for(ExerciseId::BicepCurls).unwrap());
        let mut last = 0;
        for cycle in 0..10 {
            for angle in [170.0, 90.0, 45.0, 90.0, 170.0] {
                counter.update(&elbow_frame(angle, angle), &config);
                assert!(counter.reps() >= last);
                last = counter.reps();
            }
            assert_eq!(counter.reps(), cycle + 1);
        }
    }

    #[test]
    fn test_knee_angle_cycles() {
        let config = EngineConfig::default();
        for exercise in [ExerciseId::BasicSquats, ExerciseId::Lunges, ExerciseId::WallSquats] {
            let mut counter = RepCounter::new(rule_for(exercise).unwrap());

            // Standing up without ever going down never counts
            for _ in 0..3 {
                assert_eq!(counter.update(&knee_frame(170.0), &config), None, "{}", exercise);
            }
            assert_eq!(counter.reps(), 0, "{}", exercise);

            assert_eq!(counter.update(&knee_frame(85.0), &config), None, "{}", exercise);
            assert_eq!(counter.phase(), Phase::Descending, "{}", exercise);
            assert_eq!(counter.update(&knee_frame(150.0), &config), None, "{}", exercise);
            assert_eq!(counter.update(&knee_frame(170.0), &config), Some(1), "{}", exercise);
            assert_eq!(counter.update(&knee_frame(170.0), &config), None, "{}", exercise);
            assert_eq!(counter.reps(), 1, "{}", exercise);
        }
    }

    fn frame_of(points: &[(JointId, f32, f32)]) -> JointFrame {
        JointFrame::new(points.iter().map(|(id, x, y)| (*id, Joint::new(*x, *y, 0.9))))
    }

    #[test]
    fn test_high_knees_cycle() {
        let config = EngineConfig::default();
        let mut counter = RepCounter::new(rule_for(ExerciseId::HighKnees).unwrap());
        let knees = |left: f32, right: f32| {
            frame_of(&[
                (JointId::LeftHip, 150.0, 400.0),
                (JointId::RightHip, 250.0, 400.0),
                (JointId::LeftKnee, 150.0, left),
                (JointId::RightKnee, 250.0, right),
            ])
        };

        assert_eq!(counter.update(&knees(380.0, 550.0), &config), None);
        assert_eq!(counter.phase(), Phase::Descending);
        // Switching legs mid-air is still the same rep
        assert_eq!(counter.update(&knees(550.0, 370.0), &config), None);
        assert_eq!(counter.update(&knees(550.0, 550.0), &config), Some(1));
    }

    #[test]
    fn test_pilates_cycle() {
        let config = EngineConfig::default();
        let mut counter = RepCounter::new(rule_for(ExerciseId::PilatesSitUpsHybrid).unwrap());
        let crunch = |shoulder_y: f32, elbow: (f32, f32)| {
            frame_of(&[
                (JointId::LeftShoulder, 200.0, shoulder_y),
                (JointId::RightShoulder, 220.0, shoulder_y),
                (JointId::LeftElbow, elbow.0, elbow.1),
                (JointId::RightElbow, 150.0, 450.0),
                (JointId::LeftHip, 200.0, 500.0),
                (JointId::RightHip, 220.0, 500.0),
                (JointId::LeftKnee, 260.0, 400.0),
                (JointId::RightKnee, 280.0, 400.0),
            ])
        };

        // Torso up but elbow far from the knee: not engaged yet
        assert_eq!(counter.update(&crunch(390.0, (120.0, 300.0)), &config), None);
        assert_eq!(counter.phase(), Phase::Resting);

        assert_eq!(counter.update(&crunch(390.0, (250.0, 405.0)), &config), None);
        assert_eq!(counter.phase(), Phase::Descending);

        assert_eq!(counter.update(&crunch(600.0, (150.0, 560.0)), &config), Some(1));
        assert_eq!(counter.phase(), Phase::Resting);
    }

    /// Arms held out at `degrees` from the torso on both sides
    fn arm_raise_frame(degrees: f32) -> JointFrame {
        let theta = degrees.to_radians();
        let mut points = Vec::new();
        for (sign, x, side) in [(-1.0, 150.0, Side::Left), (1.0, 250.0, Side::Right)] {
            points.push((JointId::sided(BodyPart::Shoulder, side), x, 200.0));
            points.push((JointId::sided(BodyPart::Hip, side), x, 400.0));
            points.push((
                JointId::sided(BodyPart::Elbow, side),
                x + sign * LIMB * theta.sin(),
                200.0 + LIMB * theta.cos(),
            ));
        }
        frame_of(&points)
    }

    #[test]
    fn test_raise_cycles() {
        let config = EngineConfig::default();
        for exercise in [ExerciseId::LateralRaises, ExerciseId::FrontRaises] {
            let mut counter = RepCounter::new(rule_for(exercise).unwrap());
            assert_eq!(counter.update(&arm_raise_frame(10.0), &config), None, "{}", exercise);
            assert_eq!(counter.update(&arm_raise_frame(85.0), &config), None, "{}", exercise);
            assert_eq!(counter.phase(), Phase::Descending, "{}", exercise);
            assert_eq!(counter.update(&arm_raise_frame(50.0), &config), None, "{}", exercise);
            assert_eq!(counter.update(&arm_raise_frame(15.0), &config), Some(1), "{}", exercise);
            assert_eq!(counter.update(&arm_raise_frame(15.0), &config), None, "{}", exercise);
        }
    }

    /// Jumping jack pose with arms up/down and feet apart/together
    fn jack_frame(arms_up: bool, legs_open: bool) -> JointFrame {
        let wrist_y = if arms_up { 50.0 } else { 380.0 };
        let (left_ankle, right_ankle) = if legs_open { (100.0, 300.0) } else { (175.0, 225.0) };
        frame_of(&[
            (JointId::LeftWrist, 120.0, wrist_y),
            (JointId::RightWrist, 280.0, wrist_y),
            (JointId::LeftShoulder, 160.0, 200.0),
            (JointId::RightShoulder, 240.0, 200.0),
            (JointId::LeftHip, 170.0, 400.0),
            (JointId::RightHip, 230.0, 400.0),
            (JointId::LeftAnkle, left_ankle, 700.0),
            (JointId::RightAnkle, right_ankle, 700.0),
        ])
    }

    #[test]
    fn test_jumping_jack_needs_full_release() {
        let config = EngineConfig::default();
        let mut counter = RepCounter::new(rule_for(ExerciseId::JumpingJacks).unwrap());

        // Half-open on the way in does not enter
        assert_eq!(counter.update(&jack_frame(true, false), &config), None);
        assert_eq!(counter.phase(), Phase::Resting);

        assert_eq!(counter.update(&jack_frame(true, true), &config), None);
        assert_eq!(counter.phase(), Phase::Descending);

        // Arms still up with legs closed is not a release
        assert_eq!(counter.update(&jack_frame(true, false), &config), None);
        assert_eq!(counter.phase(), Phase::Descending);
        assert_eq!(counter.update(&jack_frame(false, true), &config), None);
        assert_eq!(counter.phase(), Phase::Descending);

        assert_eq!(counter.update(&jack_frame(false, false), &config), Some(1));
        assert_eq!(counter.phase(), Phase::Resting);
    }
}
