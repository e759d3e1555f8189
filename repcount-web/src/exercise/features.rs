//! Feature extraction for exercise rules
//!
//! Each rule reads exactly one feature from the current frame. Features are
//! one of three shapes:
//! - paired angle: the same three-joint angle on the left and right limb
//! - height comparison: whether one joint sits above another, per side
//! - composite posture: several boolean checks folded into engaged/released

use nalgebra::Point2;

use crate::config::EngineConfig;
use crate::geometry::{angle, distance, midpoint};
use crate::pose::{BodyPart, JointFrame, JointId, Side};

/// Ankle spread must exceed hip width by this factor for legs to count as open
const LEGS_OPEN_RATIO: f32 = 1.3;

/// Three limb parts forming an angle at `vertex`, mirrored on both sides
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AngleSpec {
    pub outer: BodyPart,
    pub vertex: BodyPart,
    pub inner: BodyPart,
}

/// Multi-condition postures that do not reduce to a single measurement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    /// Arms above shoulders and feet wider than hips
    JumpingJack,
    /// Knees raised, torso up, elbow tucked to knee
    PilatesCrunch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    PairedAngle(AngleSpec),
    /// `upper` is above `lower` (smaller screen y), checked per side
    Height { upper: BodyPart, lower: BodyPart },
    Composite(Composite),
}

/// Value of a feature in one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reading {
    Angles { left: f32, right: f32 },
    Raised { left: bool, right: bool },
    Posture { engaged: bool, released: bool },
}

impl Feature {
    /// Joints that must all be present before the feature can be read
    pub fn required_joints(&self) -> Vec<JointId> {
        let parts = match self {
            Feature::PairedAngle(spec) => vec![spec.outer, spec.vertex, spec.inner],
            Feature::Height { upper, lower } => vec![*upper, *lower],
            Feature::Composite(Composite::JumpingJack) => vec![
                BodyPart::Wrist,
                BodyPart::Shoulder,
                BodyPart::Hip,
                BodyPart::Ankle,
            ],
            Feature::Composite(Composite::PilatesCrunch) => vec![
                BodyPart::Shoulder,
                BodyPart::Elbow,
                BodyPart::Hip,
                BodyPart::Knee,
            ],
        };

        parts
            .into_iter()
            .flat_map(|part| Side::BOTH.map(|side| JointId::sided(part, side)))
            .collect()
    }

    /// Compute the feature from the current frame only
    ///
    /// Returns `None` if a needed joint is missing or an angle is degenerate.
    pub fn read(&self, frame: &JointFrame, config: &EngineConfig) -> Option<Reading> {
        match self {
            Feature::PairedAngle(spec) => Some(Reading::Angles {
                left: limb_angle(frame, spec, Side::Left)?,
                right: limb_angle(frame, spec, Side::Right)?,
            }),
            Feature::Height { upper, lower } => Some(Reading::Raised {
                left: is_above(frame, *upper, *lower, Side::Left)?,
                right: is_above(frame, *upper, *lower, Side::Right)?,
            }),
            Feature::Composite(Composite::JumpingJack) => jumping_jack(frame),
            Feature::Composite(Composite::PilatesCrunch) => {
                pilates_crunch(frame, config.elbow_knee_distance)
            }
        }
    }
}

fn limb_angle(frame: &JointFrame, spec: &AngleSpec, side: Side) -> Option<f32> {
    angle(
        frame.part(spec.outer, side)?,
        frame.part(spec.vertex, side)?,
        frame.part(spec.inner, side)?,
    )
}

fn is_above(frame: &JointFrame, upper: BodyPart, lower: BodyPart, side: Side) -> Option<bool> {
    Some(frame.part(upper, side)?.y < frame.part(lower, side)?.y)
}

/// Midpoint of a left/right pair
fn center(frame: &JointFrame, part: BodyPart) -> Option<Point2<f32>> {
    Some(midpoint(
        frame.part(part, Side::Left)?,
        frame.part(part, Side::Right)?,
    ))
}

fn jumping_jack(frame: &JointFrame) -> Option<Reading> {
    let arms_up = is_above(frame, BodyPart::Wrist, BodyPart::Shoulder, Side::Left)?
        && is_above(frame, BodyPart::Wrist, BodyPart::Shoulder, Side::Right)?;

    let ankle_spread = (frame.part(BodyPart::Ankle, Side::Left)?.x
        - frame.part(BodyPart::Ankle, Side::Right)?.x)
        .abs();
    let hip_width = (frame.part(BodyPart::Hip, Side::Left)?.x
        - frame.part(BodyPart::Hip, Side::Right)?.x)
        .abs();
    let legs_open = ankle_spread > hip_width * LEGS_OPEN_RATIO;

    Some(Reading::Posture {
        engaged: arms_up && legs_open,
        released: !arms_up && !legs_open,
    })
}

fn pilates_crunch(frame: &JointFrame, elbow_knee_distance: f32) -> Option<Reading> {
    let knees = center(frame, BodyPart::Knee)?;
    let hips = center(frame, BodyPart::Hip)?;
    let shoulders = center(frame, BodyPart::Shoulder)?;

    let knees_up = knees.y < hips.y;
    let shoulders_up = shoulders.y <= knees.y;

    // Closer of the two same-side elbow/knee pairs
    let elbow_gap = Side::BOTH
        .iter()
        .map(|side| {
            Some(distance(
                frame.part(BodyPart::Elbow, *side)?,
                frame.part(BodyPart::Knee, *side)?,
            ))
        })
        .collect::<Option<Vec<f32>>>()?
        .into_iter()
        .fold(f32::INFINITY, f32::min);
    let elbow_tucked = elbow_gap < elbow_knee_distance;

    Some(Reading::Posture {
        engaged: knees_up && shoulders_up && elbow_tucked,
        released: !shoulders_up,
    })
}
