//! Per-frame joint observations
//!
//! A `JointFrame` holds only the joints the estimator was confident about.
//! Low-confidence joints are absent, never zero-valued.

use nalgebra::Point2;

use super::joint::{BodyPart, JointId, Side, JOINT_COUNT};

/// A single observed landmark in screen space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Joint {
    pub position: Point2<f32>,
    /// Estimator confidence in (0, 1]
    pub confidence: f32,
}

impl Joint {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self {
            position: Point2::new(x, y),
            confidence,
        }
    }
}

/// One video frame worth of joints, immutable once built
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JointFrame {
    joints: [Option<Joint>; JOINT_COUNT],
}

impl JointFrame {
    /// Build a frame, keeping only joints with confidence above `min_confidence`
    ///
    /// Joints with non-finite coordinates are dropped along with the
    /// low-confidence ones.
    pub fn from_observations<I>(observations: I, min_confidence: f32) -> Self
    where
        I: IntoIterator<Item = (JointId, Joint)>,
    {
        let mut joints = [None; JOINT_COUNT];
        for (id, joint) in observations {
            let usable = joint.confidence > min_confidence
                && joint.position.x.is_finite()
                && joint.position.y.is_finite();
            if usable {
                joints[id.index()] = Some(joint);
            }
        }
        Self { joints }
    }

    /// Build a frame with the default "confidence > 0" rule
    pub fn new<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = (JointId, Joint)>,
    {
        Self::from_observations(observations, 0.0)
    }

    pub fn get(&self, id: JointId) -> Option<&Joint> {
        self.joints[id.index()].as_ref()
    }

    pub fn position(&self, id: JointId) -> Option<Point2<f32>> {
        self.get(id).map(|joint| joint.position)
    }

    /// Position of a limb part on one side of the body
    pub fn part(&self, part: BodyPart, side: Side) -> Option<Point2<f32>> {
        self.position(JointId::sided(part, side))
    }

    pub fn contains(&self, id: JointId) -> bool {
        self.joints[id.index()].is_some()
    }

    /// True when every joint in `ids` is present
    pub fn contains_all(&self, ids: &[JointId]) -> bool {
        ids.iter().all(|id| self.contains(*id))
    }

    /// Joints from `ids` that are absent in this frame
    pub fn missing<'a>(&'a self, ids: &'a [JointId]) -> impl Iterator<Item = JointId> + 'a {
        ids.iter().copied().filter(move |id| !self.contains(*id))
    }

    pub fn len(&self) -> usize {
        self.joints.iter().filter(|joint| joint.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (JointId, &Joint)> {
        JointId::ALL
            .iter()
            .zip(self.joints.iter())
            .filter_map(|(id, joint)| joint.as_ref().map(|joint| (*id, joint)))
    }
}
