//! Anatomical landmark identifiers
//!
//! The index of each `JointId` is its slot in the flat landmark buffer the
//! pose estimator hands over (`[x, y, confidence]` per joint).

use serde::{Deserialize, Serialize};

// ============================================================================
// JOINT IDENTIFIERS
// ============================================================================

/// Number of landmarks per frame
pub const JOINT_COUNT: usize = 19;

/// Anatomical landmark with a stable identity across frames
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JointId {
    Nose,
    Neck,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    Root,
}

impl JointId {
    /// Every joint in buffer order
    pub const ALL: [JointId; JOINT_COUNT] = [
        JointId::Nose,
        JointId::Neck,
        JointId::LeftEye,
        JointId::RightEye,
        JointId::LeftEar,
        JointId::RightEar,
        JointId::LeftShoulder,
        JointId::RightShoulder,
        JointId::LeftElbow,
        JointId::RightElbow,
        JointId::LeftWrist,
        JointId::RightWrist,
        JointId::LeftHip,
        JointId::RightHip,
        JointId::LeftKnee,
        JointId::RightKnee,
        JointId::LeftAnkle,
        JointId::RightAnkle,
        JointId::Root,
    ];

    /// Slot in the flat landmark buffer
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// The joint for a limb part on a given side of the body
    pub fn sided(part: BodyPart, side: Side) -> Self {
        match (part, side) {
            (BodyPart::Eye, Side::Left) => JointId::LeftEye,
            (BodyPart::Eye, Side::Right) => JointId::RightEye,
            (BodyPart::Ear, Side::Left) => JointId::LeftEar,
            (BodyPart::Ear, Side::Right) => JointId::RightEar,
            (BodyPart::Shoulder, Side::Left) => JointId::LeftShoulder,
            (BodyPart::Shoulder, Side::Right) => JointId::RightShoulder,
            (BodyPart::Elbow, Side::Left) => JointId::LeftElbow,
            (BodyPart::Elbow, Side::Right) => JointId::RightElbow,
            (BodyPart::Wrist, Side::Left) => JointId::LeftWrist,
            (BodyPart::Wrist, Side::Right) => JointId::RightWrist,
            (BodyPart::Hip, Side::Left) => JointId::LeftHip,
            (BodyPart::Hip, Side::Right) => JointId::RightHip,
            (BodyPart::Knee, Side::Left) => JointId::LeftKnee,
            (BodyPart::Knee, Side::Right) => JointId::RightKnee,
            (BodyPart::Ankle, Side::Left) => JointId::LeftAnkle,
            (BodyPart::Ankle, Side::Right) => JointId::RightAnkle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JointId::Nose => "nose",
            JointId::Neck => "neck",
            JointId::LeftEye => "left_eye",
            JointId::RightEye => "right_eye",
            JointId::LeftEar => "left_ear",
            JointId::RightEar => "right_ear",
            JointId::LeftShoulder => "left_shoulder",
            JointId::RightShoulder => "right_shoulder",
            JointId::LeftElbow => "left_elbow",
            JointId::RightElbow => "right_elbow",
            JointId::LeftWrist => "left_wrist",
            JointId::RightWrist => "right_wrist",
            JointId::LeftHip => "left_hip",
            JointId::RightHip => "right_hip",
            JointId::LeftKnee => "left_knee",
            JointId::RightKnee => "right_knee",
            JointId::LeftAnkle => "left_ankle",
            JointId::RightAnkle => "right_ankle",
            JointId::Root => "root",
        }
    }
}

// ============================================================================
// LIMB PARTS
// ============================================================================

/// Side of the body, as seen by the estimator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

/// Paired landmarks that exist once per side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyPart {
    Eye,
    Ear,
    Shoulder,
    Elbow,
    Wrist,
    Hip,
    Knee,
    Ankle,
}
