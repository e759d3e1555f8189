//! Pose module - joint identifiers, per-frame observations, coordinate correction
//!
//! Re-exports only. All logic in submodules.

mod decode;
mod frame;
mod joint;
mod orientation;

pub use decode::{decode_landmarks, LANDMARK_BUFFER_LEN, VALUES_PER_JOINT};
pub use frame::{Joint, JointFrame};
pub use joint::{BodyPart, JointId, Side, JOINT_COUNT};
pub use orientation::{to_screen, Orientation, Viewport};
