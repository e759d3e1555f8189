//! Flat landmark buffer decoding
//!
//! The estimator hands over one `[x, y, confidence]` triple per joint in
//! `JointId` order, with normalized y pointing up. Decoding filters by
//! confidence and applies the orientation correction, so everything past
//! this point sees screen space only.

use nalgebra::Point2;

use super::frame::{Joint, JointFrame};
use super::joint::{JointId, JOINT_COUNT};
use super::orientation::{to_screen, Orientation, Viewport};
use crate::error::{EngineError, Result};

/// Values per joint: x, y, confidence
pub const VALUES_PER_JOINT: usize = 3;

/// Length of a full landmark buffer
pub const LANDMARK_BUFFER_LEN: usize = JOINT_COUNT * VALUES_PER_JOINT;

/// Decode a raw landmark buffer into a corrected frame
pub fn decode_landmarks(
    data: &[f32],
    orientation: Orientation,
    viewport: Viewport,
    min_confidence: f32,
) -> Result<JointFrame> {
    if data.len() != LANDMARK_BUFFER_LEN {
        return Err(EngineError::LandmarkLength {
            actual: data.len(),
            expected: LANDMARK_BUFFER_LEN,
        });
    }

    let observations = JointId::ALL
        .iter()
        .zip(data.chunks_exact(VALUES_PER_JOINT))
        .map(|(id, values)| {
            let screen = to_screen(Point2::new(values[0], values[1]), orientation, viewport);
            (*id, Joint::new(screen.x, screen.y, values[2]))
        });

    Ok(JointFrame::from_observations(observations, min_confidence))
}
