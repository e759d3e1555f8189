//! Plank form monitor
//!
//! Planks are held, not repeated. The monitor watches how far the hips sag
//! below the shoulders and walks Ok → Warned → Failed. Warned → Ok is the
//! only way back; Failed is terminal.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::PlankThresholds;
use crate::pose::{BodyPart, JointFrame, JointId, Side};

/// Joints the hip-drop measurement reads
pub const PLANK_JOINTS: [JointId; 4] = [
    JointId::LeftShoulder,
    JointId::RightShoulder,
    JointId::LeftHip,
    JointId::RightHip,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlankStatus {
    #[default]
    Ok,
    Warned,
    Failed,
}

/// Outcome of one plank frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlankSignal {
    Warning,
    Failure,
}

/// Vertical distance from the shoulder line down to the hip line
///
/// Positive when the hips sit lower on screen than the shoulders.
pub fn hip_drop(frame: &JointFrame) -> Option<f32> {
    let hips =
        (frame.part(BodyPart::Hip, Side::Left)?.y + frame.part(BodyPart::Hip, Side::Right)?.y) / 2.0;
    let shoulders = (frame.part(BodyPart::Shoulder, Side::Left)?.y
        + frame.part(BodyPart::Shoulder, Side::Right)?.y)
        / 2.0;
    Some(hips - shoulders)
}

/// Edge-triggered hip-drop monitor
pub struct PlankMonitor {
    thresholds: PlankThresholds,
    status: PlankStatus,
}

impl PlankMonitor {
    pub fn new(thresholds: PlankThresholds) -> Self {
        Self {
            thresholds,
            status: PlankStatus::Ok,
        }
    }

    /// Feed one frame; frames missing a shoulder or hip are ignored
    pub fn update(&mut self, frame: &JointFrame) -> Option<PlankSignal> {
        if !frame.contains_all(&PLANK_JOINTS) {
            debug!("plank: skipping frame, shoulders or hips missing");
            return None;
        }
        self.observe(hip_drop(frame)?)
    }

    /// Feed one hip-drop measurement
    pub fn observe(&mut self, drop: f32) -> Option<PlankSignal> {
        if self.status == PlankStatus::Failed {
            return None;
        }

        if drop > self.thresholds.failure {
            warn!("plank: hip drop {:.1} past failure threshold", drop);
            self.status = PlankStatus::Failed;
            return Some(PlankSignal::Failure);
        }

        if drop > self.thresholds.warning {
            if self.status == PlankStatus::Ok {
                info!("plank: hip drop {:.1}, warning", drop);
                self.status = PlankStatus::Warned;
                return Some(PlankSignal::Warning);
            }
            return None;
        }

        if self.status == PlankStatus::Warned {
            debug!("plank: hips recovered ({:.1})", drop);
        }
        self.status = PlankStatus::Ok;
        None
    }

    pub fn status(&self) -> PlankStatus {
        self.status
    }

    pub fn is_failed(&self) -> bool {
        self.status == PlankStatus::Failed
    }
}
