//! Estimator → screen coordinate correction
//!
//! The pose estimator reports normalized coordinates with y pointing up.
//! Rules read screen space: y grows downward, scaled to the viewport.
//! In landscape-left the image is mirrored horizontally instead of flipped.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Device orientation reported by the camera pipeline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    /// Decode the numeric code JS passes across the bridge
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Orientation::Portrait),
            1 => Some(Orientation::PortraitUpsideDown),
            2 => Some(Orientation::LandscapeLeft),
            3 => Some(Orientation::LandscapeRight),
            _ => None,
        }
    }
}

/// Logical screen size coordinates are scaled to
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    /// Portrait phone screen in points
    fn default() -> Self {
        Self {
            width: 390.0,
            height: 844.0,
        }
    }
}

/// Map one normalized estimator point into screen space
pub fn to_screen(raw: Point2<f32>, orientation: Orientation, viewport: Viewport) -> Point2<f32> {
    let (x, y) = match orientation {
        Orientation::LandscapeLeft => (1.0 - raw.x, raw.y),
        _ => (raw.x, 1.0 - raw.y),
    };
    Point2::new(x * viewport.width, y * viewport.height)
}
